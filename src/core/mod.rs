pub mod dispatcher;
pub mod report;
pub mod tracker;

pub use crate::domain::model::{OutputFormat, Summary, WorkoutPackage, WorkoutRecord};
pub use crate::domain::ports::PackageSource;
pub use crate::utils::error::Result;
