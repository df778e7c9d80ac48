pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{resolve_settings, sample_packages, toml_config::TomlConfig, TrackerSettings};
pub use crate::core::dispatcher::read_package;
pub use crate::core::tracker::{run, RunReport, Tracker};
pub use domain::model::{OutputFormat, Summary, WorkoutKind, WorkoutPackage, WorkoutRecord};
pub use utils::error::{Result, TrackerError};
