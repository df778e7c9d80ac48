use crate::domain::model::{OutputFormat, WorkoutPackage};
use crate::utils::error::Result;

/// Anything that can hand workout packages to the tracker: a TOML package
/// file, the command line, the built-in sample set.
pub trait PackageSource {
    fn source_name(&self) -> &str;

    fn packages(&self) -> &[WorkoutPackage];

    /// 未指定輸出格式時回傳 `None`
    fn output_format(&self) -> Result<Option<OutputFormat>> {
        Ok(None)
    }
}
