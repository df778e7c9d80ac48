pub mod toml_config;

use crate::domain::model::{OutputFormat, WorkoutPackage};
use crate::domain::ports::PackageSource;
use crate::utils::error::Result;

/// The three workouts processed when no packages are supplied.
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Everything the tracker needs for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSettings {
    pub packages: Vec<WorkoutPackage>,
    pub format: OutputFormat,
}

/// 依序合併各來源的訓練資料；後面的來源可覆蓋輸出格式。
/// 所有來源皆為空時改用內建範例。
pub fn resolve_settings(sources: &[&dyn PackageSource]) -> Result<TrackerSettings> {
    let mut packages = Vec::new();
    let mut format = None;

    for source in sources {
        tracing::debug!(
            "Loaded {} packages from {}",
            source.packages().len(),
            source.source_name()
        );
        packages.extend_from_slice(source.packages());

        if let Some(declared) = source.output_format()? {
            format = Some(declared);
        }
    }

    if packages.is_empty() {
        tracing::info!("📋 No packages supplied, using built-in samples");
        packages = sample_packages();
    }

    Ok(TrackerSettings {
        packages,
        format: format.unwrap_or_default(),
    })
}

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use super::{resolve_settings, TrackerSettings};
    use crate::domain::model::{OutputFormat, WorkoutPackage};
    use crate::domain::ports::PackageSource;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "fitness-tracker")]
    #[command(about = "Compute distance, speed and calories from workout sensor packages")]
    pub struct CliConfig {
        /// Path to a TOML package file
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Workout package as TAG:v1,v2,... (repeatable, e.g. RUN:15000,1,75)
        #[arg(short, long = "package", value_name = "TAG:VALUES")]
        pub packages: Vec<WorkoutPackage>,

        /// Output format, overrides the package file setting
        #[arg(long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Enable verbose output
        #[arg(short, long)]
        pub verbose: bool,

        /// Emit logs as JSON on stderr
        #[arg(long)]
        pub log_json: bool,

        /// Dispatch and validate packages without printing summaries
        #[arg(long)]
        pub dry_run: bool,
    }

    impl CliConfig {
        /// Load the package file (if any) and merge it with command-line packages.
        pub fn resolve(&self) -> Result<TrackerSettings> {
            let file_config = match &self.config {
                Some(path) => {
                    tracing::info!("📁 Loading packages from: {}", path.display());
                    let config = TomlConfig::from_file(path)?;
                    config.validate()?;
                    Some(config)
                }
                None => None,
            };

            let mut sources: Vec<&dyn PackageSource> = Vec::new();
            if let Some(config) = &file_config {
                sources.push(config);
            }
            sources.push(self);

            resolve_settings(&sources)
        }
    }

    impl PackageSource for CliConfig {
        fn source_name(&self) -> &str {
            "command line"
        }

        fn packages(&self) -> &[WorkoutPackage] {
            &self.packages
        }

        fn output_format(&self) -> Result<Option<OutputFormat>> {
            Ok(self.format)
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
