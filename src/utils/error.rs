use thiserror::Error;

/// 尚未支援的訓練類型時顯示給使用者的訊息
pub const UNSUPPORTED_WORKOUT_MESSAGE: &str =
    "Данный тип тренировок еще не добавлен в наш фитнес-трекер :(";

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Unsupported workout tag: {tag}")]
    UnsupportedWorkoutTag { tag: String },

    #[error("Workout '{tag}' expects {expected} values, got {actual}")]
    ArgumentCount {
        tag: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid divisor for '{field}': {value} (must be greater than zero)")]
    InvalidDivisor { field: String, value: f64 },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl TrackerError {
    /// 是否只影響單筆訓練資料 (driver 略過該筆並繼續)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TrackerError::UnsupportedWorkoutTag { .. }
                | TrackerError::ArgumentCount { .. }
                | TrackerError::InvalidDivisor { .. }
                | TrackerError::InvalidValue { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackerError::UnsupportedWorkoutTag { .. } => UNSUPPORTED_WORKOUT_MESSAGE.to_string(),
            TrackerError::ArgumentCount {
                tag,
                expected,
                actual,
            } => format!(
                "Workout '{}' needs {} sensor values but {} were given",
                tag, expected, actual
            ),
            TrackerError::InvalidDivisor { field, .. } => {
                format!("'{}' must be greater than zero", field)
            }
            TrackerError::InvalidValue { field, reason, .. } => {
                format!("'{}' is not valid: {}", field, reason)
            }
            TrackerError::ConfigError { message } => format!("Configuration problem: {}", message),
            TrackerError::IoError(e) => format!("Could not read or write a file: {}", e),
            TrackerError::TomlError(e) => format!("Package file is not valid TOML: {}", e),
            TrackerError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            TrackerError::CsvError(e) => format!("Could not render CSV output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TrackerError::UnsupportedWorkoutTag { .. } => "Use one of the supported tags: SWM, RUN, WLK",
            TrackerError::ArgumentCount { .. } => {
                "SWM takes 5 values, RUN takes 3 values, WLK takes 4 values"
            }
            TrackerError::InvalidDivisor { .. } => {
                "Check that duration and height readings are positive"
            }
            TrackerError::InvalidValue { .. } => {
                "Action count must be a non-negative whole number and all values must be finite"
            }
            TrackerError::ConfigError { .. } | TrackerError::TomlError(_) => {
                "Check the package file syntax and the --package arguments"
            }
            TrackerError::IoError(_) => "Make sure the file exists and is readable",
            TrackerError::SerializationError(_) | TrackerError::CsvError(_) => {
                "Try the default text output format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_tag_is_recoverable() {
        let err = TrackerError::UnsupportedWorkoutTag {
            tag: "XYZ".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.user_friendly_message(), UNSUPPORTED_WORKOUT_MESSAGE);
        assert_eq!(err.to_string(), "Unsupported workout tag: XYZ");
    }

    #[test]
    fn test_config_errors_are_fatal() {
        let err = TrackerError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!err.is_recoverable());

        let io = TrackerError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert!(!io.is_recoverable());
        assert!(io.to_string().contains("missing"));
    }
}
