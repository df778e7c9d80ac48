use crate::domain::model::WorkoutRecord;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_finite, validate_whole_number};

/// Workout kinds known to the tracker, one per sensor tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutType {
    Swimming,
    Running,
    Walking,
}

/// 標籤對應表，查表一次即可決定建構方式
pub const DISPATCH_TABLE: [(&str, WorkoutType); 3] = [
    ("SWM", WorkoutType::Swimming),
    ("RUN", WorkoutType::Running),
    ("WLK", WorkoutType::Walking),
];

impl WorkoutType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        DISPATCH_TABLE
            .iter()
            .find(|(known, _)| *known == tag)
            .map(|(_, workout_type)| *workout_type)
    }

    /// Positional field names, in the order the readings arrive.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutType::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lengths_count",
            ],
            WorkoutType::Running => &["action_count", "duration_hours", "weight_kg"],
            WorkoutType::Walking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
        }
    }

    pub fn arity(&self) -> usize {
        self.field_names().len()
    }

    fn build(&self, tag: &str, data: &[f64]) -> Result<WorkoutRecord> {
        if data.len() != self.arity() {
            return Err(TrackerError::ArgumentCount {
                tag: tag.to_string(),
                expected: self.arity(),
                actual: data.len(),
            });
        }

        let fields = self.field_names();
        let action_count = validate_whole_number(fields[0], data[0])?;
        let values = fields
            .iter()
            .zip(data)
            .skip(1)
            .map(|(field, value)| validate_finite(field, *value))
            .collect::<Result<Vec<f64>>>()?;

        match self {
            WorkoutType::Swimming => {
                WorkoutRecord::swimming(action_count, values[0], values[1], values[2], values[3])
            }
            WorkoutType::Running => WorkoutRecord::running(action_count, values[0], values[1]),
            WorkoutType::Walking => {
                WorkoutRecord::walking(action_count, values[0], values[1], values[2])
            }
        }
    }
}

/// Build the workout record for a sensor package.
///
/// Readings are bound positionally in the order given by
/// [`WorkoutType::field_names`]. An unknown tag yields
/// [`TrackerError::UnsupportedWorkoutTag`].
pub fn read_package(tag: &str, data: &[f64]) -> Result<WorkoutRecord> {
    let workout_type = WorkoutType::from_tag(tag).ok_or_else(|| TrackerError::UnsupportedWorkoutTag {
        tag: tag.to_string(),
    })?;

    tracing::debug!("Dispatching {} as {:?} with {} values", tag, workout_type, data.len());
    workout_type.build(tag, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::WorkoutKind;

    #[test]
    fn test_dispatch_known_tags() {
        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            *swim.kind(),
            WorkoutKind::Swimming {
                pool_length_m: 25.0,
                pool_lengths_count: 40.0
            }
        );
        assert_eq!(swim.action_count(), 720);
        assert_eq!(swim.weight_kg(), 80.0);

        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(*run.kind(), WorkoutKind::Running);
        assert_eq!(run.duration_hours(), 1.0);

        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(*walk.kind(), WorkoutKind::Walking { height_cm: 180.0 });
    }

    #[test]
    fn test_unknown_tag() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(err, TrackerError::UnsupportedWorkoutTag { ref tag } if tag == "XYZ"));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!(WorkoutType::from_tag("run").is_none());
        assert_eq!(WorkoutType::from_tag("RUN"), Some(WorkoutType::Running));
    }

    #[test]
    fn test_wrong_argument_count() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        match err {
            TrackerError::ArgumentCount {
                tag,
                expected,
                actual,
            } => {
                assert_eq!(tag, "WLK");
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_fractional_action_count() {
        let err = read_package("RUN", &[100.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidValue { .. }));
    }

    #[test]
    fn test_zero_divisors() {
        assert!(matches!(
            read_package("RUN", &[100.0, 0.0, 75.0]).unwrap_err(),
            TrackerError::InvalidDivisor { .. }
        ));
        assert!(matches!(
            read_package("WLK", &[100.0, 1.0, 75.0, 0.0]).unwrap_err(),
            TrackerError::InvalidDivisor { .. }
        ));
    }

    #[test]
    fn test_arity_matches_table() {
        let arities: Vec<usize> = DISPATCH_TABLE.iter().map(|(_, t)| t.arity()).collect();
        assert_eq!(arities, vec![5, 3, 4]);
    }
}
