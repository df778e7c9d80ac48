use crate::domain::formulas;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::validate_divisor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One raw sensor package: a workout tag and its positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub tag: String,
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(tag: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            tag: tag.into(),
            data,
        }
    }
}

/// 解析命令列格式 `TAG:v1,v2,...`
impl FromStr for WorkoutPackage {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        let (tag, values) = s.split_once(':').ok_or_else(|| TrackerError::InvalidValue {
            field: "package".to_string(),
            value: s.to_string(),
            reason: "Expected TAG:v1,v2,...".to_string(),
        })?;

        let data = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                v.parse::<f64>().map_err(|e| TrackerError::InvalidValue {
                    field: "package".to_string(),
                    value: v.to_string(),
                    reason: format!("Not a number: {}", e),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Self::new(tag.trim(), data))
    }
}

/// Activity-specific part of a workout record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutKind {
    Running,
    Walking { height_cm: f64 },
    Swimming {
        pool_length_m: f64,
        pool_lengths_count: f64,
    },
}

impl WorkoutKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking { .. } => "SportsWalking",
            WorkoutKind::Swimming { .. } => "Swimming",
        }
    }
}

/// A validated workout. `duration_hours > 0` always holds, and so does
/// `height_cm > 0` for walking.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
    kind: WorkoutKind,
}

impl WorkoutRecord {
    pub fn running(action_count: u64, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Self::new(action_count, duration_hours, weight_kg, WorkoutKind::Running)
    }

    pub fn walking(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        let height_cm = validate_divisor("height_cm", height_cm)?;
        Self::new(
            action_count,
            duration_hours,
            weight_kg,
            WorkoutKind::Walking { height_cm },
        )
    }

    pub fn swimming(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths_count: f64,
    ) -> Result<Self> {
        Self::new(
            action_count,
            duration_hours,
            weight_kg,
            WorkoutKind::Swimming {
                pool_length_m,
                pool_lengths_count,
            },
        )
    }

    fn new(action_count: u64, duration_hours: f64, weight_kg: f64, kind: WorkoutKind) -> Result<Self> {
        let duration_hours = validate_divisor("duration_hours", duration_hours)?;
        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            kind,
        })
    }

    pub fn action_count(&self) -> u64 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.display_name()
    }

    pub fn distance_km(&self) -> f64 {
        let action_length = match self.kind {
            WorkoutKind::Swimming { .. } => formulas::STROKE_LENGTH_M,
            WorkoutKind::Running | WorkoutKind::Walking { .. } => formulas::STEP_LENGTH_M,
        };
        formulas::distance_km(self.action_count, action_length)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self.kind {
            WorkoutKind::Swimming {
                pool_length_m,
                pool_lengths_count,
            } => formulas::pool_mean_speed_kmh(pool_length_m, pool_lengths_count, self.duration_hours),
            WorkoutKind::Running | WorkoutKind::Walking { .. } => {
                formulas::mean_speed_kmh(self.distance_km(), self.duration_hours)
            }
        }
    }

    pub fn calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self.kind {
            WorkoutKind::Running => formulas::running_calories(speed, self.weight_kg, self.duration_hours),
            WorkoutKind::Walking { height_cm } => {
                formulas::walking_calories(speed, self.weight_kg, height_cm, self.duration_hours)
            }
            WorkoutKind::Swimming { .. } => formulas::swimming_calories(speed, self.weight_kg),
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            kind_name: self.kind_name().to_string(),
            duration_hours: self.duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.calories(),
        }
    }
}

/// Rendering of the per-workout summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(TrackerError::InvalidValue {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Allowed values: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// 訓練結果摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub kind_name: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl Summary {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.kind_name, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_summary() {
        let record = WorkoutRecord::running(15000, 1.0, 75.0).unwrap();
        assert_eq!(
            record.summary().message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn test_walking_summary() {
        let record = WorkoutRecord::walking(9000, 1.0, 75.0, 180.0).unwrap();
        assert_eq!(record.kind_name(), "SportsWalking");
        assert_eq!(
            record.summary().message(),
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
        );
    }

    #[test]
    fn test_swimming_summary() {
        let record = WorkoutRecord::swimming(720, 1.0, 80.0, 25.0, 40.0).unwrap();
        assert!((record.distance_km() - 0.9936).abs() < 1e-9);
        assert_eq!(
            record.summary().message(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_swimming_speed_ignores_stroke_count() {
        let few = WorkoutRecord::swimming(10, 2.0, 80.0, 50.0, 40.0).unwrap();
        let many = WorkoutRecord::swimming(5000, 2.0, 80.0, 50.0, 40.0).unwrap();
        assert_eq!(few.mean_speed_kmh(), many.mean_speed_kmh());
        assert!(few.distance_km() < many.distance_km());
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let err = WorkoutRecord::running(100, 0.0, 70.0).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidDivisor { ref field, .. } if field == "duration_hours"));
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let err = WorkoutRecord::walking(100, 1.0, 70.0, 0.0).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidDivisor { ref field, .. } if field == "height_cm"));
    }

    #[test]
    fn test_non_negative_distance_and_speed() {
        let records = [
            WorkoutRecord::running(0, 0.25, 60.0).unwrap(),
            WorkoutRecord::walking(123, 3.0, 0.0, 150.0).unwrap(),
            WorkoutRecord::swimming(0, 0.1, 50.0, 0.0, 0.0).unwrap(),
        ];
        for record in &records {
            assert!(record.distance_km() >= 0.0);
            assert!(record.mean_speed_kmh() >= 0.0);
        }
    }

    #[test]
    fn test_three_decimals_regardless_of_magnitude() {
        let summary = Summary {
            kind_name: "Running".to_string(),
            duration_hours: 12345.0,
            distance_km: 0.0004,
            mean_speed_kmh: 1e6,
            calories: 2.0 / 3.0,
        };
        assert_eq!(
            summary.message(),
            "Тип тренировки: Running; Длительность: 12345.000 ч.; Дистанция: 0.000 км; Ср. скорость: 1000000.000 км/ч; Потрачено ккал: 0.667."
        );
    }

    #[test]
    fn test_package_from_str() {
        let package: WorkoutPackage = "RUN:15000, 1, 75".parse().unwrap();
        assert_eq!(package, WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]));

        assert!("RUN".parse::<WorkoutPackage>().is_err());
        assert!("RUN:1,abc".parse::<WorkoutPackage>().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
