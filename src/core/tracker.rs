use crate::core::dispatcher::read_package;
use crate::core::report;
use crate::domain::model::{OutputFormat, Summary, WorkoutPackage};
use crate::utils::error::Result;
use std::io::Write;

/// A package the tracker could not turn into a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPackage {
    pub index: usize,
    pub tag: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub summaries: Vec<Summary>,
    pub skipped: Vec<SkippedPackage>,
}

impl RunReport {
    pub fn processed(&self) -> usize {
        self.summaries.len() + self.skipped.len()
    }
}

pub struct Tracker {
    format: OutputFormat,
}

impl Tracker {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Dispatch every package in order and write its summary to `out`.
    ///
    /// Packages that fail to dispatch are skipped. In text mode the
    /// diagnostic line takes the skipped package's place in the output; the
    /// structured formats only log it.
    pub fn run<W: Write>(&self, packages: &[WorkoutPackage], out: &mut W) -> Result<RunReport> {
        tracing::info!("🏃 Processing {} workout packages", packages.len());

        let mut outcome = RunReport::default();

        for (index, package) in packages.iter().enumerate() {
            match Self::summarize(package) {
                Ok(summary) => {
                    if self.format == OutputFormat::Text {
                        report::write_text_line(out, &summary.message())?;
                    }
                    outcome.summaries.push(summary);
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("⚠️ Skipping package #{} ({}): {}", index, package.tag, e);
                    tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());

                    if self.format == OutputFormat::Text {
                        report::write_text_line(out, &e.user_friendly_message())?;
                    }
                    outcome.skipped.push(SkippedPackage {
                        index,
                        tag: package.tag.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        match self.format {
            OutputFormat::Text => {}
            OutputFormat::Json => report::write_json(out, &outcome.summaries)?,
            OutputFormat::Csv => report::write_csv(out, &outcome.summaries)?,
        }
        out.flush()?;

        tracing::info!(
            "✅ {} summaries written, {} packages skipped",
            outcome.summaries.len(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }

    /// 只做分派與驗證，不輸出任何摘要
    pub fn dry_run(&self, packages: &[WorkoutPackage]) -> RunReport {
        let mut outcome = RunReport::default();

        for (index, package) in packages.iter().enumerate() {
            match Self::summarize(package) {
                Ok(summary) => outcome.summaries.push(summary),
                Err(e) => {
                    tracing::warn!("⚠️ Package #{} ({}) would be skipped: {}", index, package.tag, e);
                    outcome.skipped.push(SkippedPackage {
                        index,
                        tag: package.tag.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        outcome
    }

    fn summarize(package: &WorkoutPackage) -> Result<Summary> {
        let record = read_package(&package.tag, &package.data)?;
        let summary = record.summary();
        tracing::debug!("{} -> {:?}", package.tag, summary);
        Ok(summary)
    }
}

/// Process `packages` with the default text output.
pub fn run<W: Write>(packages: &[WorkoutPackage], out: &mut W) -> Result<RunReport> {
    Tracker::new(OutputFormat::Text).run(packages, out)
}

/// Dispatch and summarize a single package.
pub fn summarize_package(package: &WorkoutPackage) -> Result<Summary> {
    Tracker::summarize(package)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::UNSUPPORTED_WORKOUT_MESSAGE;

    fn packages() -> Vec<WorkoutPackage> {
        vec![
            WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            WorkoutPackage::new("XYZ", vec![1.0, 2.0, 3.0]),
            WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        ]
    }

    #[test]
    fn test_text_run_interleaves_diagnostics() {
        let mut buffer = Vec::new();
        let report = run(&packages(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
        assert_eq!(lines[1], UNSUPPORTED_WORKOUT_MESSAGE);
        assert!(lines[2].starts_with("Тип тренировки: Running;"));

        assert_eq!(report.summaries.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 1);
        assert_eq!(report.skipped[0].tag, "XYZ");
        assert_eq!(report.processed(), 3);
    }

    #[test]
    fn test_json_run_omits_skipped() {
        let mut buffer = Vec::new();
        let report = Tracker::new(OutputFormat::Json)
            .run(&packages(), &mut buffer)
            .unwrap();

        let parsed: Vec<Summary> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, report.summaries);
        assert_eq!(parsed.len(), 2);
        assert!(!String::from_utf8(buffer).unwrap().contains(UNSUPPORTED_WORKOUT_MESSAGE));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let report = Tracker::new(OutputFormat::Text).dry_run(&packages());
        assert_eq!(report.summaries.len(), 2);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let mut buffer = Vec::new();
        let report = run(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(report, RunReport::default());
    }

    #[test]
    fn test_summarize_package() {
        let summary = summarize_package(&WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0])).unwrap();
        assert_eq!(summary.kind_name, "Running");
        assert!(summarize_package(&WorkoutPackage::new("SWM", vec![])).is_err());
    }
}
