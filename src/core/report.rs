use crate::domain::model::Summary;
use crate::utils::error::Result;
use std::io::Write;

const CSV_HEADER: [&str; 5] = [
    "training_type",
    "duration_hours",
    "distance_km",
    "mean_speed_kmh",
    "calories",
];

pub fn write_text_line<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{}", line)?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, summaries: &[Summary]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, summaries)?;
    writeln!(out)?;
    Ok(())
}

/// CSV 數值與文字摘要一致，保留三位小數
pub fn write_csv<W: Write>(out: &mut W, summaries: &[Summary]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;

    for summary in summaries {
        writer.write_record([
            summary.kind_name.clone(),
            format!("{:.3}", summary.duration_hours),
            format!("{:.3}", summary.distance_km),
            format!("{:.3}", summary.mean_speed_kmh),
            format!("{:.3}", summary.calories),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
