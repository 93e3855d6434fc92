#![deny(unsafe_code)]

//! CSV export of match tables.
//!
//! Writes candidate lists the way downstream spreadsheet tooling expects
//! them: one row per candidate, all fields quoted, in the order the caller
//! provides (callers sort before writing).

use std::path::Path;

use anyhow::Context;

use telemap_model::Candidate;

/// Default file name for the full match table.
pub const MATCHES_FILE: &str = "matched_channels.csv";
/// Default file name for the high-confidence subset.
pub const HIGH_CONFIDENCE_FILE: &str = "matched_channels_high_confidence.csv";

/// Serialized row shape; keeps the historical column labels.
#[derive(serde::Serialize)]
struct MatchRow<'a> {
    #[serde(rename = "Telemetry_Channel")]
    telemetry_channel: &'a str,
    #[serde(rename = "Sensor_Channel")]
    sensor_channel: &'a str,
    #[serde(rename = "Match_Kind")]
    match_kind: &'a str,
    #[serde(rename = "Confidence")]
    confidence: f64,
    #[serde(rename = "Evidence")]
    evidence: &'a str,
}

/// Writes a candidate table to a CSV file, all fields quoted.
pub fn write_matches(path: &Path, candidates: &[Candidate]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    if candidates.is_empty() {
        // serialize() only emits the header row alongside a first record, so
        // an empty table needs it written explicitly.
        writer
            .write_record([
                "Telemetry_Channel",
                "Sensor_Channel",
                "Match_Kind",
                "Confidence",
                "Evidence",
            ])
            .with_context(|| format!("writing {}", path.display()))?;
    }
    for candidate in candidates {
        writer
            .serialize(MatchRow {
                telemetry_channel: &candidate.telemetry_name,
                sensor_channel: &candidate.sensor_name,
                match_kind: candidate.kind.as_str(),
                confidence: candidate.confidence,
                evidence: &candidate.evidence,
            })
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
