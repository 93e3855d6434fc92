//! Header-row extraction from data exports.
//!
//! Neither export keeps its channel names in the first row: telemetry
//! loggers write a metadata preamble and bury the header around row 15,
//! while sensor/simulation exports start with it at row 1 but pad unused
//! columns with the literal `(null)`. Both quirks are handled here so the
//! matching core only ever sees clean name lists.

use std::path::Path;

use tracing::info;

use telemap_model::{HeaderSet, Source};

use crate::dictionary::open_input;
use crate::error::{IngestError, Result};

/// Placeholder cell written by sensor exports for unused columns.
const NULL_CELL: &str = "(null)";

/// Which 1-based row of a delimited file holds the channel names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRowSpec {
    /// 1-based row number of the header row.
    pub row: usize,
}

impl HeaderRowSpec {
    /// Telemetry logger exports: metadata preamble, headers at row 15.
    pub const TELEMETRY_DEFAULT: Self = Self { row: 15 };
    /// Sensor/simulation exports: headers in the first row.
    pub const SENSOR_DEFAULT: Self = Self { row: 1 };

    /// Creates a spec for the given 1-based row; row 0 is clamped to 1.
    #[must_use]
    pub fn new(row: usize) -> Self {
        Self { row: row.max(1) }
    }
}

/// Reads the channel names from one header row of a delimited file.
///
/// Cells are trimmed; empty cells and `(null)` placeholders are skipped.
/// A row beyond the end of the file is an error; a present-but-empty header
/// row is not (it yields an empty list, and matching degrades to zero
/// candidates downstream).
pub fn read_header_row(path: &Path, spec: HeaderRowSpec) -> Result<Vec<String>> {
    let file = open_input(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows_seen = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows_seen += 1;
        if rows_seen == spec.row {
            let names = record
                .iter()
                .map(str::trim)
                .filter(|cell| !cell.is_empty() && *cell != NULL_CELL)
                .map(ToString::to_string)
                .collect();
            return Ok(names);
        }
    }

    Err(IngestError::HeaderRowOutOfRange {
        path: path.to_path_buf(),
        row: spec.row,
        rows_available: rows_seen,
    })
}

/// Reads a header row and tags it with its source.
pub fn load_header_set(path: &Path, source: Source, spec: HeaderRowSpec) -> Result<HeaderSet> {
    let names = read_header_row(path, spec)?;
    info!(
        path = %path.display(),
        source = %source,
        row = spec.row,
        channels = names.len(),
        "header set loaded"
    );
    Ok(HeaderSet::new(source, names))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_first_row_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "sensor.csv", "Time,Vx,AVz\n0.0,1.0,2.0\n");
        let names = read_header_row(&path, HeaderRowSpec::SENSOR_DEFAULT).unwrap();
        assert_eq!(names, vec!["Time", "Vx", "AVz"]);
    }

    #[test]
    fn reads_buried_header_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut content = String::new();
        for i in 1..=4 {
            content.push_str(&format!("meta{i},value{i}\n"));
        }
        content.push_str("Time,GPS Altitude,Ground Speed\n");
        content.push_str("0.0,120.5,0.0\n");
        let path = write_file(&dir, "telemetry.csv", &content);

        let names = read_header_row(&path, HeaderRowSpec::new(5)).unwrap();
        assert_eq!(names, vec!["Time", "GPS Altitude", "Ground Speed"]);
    }

    #[test]
    fn skips_null_and_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "sensor.csv", "Time,(null),,Vx, (null) \n");
        let names = read_header_row(&path, HeaderRowSpec::SENSOR_DEFAULT).unwrap();
        assert_eq!(names, vec!["Time", "Vx"]);
    }

    #[test]
    fn out_of_range_row_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "short.csv", "a,b\nc,d\n");
        let err = read_header_row(&path, HeaderRowSpec::new(15)).unwrap_err();
        match err {
            IngestError::HeaderRowOutOfRange {
                row,
                rows_available,
                ..
            } => {
                assert_eq!(row, 15);
                assert_eq!(rows_available, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_header_set_tags_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "sensor.csv", "Time,Vx\n");
        let set = load_header_set(&path, Source::Sensor, HeaderRowSpec::SENSOR_DEFAULT).unwrap();
        assert_eq!(set.source, Source::Sensor);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn spec_clamps_row_zero() {
        assert_eq!(HeaderRowSpec::new(0).row, 1);
    }
}
