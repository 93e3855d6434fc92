//! Dictionary CSV loading.

use std::fs::File;
use std::path::Path;

use tracing::{info, warn};

use telemap_match::ShorthandDictionary;

use crate::error::{IngestError, Result};

/// Loads a shorthand dictionary from a two-column CSV file.
///
/// The first record is a header and is skipped; of every following record
/// only the first two fields are used (shorthand, longhand), matching the
/// dictionary file convention. Rows that are short or blank are dropped
/// individually with a warning — a handful of bad rows must not abort the
/// load. A missing or unreadable file is fatal.
pub fn load_dictionary(path: &Path) -> Result<ShorthandDictionary> {
    let file = open_input(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut rows: Vec<(String, String)> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // +2: 1-based, and the header row was consumed.
        let row_number = index + 2;
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let shorthand = record.get(0).unwrap_or_default();
        let longhand = record.get(1).unwrap_or_default();
        if shorthand.trim().is_empty() || longhand.trim().is_empty() {
            warn!(row = row_number, path = %path.display(), "dropping malformed dictionary row");
        }
        rows.push((shorthand.to_string(), longhand.to_string()));
    }

    let dictionary = ShorthandDictionary::from_rows(rows);
    info!(
        path = %path.display(),
        entries = dictionary.len(),
        dropped = dictionary.dropped_rows(),
        "dictionary loaded"
    );
    Ok(dictionary)
}

pub(crate) fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
