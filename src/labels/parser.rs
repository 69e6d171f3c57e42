//! Label file parsing.
//!
//! Reads ground-truth annotations from a CSV file with the columns
//! `label,onset_ms,offset_ms`. Uses the `csv` crate for parsing.

use std::path::Path;

use serde::Deserialize;

use crate::Error;
use crate::constants::labels::{LABEL_COLUMN, OFFSET_COLUMN, ONSET_COLUMN};
use crate::labels::LabelRecord;

/// Internal record for CSV deserialization.
#[derive(Debug, Deserialize)]
struct LabelRow {
    label: String,
    onset_ms: f64,
    offset_ms: f64,
}

/// Parse a label file.
///
/// Handles a UTF-8 BOM if present and surrounding whitespace in fields.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The header lacks one of the required columns
/// - A row is missing a column or a value does not parse
/// - A label is not exactly one character
/// - A segment's onset is not before its offset
///
/// Returns an empty record if the file has no rows.
pub fn read_label_file(path: &Path) -> Result<LabelRecord, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::LabelParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers = reader.headers().map_err(|e| Error::LabelParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    for column in [LABEL_COLUMN, ONSET_COLUMN, OFFSET_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::InvalidLabelFormat {
                message: format!("missing required column '{column}'"),
            });
        }
    }

    let mut record = LabelRecord::default();

    for (line_num, result) in reader.deserialize::<LabelRow>().enumerate() {
        let row = result.map_err(|e| Error::InvalidLabelFormat {
            message: format!("line {}: {e}", line_num + 2),
        })?;

        let mut chars = row.label.chars();
        let label = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(Error::InvalidLabelFormat {
                    message: format!(
                        "line {}: label must be a single character, got '{}'",
                        line_num + 2,
                        row.label
                    ),
                });
            }
        };

        record.labels.push(label);
        record.onsets_ms.push(row.onset_ms);
        record.offsets_ms.push(row.offset_ms);
    }

    record.validate()?;
    Ok(record)
}
