//! Bulk CSV import: row mapping, per-row validation, accumulated results
//!
//! One bad row never aborts a batch. Every failure is recorded against its
//! 1-based data-row index; only a failure to read the input at all marks
//! the whole result unsuccessful (row 0, field `file`). The processor
//! reports outcomes but never inserts anything into a collection; callers
//! decide what to do with the accepted drafts.

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

use crate::core::draft::VehicleDraft;
use crate::entities::pricing::PricingInfo;
use crate::entities::reach::ReachMetrics;

/// Which stage of import a row failed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportErrorField {
    Validation,
    Processing,
    File,
}

/// One recorded import failure
#[derive(Debug, Clone, Serialize)]
pub struct ImportError {
    /// 1-based data-row index; 0 for file-level failures
    pub row: usize,

    /// Failure stage
    pub field: ImportErrorField,

    /// Human-readable message
    pub error: String,

    /// The offending data (mapped draft, raw row, or I/O message)
    pub value: Value,
}

/// Accumulated outcome of a bulk import
#[derive(Debug, Clone, Serialize)]
pub struct BulkImportResult {
    /// False only when the input could not be read at all
    pub success: bool,
    pub total_processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub errors: Vec<ImportError>,
}

impl BulkImportResult {
    fn empty() -> Self {
        Self {
            success: true,
            total_processed: 0,
            successful: 0,
            failed: 0,
            errors: Vec::new(),
        }
    }

    fn file_failure(message: String) -> Self {
        Self {
            success: false,
            total_processed: 0,
            successful: 0,
            failed: 0,
            errors: vec![ImportError {
                row: 0,
                field: ImportErrorField::File,
                error: "Failed to process file".to_string(),
                value: Value::String(message),
            }],
        }
    }
}

/// A row value that could not be mapped onto a vehicle field
#[derive(Debug, Error)]
pub enum RowMapError {
    #[error("invalid number '{value}' in column '{column}'")]
    InvalidNumber { column: &'static str, value: String },

    #[error("{0}")]
    UnknownMediaType(String),
}

/// Map one header/row pair onto a partial vehicle.
///
/// Headers are matched case-insensitively against the recognized set
/// (`name`, `type`, `description`, `baserate`, `averagereach`);
/// unrecognized headers and blank cells are skipped without error. A
/// recognized rate or reach cell builds the full default pricing/reach
/// shell around the parsed value.
pub fn map_csv_row(headers: &StringRecord, row: &StringRecord) -> Result<VehicleDraft, RowMapError> {
    let mut draft = VehicleDraft::default();

    for (index, header) in headers.iter().enumerate() {
        let Some(value) = row.get(index).map(str::trim).filter(|v| !v.is_empty()) else {
            continue;
        };

        match header.trim().to_lowercase().as_str() {
            "name" => draft.name = Some(value.to_string()),
            "type" => {
                draft.media_type = Some(value.parse().map_err(RowMapError::UnknownMediaType)?)
            }
            "description" => draft.description = Some(value.to_string()),
            "baserate" => {
                let base_rate = value.parse().map_err(|_| RowMapError::InvalidNumber {
                    column: "baserate",
                    value: value.to_string(),
                })?;
                draft.pricing.get_or_insert_with(PricingInfo::default).base_rate = base_rate;
            }
            "averagereach" => {
                let average_reach = value.parse().map_err(|_| RowMapError::InvalidNumber {
                    column: "averagereach",
                    value: value.to_string(),
                })?;
                draft.reach.get_or_insert_with(ReachMetrics::default).average_reach =
                    average_reach;
            }
            _ => {} // unrecognized headers are skipped
        }
    }

    Ok(draft)
}

/// Outcome of a full import pass: the report plus the drafts that passed
/// validation, in row order
#[derive(Debug)]
pub struct CsvImport {
    pub result: BulkImportResult,
    pub accepted: Vec<VehicleDraft>,
}

impl CsvImport {
    /// Import from a file path. A file that cannot be opened produces a
    /// file-level failure result with no row processing.
    pub fn from_path(path: &Path) -> Self {
        match File::open(path) {
            Ok(file) => Self::from_reader(BufReader::new(file)),
            Err(e) => Self {
                result: BulkImportResult::file_failure(e.to_string()),
                accepted: Vec::new(),
            },
        }
    }

    /// Import from any reader. The first record is the header row; every
    /// following record is mapped, then validated.
    pub fn from_reader<R: Read>(reader: R) -> Self {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = match csv_reader.headers() {
            Ok(headers) => headers.clone(),
            Err(e) => {
                return Self {
                    result: BulkImportResult::file_failure(e.to_string()),
                    accepted: Vec::new(),
                }
            }
        };

        let mut result = BulkImportResult::empty();
        let mut accepted = Vec::new();

        for (row_index, record) in csv_reader.records().enumerate() {
            let row = row_index + 1;
            result.total_processed += 1;

            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    result.failed += 1;
                    result.errors.push(ImportError {
                        row,
                        field: ImportErrorField::Processing,
                        error: e.to_string(),
                        value: Value::Null,
                    });
                    continue;
                }
            };

            let draft = match map_csv_row(&headers, &record) {
                Ok(draft) => draft,
                Err(e) => {
                    result.failed += 1;
                    result.errors.push(ImportError {
                        row,
                        field: ImportErrorField::Processing,
                        error: e.to_string(),
                        value: raw_row(&record),
                    });
                    continue;
                }
            };

            let validation_errors = draft.validate();
            if !validation_errors.is_empty() {
                result.failed += 1;
                result.errors.push(ImportError {
                    row,
                    field: ImportErrorField::Validation,
                    error: validation_errors.join(", "),
                    value: serde_json::to_value(&draft).unwrap_or(Value::Null),
                });
                continue;
            }

            result.successful += 1;
            accepted.push(draft);
        }

        Self { result, accepted }
    }
}

/// Run a bulk import and return only the report.
///
/// Accepted rows are counted but not kept; use [`CsvImport`] when the
/// caller intends to insert them.
pub fn process_csv_import(path: &Path) -> BulkImportResult {
    CsvImport::from_path(path).result
}

fn raw_row(record: &StringRecord) -> Value {
    Value::Array(
        record
            .iter()
            .map(|cell| Value::String(cell.to_string()))
            .collect(),
    )
}
