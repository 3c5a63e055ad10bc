//! CSV ingestion of raw encounter rows.
//!
//! Purely mechanical: columns are matched to the known field names
//! case-insensitively, blank cells and absent columns become `None`, and
//! cell contents are passed through untouched. All interpretation belongs to
//! the normalization core.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use thiserror::Error;
use tracing::debug;

use ecr_model::RawRecord;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Read raw encounter rows from a CSV file.
pub fn read_raw_records_from_path(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path)?;
    let records = read_raw_records(file)?;
    debug!(path = %path.display(), records = records.len(), "ingested raw encounter rows");
    Ok(records)
}

/// Read raw encounter rows from any CSV source.
///
/// The header row is required; column order is irrelevant and unknown
/// columns are ignored.
pub fn read_raw_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let columns = ColumnMap::from_headers(csv_reader.headers()?);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        records.push(columns.extract(&row?));
    }
    Ok(records)
}

/// Header positions of the known raw fields within one CSV source.
struct ColumnMap {
    patient_id: Option<usize>,
    full_name: Option<usize>,
    gender: Option<usize>,
    date_of_birth: Option<usize>,
    phone: Option<usize>,
    admission_time: Option<usize>,
    discharge_time: Option<usize>,
    vital_type: Option<usize>,
    vital_value: Option<usize>,
    lab_test: Option<usize>,
    lab_result: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let index_of = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(name))
        };
        Self {
            patient_id: index_of("patient_id"),
            full_name: index_of("full_name"),
            gender: index_of("gender"),
            date_of_birth: index_of("date_of_birth"),
            phone: index_of("phone"),
            admission_time: index_of("admission_time"),
            discharge_time: index_of("discharge_time"),
            vital_type: index_of("vital_type"),
            vital_value: index_of("vital_value"),
            lab_test: index_of("lab_test"),
            lab_result: index_of("lab_result"),
        }
    }

    fn extract(&self, row: &StringRecord) -> RawRecord {
        RawRecord {
            patient_id: cell(row, self.patient_id),
            full_name: cell(row, self.full_name),
            gender: cell(row, self.gender),
            date_of_birth: cell(row, self.date_of_birth),
            phone: cell(row, self.phone),
            admission_time: cell(row, self.admission_time),
            discharge_time: cell(row, self.discharge_time),
            vital_type: cell(row, self.vital_type),
            vital_value: cell(row, self.vital_value),
            lab_test: cell(row, self.lab_test),
            lab_result: cell(row, self.lab_result),
        }
    }
}

/// A cell is absent when its column is missing, the row is short, or the
/// value is blank. Non-blank values are kept verbatim.
fn cell(row: &StringRecord, index: Option<usize>) -> Option<String> {
    let value = row.get(index?)?;
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
