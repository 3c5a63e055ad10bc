//! Canonical dataset CSV export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use ecr_model::{CanonicalDataset, CleanRecord};

/// Output column order, one column per canonical field plus the phone
/// quality flag.
pub const EXPORT_COLUMNS: [&str; 12] = [
    "patient_id",
    "full_name",
    "gender",
    "date_of_birth",
    "phone",
    "phone_is_invalid",
    "admission_time",
    "discharge_time",
    "vital_type",
    "vital_value",
    "lab_test",
    "lab_result",
];

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Write the canonical dataset as CSV, one row per patient in id order.
pub fn write_canonical_csv<W: Write>(dataset: &CanonicalDataset, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_COLUMNS)?;
    for record in dataset.records() {
        csv_writer.write_record(export_row(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the canonical dataset to a CSV file.
pub fn write_canonical_csv_to_path(dataset: &CanonicalDataset, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_canonical_csv(dataset, file)?;
    info!(path = %path.display(), patients = dataset.len(), "wrote canonical dataset");
    Ok(())
}

fn export_row(record: &CleanRecord) -> [String; 12] {
    [
        record.patient_id.clone(),
        record.full_name.clone(),
        record.gender.clone(),
        record
            .date_of_birth
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
        record.phone.number.clone().unwrap_or_default(),
        if record.phone.is_invalid { "true" } else { "false" }.to_string(),
        record
            .admission_time
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default(),
        record
            .discharge_time
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default(),
        record.vital_type.clone(),
        record.vital_value.clone().unwrap_or_default(),
        record.lab_test.clone(),
        record.lab_result.clone().unwrap_or_default(),
    ]
}
