//! File-backed ingestion round trips.

use std::io::Write;

use ecr_ingest::read_raw_records_from_path;

#[test]
fn reads_a_full_encounter_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "patient_id,full_name,gender,date_of_birth,phone,admission_time,discharge_time,vital_type,vital_value,lab_test,lab_result"
    )
    .expect("header");
    writeln!(
        file,
        "17,jane doe,f,1990-05-01,0971234567,2021-01-01 08:00,2021-01-03 10:00,temp,36.8,wbc,5.4"
    )
    .expect("row");
    writeln!(file, "18,,,,,,,,,,").expect("row");

    let records = read_raw_records_from_path(file.path()).expect("ingest");
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].patient_id.as_deref(), Some("17"));
    assert_eq!(records[0].date_of_birth.as_deref(), Some("1990-05-01"));
    assert_eq!(records[0].lab_result.as_deref(), Some("5.4"));

    assert_eq!(records[1].patient_id.as_deref(), Some("18"));
    assert_eq!(records[1].full_name, None);
    assert_eq!(records[1].lab_result, None);
}

#[test]
fn missing_file_reports_an_io_error() {
    let error = read_raw_records_from_path(std::path::Path::new("does-not-exist.csv"))
        .expect_err("missing file");
    assert!(matches!(error, ecr_ingest::IngestError::Io(_)));
}
