//! Reporting layer: canonical CSV export and aggregate views.
//!
//! Everything here is a read-only consumer of
//! [`ecr_model::CanonicalDataset`]; the cleaning decisions all live upstream
//! in `ecr-normalize` and `ecr-core`.

pub mod aggregates;
pub mod export;

pub use aggregates::{
    QualitySummary, admission_trend, age_distribution, average_length_of_stay_hours,
    gender_distribution, quality_summary,
};
pub use export::{EXPORT_COLUMNS, write_canonical_csv, write_canonical_csv_to_path};
