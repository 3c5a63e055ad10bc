//! Encounter record data model.
//!
//! Three shapes move through the cleaning pipeline:
//!
//! - [`RawRecord`]: one ingested row, all fields opaque optional text
//! - [`CleanRecord`]: the same row after field-level normalization
//! - [`CanonicalDataset`]: the deduplicated record set, keyed by patient

pub mod dataset;
pub mod record;

pub use dataset::CanonicalDataset;
pub use record::{CleanRecord, PhoneNumber, RAW_FIELDS, RawRecord};
