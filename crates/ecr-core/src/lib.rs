//! Encounter-record cleaning core.
//!
//! Control flow: raw batch → [`NormalizationPipeline`] (per record, per
//! field) → clean batch → [`deduplicate`] → [`ecr_model::CanonicalDataset`].
//! The whole core is total: bad input becomes fallback data, never an error.

pub mod dedupe;
pub mod pipeline;
pub mod runner;

pub use dedupe::deduplicate;
pub use pipeline::NormalizationPipeline;
pub use runner::normalize_and_deduplicate;
