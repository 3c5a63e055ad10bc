//! Batch entry point: normalize every record, then deduplicate.

use tracing::info;

use ecr_model::{CanonicalDataset, RawRecord};
use ecr_normalize::PatternLibrary;

use crate::dedupe::deduplicate;
use crate::pipeline::NormalizationPipeline;

/// Run the full cleaning pass over a batch.
///
/// Normalization is record-independent; deduplication needs the whole batch
/// and runs as a single reduction once every record is normalized. This is
/// the one call external collaborators make.
pub fn normalize_and_deduplicate(
    batch: &[RawRecord],
    patterns: &PatternLibrary,
) -> CanonicalDataset {
    let pipeline = NormalizationPipeline::new(patterns);
    let cleaned: Vec<_> = batch.iter().map(|raw| pipeline.normalize(raw)).collect();
    let dataset = deduplicate(cleaned);
    info!(
        records = batch.len(),
        patients = dataset.len(),
        "normalized encounter batch"
    );
    dataset
}
