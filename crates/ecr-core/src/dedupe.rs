//! Patient-level deduplication of normalized records.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::debug;

use ecr_model::{CanonicalDataset, CleanRecord};

/// Collapse a normalized batch to one record per patient.
///
/// Within a `patient_id` group the record with the earliest `admission_time`
/// wins; a record without a timestamp never beats one that has one, and exact
/// ties keep the first-seen record (stable with respect to input order).
pub fn deduplicate(records: Vec<CleanRecord>) -> CanonicalDataset {
    let total = records.len();
    let mut by_patient: BTreeMap<String, CleanRecord> = BTreeMap::new();
    for record in records {
        match by_patient.entry(record.patient_id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                if earlier_admission(&record, slot.get()) {
                    slot.insert(record);
                }
            }
        }
    }
    let collapsed = total - by_patient.len();
    if collapsed > 0 {
        debug!(collapsed, patients = by_patient.len(), "collapsed duplicate patient records");
    }
    CanonicalDataset::from_map(by_patient)
}

/// Whether `candidate` strictly outranks `current` for retention.
fn earlier_admission(candidate: &CleanRecord, current: &CleanRecord) -> bool {
    match (candidate.admission_time, current.admission_time) {
        (Some(new), Some(old)) => new < old,
        (Some(_), None) => true,
        _ => false,
    }
}
