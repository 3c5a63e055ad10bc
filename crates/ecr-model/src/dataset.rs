//! The deduplicated, canonical record set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::CleanRecord;

/// The final output of a batch run: at most one [`CleanRecord`] per patient,
/// keyed by canonical `patient_id`.
///
/// Constructed once by deduplication and never mutated afterwards; the
/// reporting layer only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalDataset {
    records: BTreeMap<String, CleanRecord>,
}

impl CanonicalDataset {
    /// Wrap an already-deduplicated map. The map key must equal each record's
    /// `patient_id`; deduplication upholds this when it builds the map.
    pub fn from_map(records: BTreeMap<String, CleanRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, patient_id: &str) -> Option<&CleanRecord> {
        self.records.get(patient_id)
    }

    pub fn contains_patient(&self, patient_id: &str) -> bool {
        self.records.contains_key(patient_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in `patient_id` order.
    pub fn records(&self) -> impl Iterator<Item = &CleanRecord> {
        self.records.values()
    }

    /// `(patient_id, record)` pairs in `patient_id` order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CleanRecord)> {
        self.records.iter()
    }
}

impl IntoIterator for CanonicalDataset {
    type Item = (String, CleanRecord);
    type IntoIter = std::collections::btree_map::IntoIter<String, CleanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PhoneNumber;

    fn clean(patient_id: &str) -> CleanRecord {
        CleanRecord {
            patient_id: patient_id.to_string(),
            full_name: "Unknown".to_string(),
            gender: "Unknown".to_string(),
            date_of_birth: None,
            phone: PhoneNumber::missing(),
            admission_time: None,
            discharge_time: None,
            vital_type: "Unknown".to_string(),
            vital_value: None,
            lab_test: "Unknown".to_string(),
            lab_result: None,
        }
    }

    #[test]
    fn records_iterate_in_patient_order() {
        let mut map = BTreeMap::new();
        map.insert("P-0202".to_string(), clean("P-0202"));
        map.insert("P-0001".to_string(), clean("P-0001"));
        let dataset = CanonicalDataset::from_map(map);

        let ids: Vec<&str> = dataset
            .records()
            .map(|record| record.patient_id.as_str())
            .collect();
        assert_eq!(ids, ["P-0001", "P-0202"]);
        assert_eq!(dataset.len(), 2);
        assert!(dataset.contains_patient("P-0202"));
        assert!(dataset.get("P-9999").is_none());
    }
}
