use crate::domain::{CanonicalPhoneNumber, EntityId, ProcessedRecord};
use std::collections::BTreeSet;

/// Collects canonical numbers across rows, unique per `(entity, formatted)`.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: BTreeSet<ProcessedRecord>,
    duplicates: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the pair was not seen before. Rejections are ignored.
    pub fn push(&mut self, entity_id: &EntityId, phone: Option<CanonicalPhoneNumber>) -> bool {
        let Some(phone) = phone else {
            return false;
        };
        let inserted = self.records.insert(ProcessedRecord {
            entity_id: entity_id.clone(),
            phone,
        });
        if !inserted {
            self.duplicates += 1;
        }
        inserted
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn finish(self) -> Vec<ProcessedRecord> {
        self.records.into_iter().collect()
    }
}

pub fn aggregate<I>(results: I) -> Vec<ProcessedRecord>
where
    I: IntoIterator<Item = (EntityId, Option<CanonicalPhoneNumber>)>,
{
    let mut aggregator = Aggregator::new();
    for (entity_id, phone) in results {
        aggregator.push(&entity_id, phone);
    }
    aggregator.finish()
}
