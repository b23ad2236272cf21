use crate::domain::entity::EntityId;
use crate::domain::record::ProcessedRecord;
use serde::Serialize;

pub const PHONE_JOIN_SEPARATOR: &str = ", ";

/// All canonical numbers of one entity, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedRecord {
    pub entity_id: EntityId,
    pub phones: Vec<String>,
}

impl MergedRecord {
    pub fn joined(&self) -> String {
        self.phones.join(PHONE_JOIN_SEPARATOR)
    }
}

/// Expects records in aggregator order; consecutive records of the same entity are grouped.
pub fn merge_by_entity(records: &[ProcessedRecord]) -> Vec<MergedRecord> {
    let mut merged: Vec<MergedRecord> = Vec::new();
    for record in records {
        match merged.last_mut() {
            Some(last) if last.entity_id == record.entity_id => {
                if !last.phones.iter().any(|phone| phone == record.formatted()) {
                    last.phones.push(record.formatted().to_string());
                }
            }
            _ => merged.push(MergedRecord {
                entity_id: record.entity_id.clone(),
                phones: vec![record.formatted().to_string()],
            }),
        }
    }
    merged
}
