use crate::domain::entity::EntityId;
use crate::domain::phone::CanonicalPhoneNumber;
use crate::error::CoreError;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    entity_id: EntityId,
    raw_phone: Option<String>,
}

impl RawRecord {
    pub fn new(entity_id: &str, raw_phone: Option<String>) -> Result<Self, CoreError> {
        Ok(Self::from_parts(EntityId::new(entity_id)?, raw_phone))
    }

    pub fn from_parts(entity_id: EntityId, raw_phone: Option<String>) -> Self {
        Self {
            entity_id,
            raw_phone,
        }
    }

    pub fn entity_id(&self) -> &EntityId {
        &self.entity_id
    }

    pub fn raw_phone(&self) -> Option<&str> {
        self.raw_phone.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProcessedRecord {
    pub entity_id: EntityId,
    pub phone: CanonicalPhoneNumber,
}

impl ProcessedRecord {
    pub fn formatted(&self) -> &str {
        self.phone.formatted()
    }
}

impl Ord for ProcessedRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entity_id
            .cmp(&other.entity_id)
            .then_with(|| self.formatted().cmp(other.formatted()))
    }
}

impl PartialOrd for ProcessedRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
