pub mod entity;
pub mod merge;
pub mod phone;
pub mod record;

pub use entity::EntityId;
pub use merge::{merge_by_entity, MergedRecord};
pub use phone::{CanonicalPhoneNumber, Classification, PhoneClass};
pub use record::{ProcessedRecord, RawRecord};
