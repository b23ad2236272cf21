use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("entity id is required")]
    EmptyEntityId,
    #[error("not a valid israeli phone number: {0}")]
    InvalidPhoneNumber(String),
}
