use crate::contact::ContactId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Contact not found: {0}")]
    ContactNotFound(ContactId),

    #[error("Contact already exists: {0}")]
    DuplicateContact(ContactId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
