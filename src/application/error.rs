// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("The user does not exist by this id: {id}")]
    ReferencedEntityNotFound { id: i64 },

    #[error("Tag not found by name: {name}")]
    TagNotFound { name: String },

    // The offending code is deliberately not part of the message.
    #[error("Given language code is not supported.")]
    InvalidLanguage,
}

impl ApplicationError {
    pub fn referenced_entity_not_found(id: i64) -> Self {
        Self::ReferencedEntityNotFound { id }
    }

    pub fn tag_not_found(name: impl Into<String>) -> Self {
        Self::TagNotFound { name: name.into() }
    }
}
