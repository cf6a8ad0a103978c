use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageId(pub i64);

impl LanguageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("language id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<LanguageId> for i64 {
    fn from(value: LanguageId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub id: LanguageId,
    /// Short code such as `en` or `ua`.
    pub code: String,
}

impl Language {
    pub fn new(id: LanguageId, code: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
        }
    }
}

#[async_trait]
pub trait LanguageRepository: Send + Sync {
    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Language>>;
}
