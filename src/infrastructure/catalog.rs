// src/infrastructure/catalog.rs
//! JSON-seeded reference data (users, tags, languages) backing the
//! in-memory lookup repositories.
//!
//! ```json
//! {
//!   "users": [{ "id": 5, "name": "olena", "email": "olena@example.com" }],
//!   "tags": [{ "id": 1, "name": "plastic" }],
//!   "languages": [{ "id": 1, "code": "en" }]
//! }
//! ```
use crate::domain::errors::DomainError;
use crate::domain::language::{Language, LanguageId};
use crate::domain::tag::{Tag, TagId};
use crate::domain::user::{User, UserId, Username};
use crate::infrastructure::repositories::{
    InMemoryLanguageRepository, InMemoryTagRepository, InMemoryUserRepository,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid catalog record: {0}")]
    Invalid(#[from] DomainError),
    #[error("duplicate {kind} in catalog: {key}")]
    Duplicate { kind: &'static str, key: String },
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    id: i64,
    name: String,
    #[serde(default)]
    email: String,
}

impl TryFrom<UserRecord> for User {
    type Error = DomainError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        Ok(User::new(
            UserId::new(record.id)?,
            Username::new(record.name)?,
            record.email,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct TagRecord {
    id: i64,
    name: String,
}

impl TryFrom<TagRecord> for Tag {
    type Error = DomainError;

    fn try_from(record: TagRecord) -> Result<Self, Self::Error> {
        Ok(Tag::new(TagId::new(record.id)?, record.name))
    }
}

#[derive(Debug, Deserialize)]
struct LanguageRecord {
    id: i64,
    code: String,
}

impl TryFrom<LanguageRecord> for Language {
    type Error = DomainError;

    fn try_from(record: LanguageRecord) -> Result<Self, Self::Error> {
        Ok(Language::new(LanguageId::new(record.id)?, record.code))
    }
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    tags: Vec<TagRecord>,
    #[serde(default)]
    languages: Vec<LanguageRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    users: Vec<User>,
    tags: Vec<Tag>,
    languages: Vec<Language>,
}

impl ReferenceCatalog {
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            users = catalog.users.len(),
            tags = catalog.tags.len(),
            languages = catalog.languages.len(),
            "reference catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;

        let users = file
            .users
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let tags = file
            .tags
            .into_iter()
            .map(Tag::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let languages = file
            .languages
            .into_iter()
            .map(Language::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        ensure_unique("user id", users.iter().map(|u| i64::from(u.id).to_string()))?;
        ensure_unique("tag name", tags.iter().map(|t| t.name.clone()))?;
        ensure_unique("language code", languages.iter().map(|l| l.code.clone()))?;

        Ok(Self {
            users,
            tags,
            languages,
        })
    }

    pub fn into_repositories(
        self,
    ) -> (
        InMemoryUserRepository,
        InMemoryTagRepository,
        InMemoryLanguageRepository,
    ) {
        (
            InMemoryUserRepository::new(self.users),
            InMemoryTagRepository::new(self.tags),
            InMemoryLanguageRepository::new(self.languages),
        )
    }
}

fn ensure_unique(
    kind: &'static str,
    keys: impl Iterator<Item = String>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key.clone()) {
            return Err(CatalogError::Duplicate { kind, key });
        }
    }
    Ok(())
}
