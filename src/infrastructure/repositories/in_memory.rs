// src/infrastructure/repositories/in_memory.rs
use crate::domain::errors::DomainResult;
use crate::domain::language::{Language, LanguageRepository};
use crate::domain::tag::{Tag, TagRepository};
use crate::domain::user::{User, UserId, UserRepository};
use async_trait::async_trait;
use std::collections::HashMap;

/// Read-only user lookup over a fixed set of records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: HashMap<UserId, User>,
}

impl InMemoryUserRepository {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|user| (user.id, user)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryTagRepository {
    tags: HashMap<String, Tag>,
}

impl InMemoryTagRepository {
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().map(|tag| (tag.name.clone(), tag)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Tag>> {
        Ok(self.tags.get(name).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryLanguageRepository {
    languages: HashMap<String, Language>,
}

impl InMemoryLanguageRepository {
    pub fn new(languages: impl IntoIterator<Item = Language>) -> Self {
        Self {
            languages: languages
                .into_iter()
                .map(|language| (language.code.clone(), language))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[async_trait]
impl LanguageRepository for InMemoryLanguageRepository {
    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Language>> {
        Ok(self.languages.get(code).cloned())
    }
}
