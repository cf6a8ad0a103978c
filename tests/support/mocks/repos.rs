// tests/support/mocks/repos.rs
use std::sync::Mutex;

use async_trait::async_trait;
use eco_news_core::domain::errors::{DomainError, DomainResult};
use eco_news_core::domain::language::{Language, LanguageRepository};
use eco_news_core::domain::tag::{Tag, TagRepository};
use eco_news_core::domain::user::{User, UserId, UserRepository};

/* -------------------------------- UserRepository -------------------------------- */

/// Delegates to an inner repository and remembers every id it was asked for.
pub struct RecordingUserRepo<R> {
    inner: R,
    calls: Mutex<Vec<i64>>,
}

impl<R> RecordingUserRepo<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<R: UserRepository> UserRepository for RecordingUserRepo<R> {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.calls.lock().unwrap().push(id.into());
        self.inner.find_by_id(id).await
    }
}

/// Simulates a data store that is unavailable.
pub struct FailingUserRepo;

#[async_trait]
impl UserRepository for FailingUserRepo {
    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/* -------------------------------- TagRepository -------------------------------- */

pub struct RecordingTagRepo<R> {
    inner: R,
    calls: Mutex<Vec<String>>,
}

impl<R> RecordingTagRepo<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<R: TagRepository> TagRepository for RecordingTagRepo<R> {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Tag>> {
        self.calls.lock().unwrap().push(name.to_string());
        self.inner.find_by_name(name).await
    }
}

/* -------------------------------- LanguageRepository -------------------------------- */

pub struct RecordingLanguageRepo<R> {
    inner: R,
    calls: Mutex<Vec<String>>,
}

impl<R> RecordingLanguageRepo<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<R: LanguageRepository> LanguageRepository for RecordingLanguageRepo<R> {
    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Language>> {
        self.calls.lock().unwrap().push(code.to_string());
        self.inner.find_by_code(code).await
    }
}
