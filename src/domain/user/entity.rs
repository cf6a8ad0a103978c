// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, Username};

/// A registered platform user; eco news items reference one as their author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: Username,
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: Username, email: impl Into<String>) -> Self {
        Self {
            id,
            name,
            email: email.into(),
        }
    }
}
