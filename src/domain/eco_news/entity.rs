// src/domain/eco_news/entity.rs
use crate::domain::{language::Language, tag::Tag, user::User};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EcoNewsId(pub i64);

impl From<EcoNewsId> for i64 {
    fn from(value: EcoNewsId) -> Self {
        value.0
    }
}

/// An eco news item together with its localized copies.
///
/// Items are handed out as `Arc<EcoNews>` so that every translation can
/// point back at the exact allocation that owns it.
#[derive(Debug)]
pub struct EcoNews {
    pub id: Option<EcoNewsId>,
    pub creation_date: DateTime<Utc>,
    pub author: User,
    pub image_path: Option<String>,
    pub tags: Vec<Tag>,
    pub translations: Vec<EcoNewsTranslation>,
}

#[derive(Debug, Clone)]
pub struct EcoNewsTranslation {
    /// `None` until the translation is stored.
    pub id: Option<i64>,
    pub language: Language,
    pub title: String,
    pub text: String,
    eco_news: Weak<EcoNews>,
}

impl EcoNewsTranslation {
    /// The news item this translation belongs to, while it is alive.
    pub fn eco_news(&self) -> Option<Arc<EcoNews>> {
        self.eco_news.upgrade()
    }

    pub fn belongs_to(&self, eco_news: &Arc<EcoNews>) -> bool {
        Weak::ptr_eq(&self.eco_news, &Arc::downgrade(eco_news))
    }
}

#[derive(Debug, Clone)]
pub struct TranslationDraft {
    pub language: Language,
    pub title: String,
    pub text: String,
}

/// Fully resolved parts of a news item that has not been assembled yet.
#[derive(Debug, Clone)]
pub struct EcoNewsDraft {
    pub creation_date: DateTime<Utc>,
    pub author: User,
    pub image_path: Option<String>,
    pub tags: Vec<Tag>,
    pub translations: Vec<TranslationDraft>,
}

impl EcoNewsDraft {
    pub fn into_entity(self) -> Arc<EcoNews> {
        let Self {
            creation_date,
            author,
            image_path,
            tags,
            translations,
        } = self;

        Arc::new_cyclic(|parent| EcoNews {
            id: None,
            creation_date,
            author,
            image_path,
            tags,
            translations: translations
                .into_iter()
                .map(|draft| EcoNewsTranslation {
                    id: None,
                    language: draft.language,
                    title: draft.title,
                    text: draft.text,
                    eco_news: parent.clone(),
                })
                .collect(),
        })
    }
}
