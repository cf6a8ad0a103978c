use crate::domain::eco_news::{EcoNews, EcoNewsTranslation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload of an "add eco news" request. References are by key only;
/// the mapper resolves them against the stored records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEcoNewsDtoRequest {
    pub author: AuthorRefDto,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagRefDto>,
    #[serde(default)]
    pub translations: Vec<TranslationRequestDto>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AuthorRefDto {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRefDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageRefDto {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequestDto {
    pub language: LanguageRefDto,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoNewsAuthorDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoNewsTranslationDto {
    pub language_code: String,
    pub title: String,
    pub text: String,
}

impl From<&EcoNewsTranslation> for EcoNewsTranslationDto {
    fn from(translation: &EcoNewsTranslation) -> Self {
        Self {
            language_code: translation.language.code.clone(),
            title: translation.title.clone(),
            text: translation.text.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoNewsDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub image_path: Option<String>,
    pub author: EcoNewsAuthorDto,
    pub tags: Vec<String>,
    pub translations: Vec<EcoNewsTranslationDto>,
}

impl From<&EcoNews> for EcoNewsDto {
    fn from(news: &EcoNews) -> Self {
        Self {
            id: news.id.map(Into::into),
            creation_date: news.creation_date,
            image_path: news.image_path.clone(),
            author: EcoNewsAuthorDto {
                id: news.author.id.into(),
                name: news.author.name.to_string(),
            },
            tags: news.tags.iter().map(|tag| tag.name.clone()).collect(),
            translations: news.translations.iter().map(Into::into).collect(),
        }
    }
}
