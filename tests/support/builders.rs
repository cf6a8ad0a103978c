// tests/support/builders.rs
use eco_news_core::application::dto::{
    AddEcoNewsDtoRequest, AuthorRefDto, LanguageRefDto, TagRefDto, TranslationRequestDto,
};
use eco_news_core::infrastructure::catalog::ReferenceCatalog;
use eco_news_core::infrastructure::repositories::{
    InMemoryLanguageRepository, InMemoryTagRepository, InMemoryUserRepository,
};

pub const CATALOG_JSON: &str = r#"{
    "users": [
        { "id": 5, "name": "olena", "email": "olena@example.com" },
        { "id": 6, "name": "taras", "email": "taras@example.com" }
    ],
    "tags": [
        { "id": 1, "name": "plastic" },
        { "id": 2, "name": "recycle" },
        { "id": 3, "name": "energy" }
    ],
    "languages": [
        { "id": 1, "code": "en" },
        { "id": 2, "code": "ua" }
    ]
}"#;

pub fn catalog_repositories() -> (
    InMemoryUserRepository,
    InMemoryTagRepository,
    InMemoryLanguageRepository,
) {
    ReferenceCatalog::from_json_str(CATALOG_JSON)
        .expect("test catalog must parse")
        .into_repositories()
}

pub fn translation(code: &str, title: &str, text: &str) -> TranslationRequestDto {
    TranslationRequestDto {
        language: LanguageRefDto { code: code.into() },
        title: title.into(),
        text: text.into(),
    }
}

pub fn request(
    author_id: i64,
    tags: &[&str],
    translations: Vec<TranslationRequestDto>,
) -> AddEcoNewsDtoRequest {
    AddEcoNewsDtoRequest {
        author: AuthorRefDto { id: author_id },
        image_path: Some("/images/eco-news/plastic.png".into()),
        tags: tags
            .iter()
            .map(|name| TagRefDto {
                name: (*name).to_string(),
            })
            .collect(),
        translations,
    }
}

/// Author 5, tags `plastic` + `recycle`, one English translation.
pub fn sample_request() -> AddEcoNewsDtoRequest {
    request(5, &["plastic", "recycle"], vec![translation("en", "T", "Body")])
}
