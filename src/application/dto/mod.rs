pub mod eco_news;

pub use eco_news::{
    AddEcoNewsDtoRequest, AuthorRefDto, EcoNewsAuthorDto, EcoNewsDto, EcoNewsTranslationDto,
    LanguageRefDto, TagRefDto, TranslationRequestDto,
};
