pub mod entity;

pub use entity::{EcoNews, EcoNewsDraft, EcoNewsId, EcoNewsTranslation, TranslationDraft};
