pub mod eco_news;
pub mod errors;
pub mod language;
pub mod tag;
pub mod user;
