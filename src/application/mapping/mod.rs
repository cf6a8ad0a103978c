// src/application/mapping/mod.rs
mod add_eco_news;

pub use add_eco_news::AddEcoNewsRequestMapper;
