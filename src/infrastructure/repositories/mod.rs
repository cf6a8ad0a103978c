mod in_memory;

pub use in_memory::{InMemoryLanguageRepository, InMemoryTagRepository, InMemoryUserRepository};
