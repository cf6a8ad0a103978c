// tests/support/mocks/mod.rs
pub mod repos;
pub mod time;

pub use repos::{FailingUserRepo, RecordingLanguageRepo, RecordingTagRepo, RecordingUserRepo};
pub use time::{DummyClock, fixed_now};
