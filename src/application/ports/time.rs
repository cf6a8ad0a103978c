// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for timestamps stamped onto new entities.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
