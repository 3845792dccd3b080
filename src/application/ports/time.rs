// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the current time, injected so account timestamps are testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
