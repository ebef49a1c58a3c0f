use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One time-stamped value held by the ring buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub stamp: DateTime<Local>,
    pub value: String,
}

impl Record {
    /// Record stamped with the current local time.
    pub fn new(value: impl Into<String>) -> Self {
        Self { stamp: Local::now(), value: value.into() }
    }

    pub fn with_stamp(stamp: DateTime<Local>, value: impl Into<String>) -> Self {
        Self { stamp, value: value.into() }
    }
}
