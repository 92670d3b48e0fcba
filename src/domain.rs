use chrono::Utc;
use serde::Deserialize;

/// Unix timestamp passed to the status API as `from_date`.
///
/// Only moves forward: a value older than the current one is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(i64);

impl Cursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Moves the cursor to `timestamp` and reports whether it changed.
    pub fn advance(&mut self, timestamp: i64) -> bool {
        if timestamp > self.0 {
            self.0 = timestamp;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reviewer_comment: Option<String>,
}

/// One page of the homework status API.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusPage {
    pub homeworks: Vec<Homework>,
    #[serde(default)]
    pub current_date: Option<i64>,
}

impl StatusPage {
    pub fn latest(&self) -> Option<&Homework> {
        self.homeworks.first()
    }
}

/// What a notifier reports back after sending a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub channel: String,
    pub message_id: Option<i64>,
}
