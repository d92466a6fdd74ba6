//! Site-wide messages
//!
//! Banner rows shown on the public list. A message is visible when its
//! `is_active` flag is set and `now` falls inside the optional date window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Date-window rule shared by global messages and per-branch messages:
/// before `start` or after `end` the message is hidden; an open-ended side
/// always passes.
pub fn in_display_window(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    if start.is_some_and(|s| now < s) {
        return false;
    }
    if end.is_some_and(|e| now > e) {
        return false;
    }
    true
}

/// Global message row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalMessage {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl GlobalMessage {
    /// Active flag plus date window.
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.is_active && in_display_window(self.start_date, self.end_date, now)
    }
}
