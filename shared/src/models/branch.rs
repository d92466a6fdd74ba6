//! Branch record
//!
//! The subset of the storage row that the domain layer reads. Everything
//! else on the row (coordinates, phone, photos, ...) is presentation-only
//! and stays with the rendering collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::message::in_display_window;
use super::schedule::BranchHours;

/// Branch row as returned by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub format: Option<String>,
    /// Raw hours payload: the JSONB document, or a serialized string from
    /// older imports. Parse with [`Branch::hours`].
    #[serde(default)]
    pub hours: Option<Value>,
    #[serde(default)]
    pub branch_message: Option<String>,
    #[serde(default)]
    pub branch_message_start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub branch_message_end_date: Option<DateTime<Utc>>,
}

impl Branch {
    /// Defensive parse of the raw hours payload. `None` when the branch has
    /// no schedule or the payload is unusable.
    pub fn hours(&self) -> Option<BranchHours> {
        self.hours.as_ref().and_then(BranchHours::from_raw)
    }

    /// The branch message, when one is set and `now` falls inside its
    /// display window.
    pub fn active_message(&self, now: DateTime<Utc>) -> Option<&str> {
        let message = self.branch_message.as_deref()?.trim();
        if message.is_empty() {
            return None;
        }
        in_display_window(
            self.branch_message_start_date,
            self.branch_message_end_date,
            now,
        )
        .then_some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn branch(value: Value) -> Branch {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_row_with_minimal_fields() {
        let b = branch(json!({ "id": 12, "name": "סניף רעננה" }));
        assert!(b.hours().is_none());
        assert!(b.active_message("2025-06-01T12:00:00Z".parse().unwrap()).is_none());
    }

    #[test]
    fn test_hours_parses_string_and_object() {
        let doc = json!({ "summer": { "sun": { "open": "08:00", "close": "20:00" } } });

        let as_object = branch(json!({ "id": 1, "name": "a", "hours": doc }));
        assert!(as_object.hours().is_some());

        let as_blob = branch(json!({ "id": 2, "name": "b", "hours": doc.to_string() }));
        assert!(as_blob.hours().is_some());

        let broken = branch(json!({ "id": 3, "name": "c", "hours": "{oops" }));
        assert!(broken.hours().is_none());
    }

    #[test]
    fn test_active_message_window() {
        let b = branch(json!({
            "id": 4,
            "name": "d",
            "branch_message": "שיפוצים בסניף",
            "branch_message_start_date": "2025-06-01T00:00:00Z",
            "branch_message_end_date": "2025-06-10T00:00:00Z"
        }));
        assert_eq!(
            b.active_message("2025-06-05T12:00:00Z".parse().unwrap()),
            Some("שיפוצים בסניף")
        );
        assert!(b.active_message("2025-06-20T12:00:00Z".parse().unwrap()).is_none());
        assert!(b.active_message("2025-05-20T12:00:00Z".parse().unwrap()).is_none());
    }

    #[test]
    fn test_blank_message_is_not_active() {
        let b = branch(json!({ "id": 5, "name": "e", "branch_message": "   " }));
        assert!(b.active_message("2025-06-05T12:00:00Z".parse().unwrap()).is_none());
    }
}
