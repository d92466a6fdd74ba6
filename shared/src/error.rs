//! Error types for the schedule parse layer
//!
//! Only the strict parse path surfaces these. Read paths recover locally:
//! a branch with a broken record renders without an hours section, it never
//! fails the listing.

use thiserror::Error;

/// Errors from strict schedule parsing and validation
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Value does not match the 24-hour `HH:MM` shape
    #[error("invalid time of day: {0:?}")]
    InvalidTime(String),

    /// Key is not one of `sun` through `sat`
    #[error("unknown day key: {0:?}")]
    InvalidDayKey(String),

    /// The stored hours payload is not valid JSON
    #[error("hours payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// The payload parsed, but is not a JSON object
    #[error("hours payload is not a JSON object")]
    NotAnObject,

    /// The payload parsed, but contains neither season
    #[error("hours payload has neither summer nor winter schedule")]
    EmptySchedule,
}
