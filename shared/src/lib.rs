//! Shared domain types for the branch directory
//!
//! Storage-facing records (branches, schedules, settings, messages), the
//! write-path sanitizer and the Hebrew display strings. Used by the public
//! directory, the back office and the `branch-hours` evaluation engine.

pub mod error;
pub mod locale;
pub mod models;

// Re-exports
pub use error::ScheduleError;
pub use models::branch::Branch;
pub use models::message::{GlobalMessage, in_display_window};
pub use models::schedule::{BranchHours, DayKey, DaySchedule, Season, TimeOfDay, WeeklySchedule};
pub use models::settings::{AppSetting, DISPLAY_PERIOD_KEY, DisplayPeriod};
pub use serde::{Deserialize, Serialize};
