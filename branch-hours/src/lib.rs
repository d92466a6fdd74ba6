//! Operating-hours evaluation for the branch directory
//!
//! Single home for season resolution, per-day open/closed evaluation,
//! weekly formatting and the open-now filter. The public list, the branch
//! details page and the back office preview all call into here; none of
//! them does its own date arithmetic.
//!
//! Everything is a pure function of `(schedule, setting, now)`. Callers
//! re-invoke per render rather than caching; wall-clock staleness is
//! bounded by how often they re-render.

pub mod evaluator;
pub mod formatter;
pub mod open_now;
pub mod season;

// Re-exports
pub use evaluator::{CLOSING_SOON_MINUTES, DayStatus, TimeLeft, evaluate_day};
pub use formatter::{WeekView, format_branch_week, format_week};
pub use open_now::{branch_open_now, is_open_now};
pub use season::resolve_season;
