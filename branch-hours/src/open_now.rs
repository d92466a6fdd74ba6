//! Open-now filter predicate
//!
//! The list filter used to keep its own cheaper comparison: season from the
//! calendar month only, no overnight correction. Both shortcuts produced
//! visible mismatches against the displayed hours, so the filter now goes
//! through the same season resolution and day evaluator as the formatter.

use chrono::{Datelike, NaiveDateTime};

use shared::{Branch, BranchHours, DayKey, DisplayPeriod};

use crate::evaluator::evaluate_day;
use crate::season::resolve_season;

/// Whether the branch is open at `now`. Pure and cheap; absent seasons,
/// absent days and malformed payloads all read as closed.
pub fn is_open_now(hours: &BranchHours, setting: DisplayPeriod, now: NaiveDateTime) -> bool {
    let season = resolve_season(setting, now);
    let Some(week) = hours.season(season) else {
        return false;
    };
    let today = DayKey::from_weekday(now.weekday());
    evaluate_day(week, today, now, today).is_open
}

/// Filter entry point over the raw storage row.
pub fn branch_open_now(branch: &Branch, setting: DisplayPeriod, now: NaiveDateTime) -> bool {
    branch
        .hours()
        .is_some_and(|hours| is_open_now(&hours, setting, now))
}
