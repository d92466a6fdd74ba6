//! Weekly hours view
//!
//! Assembles seven day rows (Sunday first) plus the season header for the
//! list and details pages.

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use shared::{Branch, BranchHours, DayKey, DisplayPeriod, Season};

use crate::evaluator::{DayStatus, evaluate_day};
use crate::season::resolve_season;

/// One branch's weekly hours, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct WeekView {
    pub season: Season,
    /// "שעון קיץ" / "שעון חורף".
    pub season_label: &'static str,
    pub season_icon: &'static str,
    /// Exactly seven entries, `sun` through `sat`.
    pub days: Vec<DayStatus>,
}

impl WeekView {
    /// Today's row.
    pub fn today(&self) -> Option<&DayStatus> {
        self.days.iter().find(|d| d.is_today)
    }
}

/// Build the weekly view. `None` means the branch has no usable schedule
/// for the resolved season; the caller suppresses the hours section
/// entirely — no fabricated defaults.
pub fn format_week(
    hours: &BranchHours,
    setting: DisplayPeriod,
    now: NaiveDateTime,
) -> Option<WeekView> {
    let season = resolve_season(setting, now);
    let week = hours.season(season)?;
    let today = DayKey::from_weekday(now.weekday());

    let days = DayKey::ALL
        .iter()
        .map(|&day| evaluate_day(week, day, now, today))
        .collect();

    Some(WeekView {
        season,
        season_label: season.label(),
        season_icon: season.icon(),
        days,
    })
}

/// Same, straight off the storage row.
pub fn format_branch_week(
    branch: &Branch,
    setting: DisplayPeriod,
    now: NaiveDateTime,
) -> Option<WeekView> {
    format_week(&branch.hours()?, setting, now)
}
