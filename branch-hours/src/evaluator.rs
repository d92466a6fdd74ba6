//! Per-day schedule evaluation
//!
//! One evaluator serves every call site. Saturday has its own three-state
//! policy, a closing time past midnight rolls into the next day, and
//! anything malformed degrades to closed instead of failing the render.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use shared::locale;
use shared::{DayKey, DaySchedule, TimeOfDay, WeeklySchedule};

/// Threshold for the "closing soon" banner, in minutes.
pub const CLOSING_SOON_MINUTES: i64 = 60;

/// Time remaining until closing, split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeLeft {
    pub hours: i64,
    pub minutes: i64,
    pub total_minutes: i64,
}

impl TimeLeft {
    fn from_total(total_minutes: i64) -> Self {
        TimeLeft {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
            total_minutes,
        }
    }

    /// Whether the "closing soon" banner applies: under an hour left, but
    /// not already at zero.
    pub fn is_closing_soon(&self) -> bool {
        self.total_minutes > 0 && self.total_minutes <= CLOSING_SOON_MINUTES
    }
}

/// Evaluated state of one weekday at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct DayStatus {
    pub day: DayKey,
    /// Hebrew weekday name.
    pub label: &'static str,
    /// Hours string (`"08:00 - 22:00"`), the closed marker, or the
    /// after-Sabbath sentence.
    pub display: String,
    pub is_today: bool,
    /// Only meaningful when `is_today`.
    pub is_open: bool,
    /// Present only while open today with a computable closing time.
    pub time_left: Option<TimeLeft>,
}

impl DayStatus {
    fn closed(day: DayKey, is_today: bool) -> Self {
        DayStatus {
            day,
            label: locale::day_name(day),
            display: locale::CLOSED.to_string(),
            is_today,
            is_open: false,
            time_left: None,
        }
    }
}

/// Evaluate one day entry against `now`. `today` is the weekday `now`
/// falls on; entries for other days report `is_open = false` without
/// looking at the clock.
pub fn evaluate_day(
    week: &WeeklySchedule,
    day: DayKey,
    now: NaiveDateTime,
    today: DayKey,
) -> DayStatus {
    let is_today = day == today;
    let Some(entry) = week.get(&day) else {
        return DayStatus::closed(day, is_today);
    };

    if day == DayKey::Sat {
        match entry.open_saturday {
            Some(false) => return DayStatus::closed(day, is_today),
            Some(true) => {
                if entry.has_window() {
                    return evaluate_window(entry, day, now, is_today);
                }
                // Open Saturday night without explicit times: nothing to
                // count down to.
                return DayStatus {
                    day,
                    label: locale::day_name(day),
                    display: locale::AFTER_SHABBAT.to_string(),
                    is_today,
                    is_open: is_today,
                    time_left: None,
                };
            }
            // Rows predating the flag use the regular-day rules.
            None => {}
        }
    }

    if entry.has_window() {
        evaluate_window(entry, day, now, is_today)
    } else {
        if is_malformed(&entry.open) || is_malformed(&entry.close) {
            tracing::warn!(day = %day, "unusable open/close values, treating day as closed");
        }
        DayStatus::closed(day, is_today)
    }
}

/// Non-empty but not `HH:MM`. Half-filled entries (one empty endpoint) are
/// an ordinary way to mark a day closed and are not reported.
fn is_malformed(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.parse::<TimeOfDay>().is_err()
}

fn evaluate_window(
    entry: &DaySchedule,
    day: DayKey,
    now: NaiveDateTime,
    is_today: bool,
) -> DayStatus {
    let (Some(open), Some(close)) = (entry.open_time(), entry.close_time()) else {
        return DayStatus::closed(day, is_today);
    };

    let mut is_open = false;
    let mut time_left = None;

    if is_today {
        let open_at = now.date().and_time(open.to_naive());
        let mut close_at = now.date().and_time(close.to_naive());
        // A close before the open means the window runs past midnight.
        if close_at < open_at {
            close_at += Duration::days(1);
        }

        is_open = open_at <= now && now < close_at;
        if is_open {
            time_left = Some(TimeLeft::from_total((close_at - now).num_minutes()));
        }
    }

    DayStatus {
        day,
        label: locale::day_name(day),
        display: format!("{open} - {close}"),
        is_today,
        is_open,
        time_left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn day(open: &str, close: &str) -> DaySchedule {
        DaySchedule {
            open: open.to_string(),
            close: close.to_string(),
            open_saturday: None,
        }
    }

    fn week_with(key: DayKey, entry: DaySchedule) -> WeeklySchedule {
        [(key, entry)].into_iter().collect()
    }

    // 2024-07-04 is a Thursday, 2024-07-06 a Saturday.

    #[test]
    fn test_missing_entry_is_closed() {
        let week = WeeklySchedule::new();
        let status = evaluate_day(&week, DayKey::Mon, at(2024, 7, 1, 12, 0), DayKey::Mon);
        assert_eq!(status.display, locale::CLOSED);
        assert!(status.is_today);
        assert!(!status.is_open);
        assert!(status.time_left.is_none());
    }

    #[test]
    fn test_regular_day_open() {
        let week = week_with(DayKey::Thu, day("08:00", "22:00"));
        let status = evaluate_day(&week, DayKey::Thu, at(2024, 7, 4, 12, 0), DayKey::Thu);
        assert_eq!(status.display, "08:00 - 22:00");
        assert!(status.is_open);
        let left = status.time_left.unwrap();
        assert_eq!(left.total_minutes, 600);
        assert_eq!(left.hours, 10);
        assert_eq!(left.minutes, 0);
        assert!(!left.is_closing_soon());
    }

    #[test]
    fn test_window_boundaries_half_open() {
        let week = week_with(DayKey::Thu, day("08:00", "22:00"));
        let opening = evaluate_day(&week, DayKey::Thu, at(2024, 7, 4, 8, 0), DayKey::Thu);
        assert!(opening.is_open, "open instant counts as open");
        let closing = evaluate_day(&week, DayKey::Thu, at(2024, 7, 4, 22, 0), DayKey::Thu);
        assert!(!closing.is_open, "close instant counts as closed");
    }

    #[test]
    fn test_closing_soon_threshold() {
        let week = week_with(DayKey::Thu, day("08:00", "22:00"));
        let status = evaluate_day(&week, DayKey::Thu, at(2024, 7, 4, 21, 15), DayKey::Thu);
        let left = status.time_left.unwrap();
        assert_eq!(left.total_minutes, 45);
        assert!(left.is_closing_soon());
    }

    #[test]
    fn test_overnight_window_late_evening() {
        let week = week_with(DayKey::Thu, day("22:00", "02:00"));
        let status = evaluate_day(&week, DayKey::Thu, at(2024, 7, 4, 23, 30), DayKey::Thu);
        assert!(status.is_open);
        let left = status.time_left.unwrap();
        assert_eq!(left.total_minutes, 150);
        assert_eq!(left.hours, 2);
        assert_eq!(left.minutes, 30);
    }

    #[test]
    fn test_overnight_window_before_opening() {
        let week = week_with(DayKey::Thu, day("22:00", "02:00"));
        let status = evaluate_day(&week, DayKey::Thu, at(2024, 7, 4, 12, 0), DayKey::Thu);
        assert!(!status.is_open);
        assert!(status.time_left.is_none());
    }

    #[test]
    fn test_other_day_never_open() {
        // Entries are evaluated against their own day only: Thursday's
        // overnight window does not leak into Friday morning.
        let week = week_with(DayKey::Thu, day("22:00", "02:00"));
        let status = evaluate_day(&week, DayKey::Thu, at(2024, 7, 5, 0, 30), DayKey::Fri);
        assert!(!status.is_today);
        assert!(!status.is_open);
        assert!(status.time_left.is_none());
        assert_eq!(status.display, "22:00 - 02:00");
    }

    #[test]
    fn test_empty_times_closed() {
        let week = week_with(DayKey::Mon, day("", ""));
        let status = evaluate_day(&week, DayKey::Mon, at(2024, 7, 1, 12, 0), DayKey::Mon);
        assert_eq!(status.display, locale::CLOSED);
        assert!(!status.is_open);
    }

    #[test]
    fn test_half_filled_entry_closed() {
        let week = week_with(DayKey::Mon, day("08:00", ""));
        let status = evaluate_day(&week, DayKey::Mon, at(2024, 7, 1, 12, 0), DayKey::Mon);
        assert_eq!(status.display, locale::CLOSED);
        assert!(!status.is_open);
    }

    #[test]
    fn test_malformed_times_degrade_to_closed() {
        for (open, close) in [("25:00", "22:00"), ("8:00", "22:00"), ("abc", "def")] {
            let week = week_with(DayKey::Mon, day(open, close));
            let status = evaluate_day(&week, DayKey::Mon, at(2024, 7, 1, 12, 0), DayKey::Mon);
            assert_eq!(status.display, locale::CLOSED, "for {open:?}/{close:?}");
            assert!(!status.is_open);
        }
    }

    #[test]
    fn test_saturday_flag_false_is_closed() {
        let mut entry = day("20:00", "23:00");
        entry.open_saturday = Some(false);
        let week = week_with(DayKey::Sat, entry);
        let status = evaluate_day(&week, DayKey::Sat, at(2024, 7, 6, 21, 0), DayKey::Sat);
        assert_eq!(status.display, locale::CLOSED);
        assert!(!status.is_open, "times are ignored when the flag says closed");
    }

    #[test]
    fn test_saturday_with_times_is_a_regular_window() {
        let mut entry = day("20:00", "23:00");
        entry.open_saturday = Some(true);
        let week = week_with(DayKey::Sat, entry);
        let status = evaluate_day(&week, DayKey::Sat, at(2024, 7, 6, 21, 0), DayKey::Sat);
        assert!(status.is_open);
        assert_eq!(status.time_left.unwrap().total_minutes, 120);
    }

    #[test]
    fn test_saturday_open_without_times() {
        let mut entry = day("", "");
        entry.open_saturday = Some(true);
        let week = week_with(DayKey::Sat, entry);

        let today = evaluate_day(&week, DayKey::Sat, at(2024, 7, 6, 21, 0), DayKey::Sat);
        assert_eq!(today.display, locale::AFTER_SHABBAT);
        assert!(today.is_open, "assumed open when it is Saturday");
        assert!(today.time_left.is_none(), "no computable closing time");

        let midweek = evaluate_day(&week, DayKey::Sat, at(2024, 7, 1, 12, 0), DayKey::Mon);
        assert_eq!(midweek.display, locale::AFTER_SHABBAT);
        assert!(!midweek.is_open);
    }

    #[test]
    fn test_saturday_one_time_missing_reads_after_shabbat() {
        let mut entry = day("20:00", "");
        entry.open_saturday = Some(true);
        let week = week_with(DayKey::Sat, entry);
        let status = evaluate_day(&week, DayKey::Sat, at(2024, 7, 6, 21, 0), DayKey::Sat);
        assert_eq!(status.display, locale::AFTER_SHABBAT);
    }

    #[test]
    fn test_saturday_without_flag_uses_regular_rules() {
        let week = week_with(DayKey::Sat, day("10:00", "14:00"));
        let status = evaluate_day(&week, DayKey::Sat, at(2024, 7, 6, 11, 0), DayKey::Sat);
        assert!(status.is_open);

        let week = week_with(DayKey::Sat, day("", ""));
        let status = evaluate_day(&week, DayKey::Sat, at(2024, 7, 6, 11, 0), DayKey::Sat);
        assert_eq!(status.display, locale::CLOSED);
    }

    #[test]
    fn test_evaluation_is_pure() {
        let week = week_with(DayKey::Thu, day("08:00", "22:00"));
        let now = at(2024, 7, 4, 12, 0);
        let a = evaluate_day(&week, DayKey::Thu, now, DayKey::Thu);
        let b = evaluate_day(&week, DayKey::Thu, now, DayKey::Thu);
        assert_eq!(a.display, b.display);
        assert_eq!(a.is_open, b.is_open);
        assert_eq!(a.time_left, b.time_left);
    }
}
