//! Branch operating-hours records
//!
//! The `hours` column holds a two-season document:
//!
//! ```json
//! {
//!   "summer": { "sun": { "open": "08:00", "close": "20:00" }, ... },
//!   "winter": { "sat": { "open": "", "close": "", "openSaturday": false }, ... }
//! }
//! ```
//!
//! Older import paths stored the same document serialized as a string;
//! [`BranchHours::from_raw`] accepts both. A missing day key means closed
//! that day. Saturday carries an extra `openSaturday` flag with its own
//! three-state policy, evaluated in the `branch-hours` crate.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ScheduleError;

/// Weekday key as stored in schedule documents. Sunday first — the retail
/// week starts on Sunday and every "today" index in the UI relies on that
/// ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl DayKey {
    /// All seven keys in calendar order, Sunday first.
    pub const ALL: [DayKey; 7] = [
        DayKey::Sun,
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
        DayKey::Sat,
    ];

    /// Sunday = 0 through Saturday = 6.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayKey::Sun => "sun",
            DayKey::Mon => "mon",
            DayKey::Tue => "tue",
            DayKey::Wed => "wed",
            DayKey::Thu => "thu",
            DayKey::Fri => "fri",
            DayKey::Sat => "sat",
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayKey {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sun" => Ok(DayKey::Sun),
            "mon" => Ok(DayKey::Mon),
            "tue" => Ok(DayKey::Tue),
            "wed" => Ok(DayKey::Wed),
            "thu" => Ok(DayKey::Thu),
            "fri" => Ok(DayKey::Fri),
            "sat" => Ok(DayKey::Sat),
            other => Err(ScheduleError::InvalidDayKey(other.to_string())),
        }
    }
}

/// The two seasonal schedule variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    /// Hebrew clock name shown above the weekly hours.
    pub fn label(self) -> &'static str {
        match self {
            Season::Summer => crate::locale::SUMMER_CLOCK,
            Season::Winter => crate::locale::WINTER_CLOCK,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Season::Summer => crate::locale::SUMMER_ICON,
            Season::Winter => crate::locale::WINTER_ICON,
        }
    }
}

/// Wall-clock time as stored in schedule records: strict 24-hour `HH:MM`.
///
/// The back office only ever persists this exact shape; anything else is
/// replaced by the empty string at write time and reads back as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(TimeOfDay { hour, minute })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(ScheduleError::InvalidTime(s.to_string()));
        }
        let pair = |hi: u8, lo: u8| -> Option<u8> {
            (hi.is_ascii_digit() && lo.is_ascii_digit()).then(|| (hi - b'0') * 10 + (lo - b'0'))
        };
        match (pair(bytes[0], bytes[1]), pair(bytes[3], bytes[4])) {
            (Some(hour), Some(minute)) if hour <= 23 && minute <= 59 => {
                Ok(TimeOfDay { hour, minute })
            }
            _ => Err(ScheduleError::InvalidTime(s.to_string())),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One day's entry in a weekly schedule.
///
/// Empty `open`/`close` means closed. `open_saturday` is only meaningful on
/// the `sat` key; the write path strips it everywhere else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Opening time (`HH:MM`) or empty. Legacy imports used `start`.
    #[serde(default, alias = "start")]
    pub open: String,
    /// Closing time (`HH:MM`) or empty. Legacy imports used `end`.
    #[serde(default, alias = "end")]
    pub close: String,
    /// Saturday flag: `Some(false)` closed, `Some(true)` open (with times,
    /// or after Sabbath ends without them), `None` falls back to the
    /// regular-day rules.
    #[serde(
        default,
        rename = "openSaturday",
        skip_serializing_if = "Option::is_none"
    )]
    pub open_saturday: Option<bool>,
}

impl DaySchedule {
    /// Parsed opening time; whitespace-trimmed, malformed values read as
    /// unset.
    pub fn open_time(&self) -> Option<TimeOfDay> {
        self.open.trim().parse().ok()
    }

    /// Parsed closing time; same rules as [`DaySchedule::open_time`].
    pub fn close_time(&self) -> Option<TimeOfDay> {
        self.close.trim().parse().ok()
    }

    /// True when both endpoints are present and well-formed.
    pub fn has_window(&self) -> bool {
        self.open_time().is_some() && self.close_time().is_some()
    }
}

/// One season's schedule: day key to entry, iterating Sunday first.
pub type WeeklySchedule = BTreeMap<DayKey, DaySchedule>;

/// Complete hours configuration for one branch: a schedule per season.
///
/// `None` means the season was never configured, which suppresses the hours
/// section for that season rather than showing seven closed rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BranchHours {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summer: Option<WeeklySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winter: Option<WeeklySchedule>,
}

impl BranchHours {
    /// Strict parse of the stored `hours` payload. The column may hold the
    /// document itself or, from older imports, the document serialized as a
    /// JSON string.
    pub fn parse_value(value: &Value) -> Result<Self, ScheduleError> {
        let doc: Value = match value {
            Value::String(raw) => serde_json::from_str(raw)?,
            other => other.clone(),
        };
        let obj = doc.as_object().ok_or(ScheduleError::NotAnObject)?;

        let hours = BranchHours {
            summer: obj.get("summer").and_then(parse_week),
            winter: obj.get("winter").and_then(parse_week),
        };
        if hours.summer.is_none() && hours.winter.is_none() {
            return Err(ScheduleError::EmptySchedule);
        }
        Ok(hours)
    }

    /// Lenient read path: a branch with a broken hours payload renders
    /// without an hours section instead of failing the whole listing.
    pub fn from_raw(value: &Value) -> Option<Self> {
        match Self::parse_value(value) {
            Ok(hours) => Some(hours),
            Err(err) => {
                tracing::warn!("ignoring unusable hours payload: {err}");
                None
            }
        }
    }

    /// Schedule for the given season, if that season was ever configured.
    pub fn season(&self, season: Season) -> Option<&WeeklySchedule> {
        match season {
            Season::Summer => self.summer.as_ref(),
            Season::Winter => self.winter.as_ref(),
        }
    }

    /// Write-path sanitizer. The result is always complete: both seasons
    /// present, all seven days per season, times that fail the `HH:MM`
    /// check replaced with the empty string (never coerced, never an
    /// error), and `open_saturday` kept only on Saturday.
    pub fn sanitized(&self) -> BranchHours {
        BranchHours {
            summer: Some(sanitize_week(self.summer.as_ref())),
            winter: Some(sanitize_week(self.winter.as_ref())),
        }
    }
}

/// Tolerant per-season parse: non-object season values count as absent,
/// unknown day keys and malformed entries are skipped.
fn parse_week(value: &Value) -> Option<WeeklySchedule> {
    let obj = value.as_object()?;
    let mut week = WeeklySchedule::new();
    for (key, entry) in obj {
        let Ok(day) = key.parse::<DayKey>() else {
            continue;
        };
        match serde_json::from_value::<DaySchedule>(entry.clone()) {
            Ok(schedule) => {
                week.insert(day, schedule);
            }
            Err(err) => {
                tracing::warn!(day = %day, "skipping malformed day entry: {err}");
            }
        }
    }
    Some(week)
}

fn sanitize_week(week: Option<&WeeklySchedule>) -> WeeklySchedule {
    DayKey::ALL
        .iter()
        .map(|&day| {
            let entry = week.and_then(|w| w.get(&day));
            let schedule = DaySchedule {
                open: sanitize_time(entry.map_or("", |e| e.open.as_str())),
                close: sanitize_time(entry.map_or("", |e| e.close.as_str())),
                open_saturday: (day == DayKey::Sat)
                    .then(|| entry.and_then(|e| e.open_saturday).unwrap_or(false)),
            };
            (day, schedule)
        })
        .collect()
}

fn sanitize_time(value: &str) -> String {
    let value = value.trim();
    match value.parse::<TimeOfDay>() {
        Ok(_) => value.to_string(),
        Err(_) => String::new(),
    }
}
