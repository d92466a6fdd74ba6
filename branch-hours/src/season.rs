//! Season (display-period) resolution

use chrono::{Datelike, NaiveDateTime};

use shared::{DisplayPeriod, Season};

/// Calendar months counted as summer clock, inclusive. April through
/// September — the local daylight-saving convention, fixed policy rather
/// than actual DST transition dates.
const SUMMER_FROM_MONTH: u32 = 4;
const SUMMER_TO_MONTH: u32 = 9;

/// Which season applies at `now` under the given setting. Total: a forced
/// setting wins unconditionally, `Auto` follows the calendar month.
pub fn resolve_season(setting: DisplayPeriod, now: NaiveDateTime) -> Season {
    match setting {
        DisplayPeriod::Summer => Season::Summer,
        DisplayPeriod::Winter => Season::Winter,
        DisplayPeriod::Auto => {
            if (SUMMER_FROM_MONTH..=SUMMER_TO_MONTH).contains(&now.month()) {
                Season::Summer
            } else {
                Season::Winter
            }
        }
    }
}
