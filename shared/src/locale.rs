//! Hebrew display strings
//!
//! Each page used to carry its own copy of these; the domain layer owns
//! them now so the list, the details page and the back office all render
//! the same words.

use crate::models::schedule::DayKey;

/// Closed marker shown for a day without hours.
pub const CLOSED: &str = "סגור";

/// Open status pill.
pub const OPEN: &str = "פתוח";

/// Saturday-night opening statement. There is no computable closing time to
/// go with it; the app does not calculate when Sabbath ends.
pub const AFTER_SHABBAT: &str = "פתוח כחצי שעה אחר צאת השבת";

pub const SUMMER_CLOCK: &str = "שעון קיץ";
pub const WINTER_CLOCK: &str = "שעון חורף";
pub const SUMMER_ICON: &str = "☀️";
pub const WINTER_ICON: &str = "❄️";

/// Hebrew weekday name.
pub fn day_name(day: DayKey) -> &'static str {
    match day {
        DayKey::Sun => "ראשון",
        DayKey::Mon => "שני",
        DayKey::Tue => "שלישי",
        DayKey::Wed => "רביעי",
        DayKey::Thu => "חמישי",
        DayKey::Fri => "שישי",
        DayKey::Sat => "שבת",
    }
}
