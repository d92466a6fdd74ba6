//! Global display-period setting
//!
//! A single settings row (`setting_key = "display_period"`) controls which
//! season the public pages show. It is read once per render pass and passed
//! by value into the evaluation functions; nothing here re-fetches
//! mid-pass, so one view never mixes seasons.

use serde::{Deserialize, Serialize};

/// Storage key of the display-period row.
pub const DISPLAY_PERIOD_KEY: &str = "display_period";

/// One row of the global settings table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSetting {
    pub setting_key: String,
    pub setting_value: String,
}

/// Which season the public pages display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayPeriod {
    /// Follow the calendar: April through September is summer clock.
    #[default]
    Auto,
    Summer,
    Winter,
}

impl DisplayPeriod {
    /// Decode the stored setting value. A missing row and an unrecognized
    /// value both fall back to `Auto`.
    pub fn from_setting_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("summer") => DisplayPeriod::Summer,
            Some("winter") => DisplayPeriod::Winter,
            Some("auto") | None => DisplayPeriod::Auto,
            Some(other) => {
                tracing::warn!("unknown display_period value {other:?}, using auto");
                DisplayPeriod::Auto
            }
        }
    }

    /// Pick the display-period row out of a settings result set.
    pub fn from_settings(settings: &[AppSetting]) -> Self {
        let value = settings
            .iter()
            .find(|s| s.setting_key == DISPLAY_PERIOD_KEY)
            .map(|s| s.setting_value.as_str());
        Self::from_setting_value(value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayPeriod::Auto => "auto",
            DisplayPeriod::Summer => "summer",
            DisplayPeriod::Winter => "winter",
        }
    }
}
