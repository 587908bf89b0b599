// Settings module
// User-facing configuration loaded from settings.toml

use serde::{Deserialize, Serialize};

use crate::models::grid::WeekAnchor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether the visible week starts today or at the start of the calendar week
    pub week_anchor: WeekAnchor,
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    /// "24h" or "12h"
    pub time_format: String,
    /// Reject cell addresses outside the visible week
    pub restrict_to_visible_week: bool,
    /// Populate the store with the sample event on startup
    pub seed_sample_events: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            week_anchor: WeekAnchor::Today,
            first_day_of_week: 1, // Monday
            time_format: "24h".to_string(),
            restrict_to_visible_week: true,
            seed_sample_events: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }

        if self.time_format != "24h" && self.time_format != "12h" {
            return Err(format!(
                "time_format must be \"24h\" or \"12h\", got \"{}\"",
                self.time_format
            ));
        }

        Ok(())
    }

    pub fn uses_12h_clock(&self) -> bool {
        self.time_format == "12h"
    }
}
