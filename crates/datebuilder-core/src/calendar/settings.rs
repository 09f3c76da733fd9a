//! TOML-backed calendar settings.
//!
//! ```toml
//! system = "gregorian"
//! time_zone = "Europe/Moscow"
//! locale = "ru_RU"
//! first_weekday = "monday"
//! minimum_days_in_first_week = 4
//! weekend = ["saturday", "sunday"]
//! ```

use chrono::Weekday;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::{Calendar, CalendarSystem, GregorianWeekday, Locale};
use crate::error::ConfigError;

/// Serializable form of a [`Calendar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSettings {
    #[serde(default)]
    pub system: CalendarSystem,
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub first_weekday: Option<GregorianWeekday>,
    #[serde(default)]
    pub minimum_days_in_first_week: Option<u8>,
    /// Empty means no weekend; absent means the locale's weekend.
    #[serde(default)]
    pub weekend: Option<Vec<GregorianWeekday>>,
}

fn default_time_zone() -> String {
    "UTC".into()
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            system: CalendarSystem::default(),
            time_zone: default_time_zone(),
            locale: Locale::default(),
            first_weekday: None,
            minimum_days_in_first_week: None,
            weekend: None,
        }
    }
}

impl CalendarSettings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }
}

impl TryFrom<CalendarSettings> for Calendar {
    type Error = ConfigError;

    fn try_from(settings: CalendarSettings) -> Result<Self, Self::Error> {
        let time_zone: Tz = settings
            .time_zone
            .parse()
            .map_err(|_| ConfigError::UnknownTimeZone(settings.time_zone.clone()))?;

        let mut calendar = Calendar::new(settings.system, time_zone, settings.locale);
        if let Some(weekday) = settings.first_weekday {
            calendar = calendar.with_first_weekday(weekday.into());
        }
        if let Some(days) = settings.minimum_days_in_first_week {
            if !(1..=7).contains(&days) {
                return Err(ConfigError::InvalidValue {
                    key: "minimum_days_in_first_week".into(),
                    message: format!("{days} is outside 1..=7"),
                });
            }
            calendar = calendar.with_minimum_days_in_first_week(days);
        }
        if let Some(weekend) = settings.weekend {
            calendar = calendar.with_weekend(weekend.into_iter().map(Weekday::from).collect());
        }
        Ok(calendar)
    }
}

impl Calendar {
    /// Parse settings from TOML and build the calendar they describe.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        CalendarSettings::from_toml_str(content)?.try_into()
    }

    /// Settings reproducing this calendar, overrides included.
    pub fn to_settings(&self) -> CalendarSettings {
        CalendarSettings {
            system: self.system,
            time_zone: self.time_zone.name().to_string(),
            locale: self.locale.clone(),
            first_weekday: self.first_weekday.map(GregorianWeekday::from),
            minimum_days_in_first_week: self.minimum_days_in_first_week,
            weekend: self
                .weekend
                .as_ref()
                .map(|days| days.iter().copied().map(GregorianWeekday::from).collect()),
        }
    }
}
