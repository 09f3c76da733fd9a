//! Calendar configuration and the date provider built on it.
//!
//! A [`Calendar`] bundles a calendar system, a time zone, a locale and
//! optional week-convention overrides. All builder finalization goes through
//! the provider operations implemented on it:
//!
//! - [`Calendar::date_from_components`]
//! - [`Calendar::date_by_adding`]
//! - [`Calendar::components`]
//! - [`Calendar::date_interval`]
//! - [`Calendar::next_weekend`]

mod arithmetic;
mod components;
mod interval;
mod locale;
mod settings;

use chrono::Weekday;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub use components::{CalendarUnit, Component, DateComponents, GregorianWeekday, Ordinal};
pub use interval::DateInterval;
pub use locale::Locale;
pub use settings::CalendarSettings;

/// Calendar system used to interpret components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    /// Proleptic Gregorian with locale-driven week conventions
    #[default]
    Gregorian,
    /// Gregorian with ISO 8601 weeks (Monday first, four-day first week)
    Iso8601,
}

/// The configuration consulted whenever a builder is finalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    system: CalendarSystem,
    time_zone: Tz,
    locale: Locale,
    first_weekday: Option<Weekday>,
    minimum_days_in_first_week: Option<u8>,
    weekend: Option<Vec<Weekday>>,
}

impl Calendar {
    pub fn new(system: CalendarSystem, time_zone: Tz, locale: Locale) -> Self {
        Self {
            system,
            time_zone,
            locale,
            first_weekday: None,
            minimum_days_in_first_week: None,
            weekend: None,
        }
    }

    pub fn gregorian(time_zone: Tz, locale: impl Into<Locale>) -> Self {
        Self::new(CalendarSystem::Gregorian, time_zone, locale.into())
    }

    pub fn iso8601(time_zone: Tz) -> Self {
        Self::new(CalendarSystem::Iso8601, time_zone, Locale::default())
    }

    /// The platform default calendar.
    ///
    /// Time zone comes from `TZ` (UTC when unset or unknown), locale from
    /// `LC_ALL`, `LC_TIME` or `LANG` (en_US when none is usable).
    pub fn system() -> Self {
        let time_zone = std::env::var("TZ")
            .ok()
            .and_then(|name| name.trim_start_matches(':').parse::<Tz>().ok())
            .unwrap_or(Tz::UTC);
        let locale = ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .find_map(|key| {
                std::env::var(key)
                    .ok()
                    .and_then(|value| Locale::from_posix(&value))
            })
            .unwrap_or_default();
        Self::gregorian(time_zone, locale)
    }

    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_first_weekday(mut self, weekday: Weekday) -> Self {
        self.first_weekday = Some(weekday);
        self
    }

    /// Values are clamped to 1..=7.
    pub fn with_minimum_days_in_first_week(mut self, days: u8) -> Self {
        self.minimum_days_in_first_week = Some(days.clamp(1, 7));
        self
    }

    /// Replace the locale's weekend; an empty list means the calendar has none.
    pub fn with_weekend(mut self, days: Vec<Weekday>) -> Self {
        self.weekend = Some(days);
        self
    }

    pub fn system_kind(&self) -> CalendarSystem {
        self.system
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn first_weekday(&self) -> Weekday {
        match (self.first_weekday, self.system) {
            (Some(weekday), _) => weekday,
            (None, CalendarSystem::Iso8601) => Weekday::Mon,
            (None, CalendarSystem::Gregorian) => self.locale.first_weekday(),
        }
    }

    pub fn minimum_days_in_first_week(&self) -> u8 {
        match (self.minimum_days_in_first_week, self.system) {
            (Some(days), _) => days,
            (None, CalendarSystem::Iso8601) => 4,
            (None, CalendarSystem::Gregorian) => self.locale.minimum_days_in_first_week(),
        }
    }

    pub fn weekend_days(&self) -> Vec<Weekday> {
        self.weekend
            .clone()
            .unwrap_or_else(|| self.locale.weekend())
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_take_precedence_over_locale() {
        let calendar = Calendar::gregorian(Tz::UTC, "en_US");
        assert_eq!(calendar.first_weekday(), Weekday::Sun);
        let calendar = calendar.with_first_weekday(Weekday::Wed);
        assert_eq!(calendar.first_weekday(), Weekday::Wed);
    }

    #[test]
    fn iso_calendar_ignores_locale_week_data() {
        let calendar = Calendar::iso8601(Tz::UTC).with_locale("en_US");
        assert_eq!(calendar.first_weekday(), Weekday::Mon);
        assert_eq!(calendar.minimum_days_in_first_week(), 4);
    }

    #[test]
    fn minimum_days_are_clamped() {
        let calendar = Calendar::gregorian(Tz::UTC, "en_US").with_minimum_days_in_first_week(9);
        assert_eq!(calendar.minimum_days_in_first_week(), 7);
    }

    #[test]
    fn empty_weekend_override_is_kept() {
        let calendar = Calendar::gregorian(Tz::UTC, "en_US").with_weekend(Vec::new());
        assert!(calendar.weekend_days().is_empty());
    }

    #[test]
    fn calendars_compare_by_value() {
        let a = Calendar::gregorian(Tz::Europe__Moscow, "ru_RU");
        let b = Calendar::gregorian(Tz::Europe__Moscow, "ru_RU");
        assert_eq!(a, b);
        assert_ne!(a, b.with_time_zone(Tz::UTC));
    }
}
