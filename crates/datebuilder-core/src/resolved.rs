//! Terminal values produced by builders.

use crate::calendar::{CalendarUnit, Component, DateComponents};
use crate::context;
use crate::error::{DateBuilderError, Result};
use crate::instant::Instant;

/// Either an instant or calendar fields still to be resolved.
///
/// `Components` values are reconciled against the active calendar each time
/// they are turned into an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedDate {
    Exact(Instant),
    Components(DateComponents),
}

impl ResolvedDate {
    /// Calendar fields of this value.
    ///
    /// `Exact` values are decomposed into era, year, month, weekday, day,
    /// hour, minute and second under the active calendar. `Components` are
    /// returned as stored.
    pub fn date_components(&self) -> DateComponents {
        match self {
            ResolvedDate::Exact(instant) => {
                context::calendar().components(&Component::CANONICAL, instant)
            }
            ResolvedDate::Components(components) => *components,
        }
    }

    /// The instant this value denotes under the active calendar.
    pub fn date(&self) -> Result<Instant> {
        match self {
            ResolvedDate::Exact(instant) => Ok(*instant),
            ResolvedDate::Components(components) => context::calendar()
                .date_from_components(components)
                .ok_or(DateBuilderError::InvalidComponents(*components)),
        }
    }

    /// Add a signed amount of `unit`, producing an `Exact` value.
    pub fn adding(&self, amount: i64, unit: CalendarUnit) -> Result<ResolvedDate> {
        let date = self.date()?;
        context::calendar()
            .date_by_adding(unit, amount, &date)
            .map(ResolvedDate::Exact)
            .ok_or(DateBuilderError::Unrepresentable { amount, unit, date })
    }

    pub fn adding_seconds(&self, seconds: i64) -> Result<ResolvedDate> {
        self.adding(seconds, CalendarUnit::Second)
    }

    pub fn adding_minutes(&self, minutes: i64) -> Result<ResolvedDate> {
        self.adding(minutes, CalendarUnit::Minute)
    }

    pub fn adding_hours(&self, hours: i64) -> Result<ResolvedDate> {
        self.adding(hours, CalendarUnit::Hour)
    }

    pub fn adding_days(&self, days: i64) -> Result<ResolvedDate> {
        self.adding(days, CalendarUnit::Day)
    }

    pub fn adding_weeks(&self, weeks: i64) -> Result<ResolvedDate> {
        self.adding(weeks, CalendarUnit::Week)
    }

    pub fn adding_months(&self, months: i64) -> Result<ResolvedDate> {
        self.adding(months, CalendarUnit::Month)
    }

    pub fn adding_years(&self, years: i64) -> Result<ResolvedDate> {
        self.adding(years, CalendarUnit::Year)
    }
}

impl From<Instant> for ResolvedDate {
    fn from(instant: Instant) -> Self {
        ResolvedDate::Exact(instant)
    }
}

/// Batch projections over resolved dates.
pub trait ResolvedDates {
    /// Fails on the first value that cannot be resolved.
    fn dates(&self) -> Result<Vec<Instant>>;

    fn date_components(&self) -> Vec<DateComponents>;
}

impl ResolvedDates for [ResolvedDate] {
    fn dates(&self) -> Result<Vec<Instant>> {
        self.iter().map(ResolvedDate::date).collect()
    }

    fn date_components(&self) -> Vec<DateComponents> {
        self.iter().map(ResolvedDate::date_components).collect()
    }
}
