//! Month builder.

use chrono::Utc;

use crate::calendar::{CalendarUnit, Component, DateComponents, GregorianWeekday, Ordinal};
use crate::context;
use crate::day::Day;
use crate::instant::{self, Instant};

/// A month anchored by `(year, month)` and shifted by a number of months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month {
    year: i32,
    month: i32,
    offset: i64,
}

impl Month {
    pub fn this_month() -> Self {
        Self::month_of(Utc::now())
    }

    pub fn next_month() -> Self {
        Self::this_month().adding_months(1)
    }

    pub fn month_of(instant: Instant) -> Self {
        let calendar = context::calendar();
        Self {
            year: calendar.component(Component::Year, &instant).unwrap_or_default(),
            month: calendar.component(Component::Month, &instant).unwrap_or_default(),
            offset: 0,
        }
    }

    pub fn of_day(day: &Day) -> Self {
        Self::month_of(day.finalize())
    }

    pub fn exact(year: i32, month: i32) -> Self {
        Self {
            year,
            month,
            offset: 0,
        }
    }

    pub fn adding_months(&self, months: i64) -> Self {
        Self {
            offset: self.offset.saturating_add(months),
            ..*self
        }
    }

    /// Start of the month, or the distant-future sentinel.
    pub(crate) fn finalize(&self) -> Instant {
        context::calendar()
            .resolve_anchor(
                &DateComponents::year_month(self.year, self.month),
                CalendarUnit::Month,
                self.offset,
            )
            .unwrap_or_else(|| {
                tracing::warn!(month = ?self, "month cannot be resolved");
                instant::distant_future()
            })
    }

    /// Era, year and month of this month.
    pub fn date_components(&self) -> DateComponents {
        context::calendar().components(
            &[Component::Era, Component::Year, Component::Month],
            &self.finalize(),
        )
    }

    pub fn first_day(&self) -> Day {
        Day::day_of(self.finalize())
    }

    pub fn last_day(&self) -> Day {
        match context::calendar().date_interval(CalendarUnit::Month, &self.finalize()) {
            // The raw end is midnight of the next month's first day.
            Some(interval) => Day::day_of(instant::nudge_backward(interval.end)),
            None => {
                tracing::warn!(month = ?self, "no month interval, using first day");
                self.first_day()
            }
        }
    }

    /// The `ordinal` occurrence of `weekday` in this month, if there is one.
    pub fn weekday(&self, ordinal: Ordinal, weekday: GregorianWeekday) -> Option<Day> {
        let calendar = context::calendar();
        let mut components =
            calendar.components(&[Component::Year, Component::Month], &self.finalize());
        components.weekday = Some(weekday.number());
        components.weekday_ordinal = Some(ordinal.number());
        calendar.date_from_components(&components).map(Day::day_of)
    }

    /// The first `weekday` of this month.
    pub fn first(&self, weekday: GregorianWeekday) -> Day {
        self.weekday(Ordinal::First, weekday).unwrap_or_else(|| {
            tracing::warn!(?weekday, month = ?self, "first weekday cannot be resolved");
            Day::day_of(instant::distant_future())
        })
    }

    pub fn all_days(&self) -> Vec<Day> {
        context::calendar()
            .steps_within(CalendarUnit::Month, CalendarUnit::Day, &self.finalize())
            .into_iter()
            .map(Day::day_of)
            .collect()
    }
}

/// Operations over a sequence of months.
pub trait Months {
    fn adding_months(&self, months: i64) -> Vec<Month>;

    fn first_days(&self) -> Vec<Day>;

    fn last_days(&self) -> Vec<Day>;

    /// Months without the requested occurrence are skipped.
    fn weekdays(&self, ordinal: Ordinal, weekday: GregorianWeekday) -> Vec<Day>;

    fn firsts(&self, weekday: GregorianWeekday) -> Vec<Day>;
}

impl Months for [Month] {
    fn adding_months(&self, months: i64) -> Vec<Month> {
        self.iter().map(|month| month.adding_months(months)).collect()
    }

    fn first_days(&self) -> Vec<Day> {
        self.iter().map(Month::first_day).collect()
    }

    fn last_days(&self) -> Vec<Day> {
        self.iter().map(Month::last_day).collect()
    }

    fn weekdays(&self, ordinal: Ordinal, weekday: GregorianWeekday) -> Vec<Day> {
        self.iter()
            .filter_map(|month| month.weekday(ordinal, weekday))
            .collect()
    }

    fn firsts(&self, weekday: GregorianWeekday) -> Vec<Day> {
        self.iter().map(|month| month.first(weekday)).collect()
    }
}
