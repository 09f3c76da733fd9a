//! Year builder.

use chrono::Utc;

use crate::calendar::{CalendarUnit, Component, DateComponents};
use crate::context;
use crate::day::Day;
use crate::instant::{self, Instant};
use crate::month::Month;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Year {
    base_year: i32,
    offset: i64,
}

impl Year {
    pub fn this_year() -> Self {
        Self::year_of(Utc::now())
    }

    pub fn next_year() -> Self {
        Self::this_year().adding_years(1)
    }

    pub fn year_of(instant: Instant) -> Self {
        Self {
            base_year: context::calendar()
                .component(Component::Year, &instant)
                .unwrap_or_default(),
            offset: 0,
        }
    }

    pub fn of_day(day: &Day) -> Self {
        Self::year_of(day.finalize())
    }

    pub fn of_month(month: &Month) -> Self {
        Self::of_day(&month.first_day())
    }

    pub fn exact(year: i32) -> Self {
        Self {
            base_year: year,
            offset: 0,
        }
    }

    pub fn adding_years(&self, years: i64) -> Self {
        Self {
            base_year: self.base_year,
            offset: self.offset.saturating_add(years),
        }
    }

    /// Start of the year, or the distant-future sentinel.
    pub(crate) fn finalize(&self) -> Instant {
        context::calendar()
            .resolve_anchor(
                &DateComponents::year_only(self.base_year),
                CalendarUnit::Year,
                self.offset,
            )
            .unwrap_or_else(|| {
                tracing::warn!(year = ?self, "year cannot be resolved");
                instant::distant_future()
            })
    }

    pub fn date_components(&self) -> DateComponents {
        context::calendar().components(&[Component::Era, Component::Year], &self.finalize())
    }

    pub fn first_day(&self) -> Day {
        Day::day_of(self.finalize())
    }

    pub fn last_day(&self) -> Day {
        match self.interval_end() {
            Some(end) => Day::day_of(end),
            None => self.first_day(),
        }
    }

    pub fn first_month(&self) -> Month {
        Month::month_of(self.finalize())
    }

    pub fn last_month(&self) -> Month {
        match self.interval_end() {
            Some(end) => Month::month_of(end),
            None => self.first_month(),
        }
    }

    pub fn all_months(&self) -> Vec<Month> {
        context::calendar()
            .steps_within(CalendarUnit::Year, CalendarUnit::Month, &self.finalize())
            .into_iter()
            .map(Month::month_of)
            .collect()
    }

    /// Just before midnight of the following year's first day.
    fn interval_end(&self) -> Option<Instant> {
        let interval = context::calendar().date_interval(CalendarUnit::Year, &self.finalize());
        if interval.is_none() {
            tracing::warn!(year = ?self, "no year interval, using first day");
        }
        interval.map(|interval| instant::nudge_backward(interval.end))
    }
}

/// Operations over a sequence of years.
pub trait Years {
    fn adding_years(&self, years: i64) -> Vec<Year>;

    fn first_months(&self) -> Vec<Month>;

    fn last_months(&self) -> Vec<Month>;
}

impl Years for [Year] {
    fn adding_years(&self, years: i64) -> Vec<Year> {
        self.iter().map(|year| year.adding_years(years)).collect()
    }

    fn first_months(&self) -> Vec<Month> {
        self.iter().map(Year::first_month).collect()
    }

    fn last_months(&self) -> Vec<Month> {
        self.iter().map(Year::last_month).collect()
    }
}
