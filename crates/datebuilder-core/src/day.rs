//! Day builder.

use chrono::Utc;

use crate::calendar::{CalendarUnit, Component, DateComponents};
use crate::context;
use crate::error::Result;
use crate::instant::{self, Instant};
use crate::resolved::ResolvedDate;
use crate::time_of_day::TimeOfDay;

/// A day expressed as an anchor instant shifted by a number of days.
///
/// Nothing is computed until the day is queried; the shift is applied in the
/// calendar active at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Day {
    base: Instant,
    offset: i64,
}

impl Day {
    pub fn today() -> Self {
        Self::day_of(Utc::now())
    }

    pub fn tomorrow() -> Self {
        Self::today().adding_days(1)
    }

    pub fn day_of(instant: Instant) -> Self {
        Self {
            base: instant,
            offset: 0,
        }
    }

    /// The given calendar day, resolved in the active calendar.
    ///
    /// The anchor sits a few seconds after midnight so that a midnight falling
    /// on a transition is not read as the previous day. Unsatisfiable
    /// components fall back to the distant-past sentinel.
    pub fn exact(year: i32, month: i32, day: i32) -> Self {
        let midnight = context::calendar()
            .date_from_components(&DateComponents::ymd(year, month, day))
            .unwrap_or_else(|| {
                tracing::warn!(year, month, day, "exact day does not exist");
                instant::distant_past()
            });
        Self::day_of(instant::nudge_forward(midnight))
    }

    pub fn adding_days(&self, days: i64) -> Self {
        Self {
            base: self.base,
            offset: self.offset.saturating_add(days),
        }
    }

    /// The anchor shifted by the offset, or the distant-future sentinel if the
    /// calendar cannot represent it.
    pub(crate) fn finalize(&self) -> Instant {
        context::calendar()
            .date_by_adding(CalendarUnit::Day, self.offset, &self.base)
            .unwrap_or_else(|| {
                tracing::warn!(base = %self.base, offset = self.offset, "day out of range");
                instant::distant_future()
            })
    }

    /// An instant within this day.
    pub fn date(&self) -> Instant {
        self.finalize()
    }

    /// Whether finalizing fell back to the distant-future sentinel.
    pub fn is_distant_future(&self) -> bool {
        instant::is_distant_future(&self.finalize())
    }

    /// Era, year, month and day of this day.
    pub fn date_components(&self) -> DateComponents {
        context::calendar().components(&Component::DAY, &self.finalize())
    }

    /// This day at `time`, left as components for the caller to resolve.
    pub fn at(&self, time: TimeOfDay) -> ResolvedDate {
        let calendar = context::calendar();
        let date = self.finalize();
        let components = calendar
            .components(&[Component::Year, Component::Month, Component::Day], &date)
            .with_time(time.hour as i32, time.minute as i32, time.second as i32);
        ResolvedDate::Components(components)
    }

    pub fn at_hms(&self, hour: u32, minute: u32, second: u32) -> ResolvedDate {
        self.at(TimeOfDay::new(hour, minute, second))
    }

    /// This day at a uniformly random time in `[lower, upper)`.
    pub fn at_random_between(&self, lower: TimeOfDay, upper: TimeOfDay) -> Result<ResolvedDate> {
        Ok(self.at(TimeOfDay::random_between(lower, upper)?))
    }

    /// Whether both days fall on the same calendar day in the active calendar.
    pub fn is_same_day(&self, other: &Day) -> bool {
        self.date_components() == other.date_components()
    }
}

/// Operations over a sequence of days.
pub trait Days {
    fn adding_days(&self, days: i64) -> Vec<Day>;

    fn at(&self, time: TimeOfDay) -> Vec<ResolvedDate>;

    /// Like [`Days::at`], asking `time` for a fresh value per day.
    fn at_each(&self, time: impl FnMut() -> TimeOfDay) -> Vec<ResolvedDate>;

    fn date_components(&self) -> Vec<DateComponents>;

    fn dates(&self) -> Vec<Instant>;
}

impl Days for [Day] {
    fn adding_days(&self, days: i64) -> Vec<Day> {
        self.iter().map(|day| day.adding_days(days)).collect()
    }

    fn at(&self, time: TimeOfDay) -> Vec<ResolvedDate> {
        self.iter().map(|day| day.at(time)).collect()
    }

    fn at_each(&self, mut time: impl FnMut() -> TimeOfDay) -> Vec<ResolvedDate> {
        self.iter().map(|day| day.at(time())).collect()
    }

    fn date_components(&self) -> Vec<DateComponents> {
        self.iter().map(Day::date_components).collect()
    }

    fn dates(&self) -> Vec<Instant> {
        self.iter().map(Day::date).collect()
    }
}
