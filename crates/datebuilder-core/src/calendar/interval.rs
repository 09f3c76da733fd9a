//! Unit intervals and weekend lookup.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};

use super::arithmetic::{shift_days, shift_months};
use super::{Calendar, CalendarUnit, DateComponents};
use crate::instant::{nudge_backward, nudge_forward, Instant};

/// A span of time from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    pub start: Instant,
    pub end: Instant,
}

impl DateInterval {
    /// Returns `None` if `end` precedes `start`.
    pub fn new(start: Instant, end: Instant) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Inclusive of both ends.
    pub fn contains(&self, instant: &Instant) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Both ends moved inward by the boundary nudge.
    pub(crate) fn nudged_inward(self) -> Self {
        Self {
            start: nudge_forward(self.start),
            end: nudge_backward(self.end),
        }
    }
}

impl Calendar {
    /// The interval of `unit` containing `instant`.
    ///
    /// `end` is the first instant of the following unit.
    pub fn date_interval(&self, unit: CalendarUnit, instant: &Instant) -> Option<DateInterval> {
        let local = self.local(instant);
        let (start, end) = match unit {
            CalendarUnit::Second => {
                let start = local.with_nanosecond(0)?;
                (start, start.checked_add_signed(Duration::seconds(1))?)
            }
            CalendarUnit::Minute => {
                let start = local.with_second(0)?.with_nanosecond(0)?;
                (start, start.checked_add_signed(Duration::minutes(1))?)
            }
            CalendarUnit::Hour => {
                let start = local.with_minute(0)?.with_second(0)?.with_nanosecond(0)?;
                (start, start.checked_add_signed(Duration::hours(1))?)
            }
            CalendarUnit::Day => {
                let day = local.date();
                (midnight(day)?, midnight(shift_days(day, 1)?)?)
            }
            CalendarUnit::Week => {
                let first = shift_days(local.date(), -self.days_from_week_start(local.weekday()))?;
                (midnight(first)?, midnight(shift_days(first, 7)?)?)
            }
            CalendarUnit::Month => {
                let first = NaiveDate::from_ymd_opt(local.year(), local.month(), 1)?;
                (midnight(first)?, midnight(shift_months(first, 1)?)?)
            }
            CalendarUnit::Year => {
                let first = NaiveDate::from_ymd_opt(local.year(), 1, 1)?;
                (midnight(first)?, midnight(shift_months(first, 12)?)?)
            }
        };
        DateInterval::new(self.resolve_local(&start)?, self.resolve_local(&end)?)
    }

    /// The first weekend starting strictly after `after`.
    ///
    /// A weekend runs from midnight of its first day to midnight after its last
    /// day. Returns `None` when the calendar has no weekend, or when every day
    /// is a weekend day.
    pub fn next_weekend(&self, after: &Instant) -> Option<DateInterval> {
        let weekend = self.weekend_days();
        let is_weekend = |date: NaiveDate| weekend.contains(&date.weekday());
        if weekend.is_empty() || ALL_WEEKDAYS.iter().all(|day| weekend.contains(day)) {
            return None;
        }

        let today = self.local(after).date();
        for offset in 0..=14 {
            let day = shift_days(today, offset)?;
            if !is_weekend(day) || is_weekend(shift_days(day, -1)?) {
                continue;
            }
            let start = self.resolve_local(&midnight(day)?)?;
            if start <= *after {
                continue;
            }
            let mut last = day;
            while is_weekend(shift_days(last, 1)?) {
                last = shift_days(last, 1)?;
            }
            let end = self.resolve_local(&midnight(shift_days(last, 1)?)?)?;
            return DateInterval::new(start, end);
        }
        None
    }

    /// Instants stepping by one `step` through the `unit` containing `anchor`.
    ///
    /// Iteration starts just inside the interval start and stops once the
    /// just-inside interval end is passed, so the count is whatever this
    /// calendar says the unit holds.
    pub(crate) fn steps_within(&self, unit: CalendarUnit, step: CalendarUnit, anchor: &Instant) -> Vec<Instant> {
        let Some(interval) = self.date_interval(unit, anchor) else {
            tracing::warn!(?unit, %anchor, "no interval to enumerate");
            return Vec::new();
        };
        let interval = interval.nudged_inward();
        let mut current = interval.start;
        let mut all = Vec::new();
        while interval.contains(&current) {
            all.push(current);
            match self.date_by_adding(step, 1, &current) {
                Some(next) => current = next,
                None => break,
            }
        }
        all
    }

    /// Anchor components shifted by `offset` units.
    pub(crate) fn resolve_anchor(&self, anchor: &DateComponents, unit: CalendarUnit, offset: i64) -> Option<Instant> {
        let base = self.date_from_components(anchor)?;
        self.date_by_adding(unit, offset, &base)
    }
}

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn midnight(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_opt(0, 0, 0)
}
