//! Free-function entry points.
//!
//! Constructors anchored on "now", on an instant, or on a fixed offset store
//! that anchor and leave the calendar alone until a terminal operation runs.
//! Those that turn calendar fields into an anchor (`exact_day`, `week_of`,
//! `month_of`, `year_of` and the `*_of_day` / `year_of_month` conversions)
//! read the active calendar when they are called.

use chrono::Utc;

use crate::day::{Day, Days};
use crate::distribution::DelayDistribution;
use crate::instant::Instant;
use crate::month::Month;
use crate::resolved::ResolvedDate;
use crate::time_of_day::TimeOfDay;
use crate::week::Week;
use crate::year::Year;

// ============================================================================
// Days
// ============================================================================

pub fn today() -> Day {
    Day::today()
}

pub fn tomorrow() -> Day {
    Day::tomorrow()
}

pub fn day_of(instant: Instant) -> Day {
    Day::day_of(instant)
}

pub fn exact_day(year: i32, month: i32, day: i32) -> Day {
    Day::exact(year, month, day)
}

pub fn today_at(time: TimeOfDay) -> ResolvedDate {
    day_of_at(Utc::now(), time)
}

pub fn tomorrow_at(time: TimeOfDay) -> ResolvedDate {
    after_today(1, time)
}

pub fn day_of_at(instant: Instant, time: TimeOfDay) -> ResolvedDate {
    day_of(instant).at(time)
}

/// `days` days after today, at `time`.
pub fn after_today(days: i64, time: TimeOfDay) -> ResolvedDate {
    after(Utc::now(), days, time)
}

/// `days` days after the day containing `instant`, at `time`.
pub fn after(instant: Instant, days: i64, time: TimeOfDay) -> ResolvedDate {
    adding_days(days, &day_of(instant)).at(time)
}

// ============================================================================
// Weeks, months and years
// ============================================================================

pub fn this_week() -> Week {
    Week::this_week()
}

pub fn next_week() -> Week {
    Week::next_week()
}

pub fn week_of(instant: Instant) -> Week {
    Week::week_of(instant)
}

pub fn week_of_day(day: &Day) -> Week {
    Week::of_day(day)
}

pub fn this_month() -> Month {
    Month::this_month()
}

pub fn next_month() -> Month {
    Month::next_month()
}

pub fn month_of(instant: Instant) -> Month {
    Month::month_of(instant)
}

pub fn month_of_day(day: &Day) -> Month {
    Month::of_day(day)
}

pub fn exact_month(year: i32, month: i32) -> Month {
    Month::exact(year, month)
}

pub fn this_year() -> Year {
    Year::this_year()
}

pub fn next_year() -> Year {
    Year::next_year()
}

pub fn year_of(instant: Instant) -> Year {
    Year::year_of(instant)
}

pub fn year_of_day(day: &Day) -> Year {
    Year::of_day(day)
}

pub fn year_of_month(month: &Month) -> Year {
    Year::of_month(month)
}

pub fn exact_year(year: i32) -> Year {
    Year::exact(year)
}

/// A fixed instant, used as is regardless of the active calendar.
pub fn exactly_at(instant: Instant) -> ResolvedDate {
    ResolvedDate::Exact(instant)
}

// ============================================================================
// Offsets
// ============================================================================

pub fn adding_days(days: i64, day: &Day) -> Day {
    day.adding_days(days)
}

pub fn adding_weeks(weeks: i64, week: &Week) -> Week {
    week.adding_weeks(weeks)
}

pub fn adding_months(months: i64, month: &Month) -> Month {
    month.adding_months(months)
}

pub fn adding_years(years: i64, year: &Year) -> Year {
    year.adding_years(years)
}

// ============================================================================
// Recurrence
// ============================================================================

/// `count` consecutive days starting with `start`.
pub fn every_day(count: usize, start: Day) -> Vec<Day> {
    every_day_with(count, start, &DelayDistribution::normal())
}

pub fn every_day_with(count: usize, start: Day, distribution: &DelayDistribution) -> Vec<Day> {
    distribution.generate(count, start, Day::adding_days)
}

/// `count` consecutive days starting with `start`, each at `time`.
pub fn every_day_at(start: Day, count: usize, time: TimeOfDay) -> Vec<ResolvedDate> {
    every_day(count, start).at(time)
}

pub fn every_week(count: usize, start: Week) -> Vec<Week> {
    every_week_with(count, start, &DelayDistribution::normal())
}

pub fn every_week_with(count: usize, start: Week, distribution: &DelayDistribution) -> Vec<Week> {
    distribution.generate(count, start, Week::adding_weeks)
}

pub fn every_month(count: usize, start: Month) -> Vec<Month> {
    every_month_with(count, start, &DelayDistribution::normal())
}

pub fn every_month_with(count: usize, start: Month, distribution: &DelayDistribution) -> Vec<Month> {
    distribution.generate(count, start, Month::adding_months)
}

pub fn every_year(count: usize, start: Year) -> Vec<Year> {
    every_year_with(count, start, &DelayDistribution::normal())
}

pub fn every_year_with(count: usize, start: Year, distribution: &DelayDistribution) -> Vec<Year> {
    distribution.generate(count, start, Year::adding_years)
}
