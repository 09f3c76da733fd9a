//! Week builder.
//!
//! A week is anchored by its `(year_for_week_of_year, week_of_year)` pair
//! rather than an instant. The pair is turned back into a date only when the
//! week is finalized, so a first-weekday change made in between moves the
//! week's start to the new convention instead of keeping a stale instant.

use chrono::Utc;

use crate::calendar::{CalendarUnit, Component, DateComponents, GregorianWeekday};
use crate::context;
use crate::day::Day;
use crate::instant::{self, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Week {
    year_for_week_of_year: i32,
    week_of_year: i32,
    offset: i64,
}

impl Week {
    pub fn this_week() -> Self {
        Self::week_of(Utc::now())
    }

    pub fn next_week() -> Self {
        Self::this_week().adding_weeks(1)
    }

    /// The week containing `instant` under the active calendar.
    pub fn week_of(instant: Instant) -> Self {
        let calendar = context::calendar();
        Self {
            year_for_week_of_year: calendar
                .component(Component::YearForWeekOfYear, &instant)
                .unwrap_or_default(),
            week_of_year: calendar
                .component(Component::WeekOfYear, &instant)
                .unwrap_or_default(),
            offset: 0,
        }
    }

    pub fn of_day(day: &Day) -> Self {
        Self::week_of(day.finalize())
    }

    pub fn adding_weeks(&self, weeks: i64) -> Self {
        Self {
            offset: self.offset.saturating_add(weeks),
            ..*self
        }
    }

    /// Start of the week, or the distant-future sentinel.
    pub(crate) fn finalize(&self) -> Instant {
        let anchor = DateComponents::week(self.year_for_week_of_year, self.week_of_year);
        context::calendar()
            .resolve_anchor(&anchor, CalendarUnit::Week, self.offset)
            .unwrap_or_else(|| {
                tracing::warn!(week = ?self, "week cannot be resolved");
                instant::distant_future()
            })
    }

    /// Day fields of the week's first day plus its week-of-year pair.
    pub fn date_components(&self) -> DateComponents {
        let mut fields = Component::DAY.to_vec();
        fields.extend([Component::WeekOfYear, Component::YearForWeekOfYear]);
        context::calendar().components(&fields, &self.finalize())
    }

    pub fn first_day(&self) -> Day {
        Day::day_of(self.finalize())
    }

    /// The occurrence of `weekday` within this calendar week.
    pub fn weekday(&self, weekday: GregorianWeekday) -> Day {
        let calendar = context::calendar();
        let mut components = calendar.components(
            &[Component::WeekOfYear, Component::YearForWeekOfYear],
            &self.finalize(),
        );
        components.weekday = Some(weekday.number());
        let date = calendar.date_from_components(&components).unwrap_or_else(|| {
            tracing::warn!(?weekday, week = ?self, "weekday cannot be resolved");
            instant::distant_future()
        });
        Day::day_of(date)
    }

    /// First day of the next weekend at or after the start of this week.
    ///
    /// Calendars without a weekend yield [`Week::last_day`].
    pub fn weekend_start_day(&self) -> Day {
        match context::calendar().next_weekend(&self.finalize()) {
            Some(weekend) => Day::day_of(instant::nudge_forward(weekend.start)),
            None => {
                tracing::warn!(week = ?self, "no weekend, using last day");
                self.last_day()
            }
        }
    }

    /// Last day of the next weekend at or after the start of this week.
    ///
    /// Calendars without a weekend yield [`Week::last_day`].
    pub fn weekend_end_day(&self) -> Day {
        match context::calendar().next_weekend(&self.finalize()) {
            Some(weekend) => Day::day_of(instant::nudge_backward(weekend.end)),
            None => {
                tracing::warn!(week = ?self, "no weekend, using last day");
                self.last_day()
            }
        }
    }

    pub fn last_day(&self) -> Day {
        let calendar = context::calendar();
        match calendar.date_interval(CalendarUnit::Week, &self.finalize()) {
            // The raw end is midnight of the next week's first day.
            Some(interval) => Day::day_of(instant::nudge_backward(interval.end)),
            None => {
                tracing::warn!(week = ?self, "no week interval, using first day");
                self.first_day()
            }
        }
    }

    /// Every day of the week, as many as the calendar's week holds.
    pub fn all_days(&self) -> Vec<Day> {
        context::calendar()
            .steps_within(CalendarUnit::Week, CalendarUnit::Day, &self.finalize())
            .into_iter()
            .map(Day::day_of)
            .collect()
    }
}

/// Operations over a sequence of weeks.
pub trait Weeks {
    fn adding_weeks(&self, weeks: i64) -> Vec<Week>;

    fn first_days(&self) -> Vec<Day>;

    fn last_days(&self) -> Vec<Day>;

    fn weekdays(&self, weekday: GregorianWeekday) -> Vec<Day>;

    fn weekend_start_days(&self) -> Vec<Day>;

    fn weekend_end_days(&self) -> Vec<Day>;
}

impl Weeks for [Week] {
    fn adding_weeks(&self, weeks: i64) -> Vec<Week> {
        self.iter().map(|week| week.adding_weeks(weeks)).collect()
    }

    fn first_days(&self) -> Vec<Day> {
        self.iter().map(Week::first_day).collect()
    }

    fn last_days(&self) -> Vec<Day> {
        self.iter().map(Week::last_day).collect()
    }

    fn weekdays(&self, weekday: GregorianWeekday) -> Vec<Day> {
        self.iter().map(|week| week.weekday(weekday)).collect()
    }

    fn weekend_start_days(&self) -> Vec<Day> {
        self.iter().map(Week::weekend_start_day).collect()
    }

    fn weekend_end_days(&self) -> Vec<Day> {
        self.iter().map(Week::weekend_end_day).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::day::Days;
    use chrono::{TimeZone, Weekday};
    use chrono_tz::Tz;

    fn us() -> Calendar {
        Calendar::gregorian(Tz::UTC, "en_US")
    }

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
        Utc.with_ymd_and_hms(y, m, d, h, mi, s).unwrap()
    }

    fn ymd(day: &Day) -> (Option<i32>, Option<i32>, Option<i32>) {
        let c = day.date_components();
        (c.year, c.month, c.day)
    }

    // 2021-03-10 is a Wednesday; its US week runs Sunday 7th to Saturday 13th.
    fn march_week() -> Week {
        context::with_calendar(us(), || Week::week_of(at(2021, 3, 10, 12, 0, 0)))
    }

    #[test]
    fn week_of_records_week_pair() {
        let week = march_week();
        assert_eq!(week.year_for_week_of_year, 2021);
        assert_eq!(week.week_of_year, 11);
        assert_eq!(week.offset, 0);
    }

    #[test]
    fn first_and_last_day() {
        context::with_calendar(us(), || {
            let week = march_week();
            assert_eq!(ymd(&week.first_day()), (Some(2021), Some(3), Some(7)));
            assert_eq!(ymd(&week.last_day()), (Some(2021), Some(3), Some(13)));
        });
    }

    #[test]
    fn last_day_stays_inside_week_at_month_end() {
        // Week of 2021-07-25 (Sunday) ends at midnight of 2021-08-01.
        context::with_calendar(us(), || {
            let week = Week::week_of(at(2021, 7, 27, 0, 0, 0));
            assert_eq!(ymd(&week.last_day()), (Some(2021), Some(7), Some(31)));
        });
    }

    #[test]
    fn weekday_within_week() {
        context::with_calendar(us(), || {
            let saturday = march_week().weekday(GregorianWeekday::Saturday);
            assert_eq!(ymd(&saturday), (Some(2021), Some(3), Some(13)));
            let sunday = march_week().weekday(GregorianWeekday::Sunday);
            assert_eq!(ymd(&sunday), (Some(2021), Some(3), Some(7)));
        });
    }

    #[test]
    fn weekday_honors_first_weekday() {
        let monday_first = us().with_first_weekday(Weekday::Mon);
        context::with_calendar(monday_first, || {
            // Monday-first week containing Wednesday the 10th runs 8th to 14th.
            let sunday = march_week_in_context().weekday(GregorianWeekday::Sunday);
            assert_eq!(ymd(&sunday), (Some(2021), Some(3), Some(14)));
        });
    }

    fn march_week_in_context() -> Week {
        Week::week_of(at(2021, 3, 10, 12, 0, 0))
    }

    #[test]
    fn adding_weeks_moves_across_year() {
        context::with_calendar(us(), || {
            let week = Week::week_of(at(2021, 12, 22, 0, 0, 0)).adding_weeks(2);
            assert_eq!(ymd(&week.first_day()), (Some(2022), Some(1), Some(2)));
        });
    }

    #[test]
    fn weekend_days_us() {
        context::with_calendar(us(), || {
            let week = march_week();
            assert_eq!(ymd(&week.weekend_start_day()), (Some(2021), Some(3), Some(13)));
            assert_eq!(ymd(&week.weekend_end_day()), (Some(2021), Some(3), Some(14)));
        });
    }

    #[test]
    fn weekend_start_israel_is_friday() {
        context::with_calendar(Calendar::gregorian(Tz::Asia__Jerusalem, "he_IL"), || {
            let week = Week::week_of(at(2021, 3, 10, 12, 0, 0));
            let start = week.weekend_start_day();
            assert_eq!(ymd(&start), (Some(2021), Some(3), Some(12)));
            assert_eq!(
                context::calendar().component(Component::Weekday, &start.date()),
                Some(GregorianWeekday::Friday.number())
            );
        });
    }

    #[test]
    fn missing_weekend_falls_back_to_last_day() {
        context::with_calendar(us().with_weekend(Vec::new()), || {
            let week = march_week_in_context();
            assert_eq!(week.weekend_start_day(), week.last_day());
            assert_eq!(week.weekend_end_day(), week.last_day());
        });
    }

    #[test]
    fn all_days_cover_the_week() {
        context::with_calendar(us(), || {
            let days = march_week().all_days();
            assert_eq!(days.len(), 7);
            let numbers: Vec<_> = days.date_components().iter().map(|c| c.day).collect();
            assert_eq!(numbers, (7..=13).map(Some).collect::<Vec<_>>());
        });
    }

    #[test]
    fn all_days_across_dst_change() {
        // US DST starts Sunday 2021-03-14.
        context::with_calendar(Calendar::gregorian(Tz::America__New_York, "en_US"), || {
            let week = Week::week_of(at(2021, 3, 16, 12, 0, 0));
            let days: Vec<_> = week.all_days().date_components().iter().map(|c| c.day).collect();
            assert_eq!(days, (14..=20).map(Some).collect::<Vec<_>>());
        });
    }

    #[test]
    fn invalid_anchor_degrades_to_sentinel() {
        let week = Week {
            year_for_week_of_year: 2021,
            week_of_year: 60,
            offset: 0,
        };
        context::with_calendar(us(), || {
            assert!(week.first_day().is_distant_future());
        });
    }

    #[test]
    fn sequence_operations() {
        context::with_calendar(us(), || {
            let weeks = vec![march_week(), march_week().adding_weeks(1)];
            let starts: Vec<_> = weeks.first_days().iter().map(ymd).collect();
            assert_eq!(starts, vec![(Some(2021), Some(3), Some(7)), (Some(2021), Some(3), Some(14))]);
            let ends: Vec<_> = weeks.adding_weeks(1).last_days().iter().map(ymd).collect();
            assert_eq!(ends, vec![(Some(2021), Some(3), Some(20)), (Some(2021), Some(3), Some(27))]);
            assert_eq!(weeks.weekdays(GregorianWeekday::Monday).len(), 2);
            assert_eq!(ymd(&weeks.weekend_start_days()[1]), (Some(2021), Some(3), Some(20)));
            assert_eq!(ymd(&weeks.weekend_end_days()[0]), (Some(2021), Some(3), Some(14)));
        });
    }

    #[test]
    fn date_components_include_week_pair() {
        context::with_calendar(us(), || {
            let components = march_week().date_components();
            assert_eq!(components.week_of_year, Some(11));
            assert_eq!(components.year_for_week_of_year, Some(2021));
            assert_eq!(components.day, Some(7));
        });
    }
}
