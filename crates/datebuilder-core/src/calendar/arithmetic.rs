//! Components to instants and back, and calendar-aware addition.

use chrono::{
    Datelike, Days, Duration, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Timelike, Utc, Weekday,
};

use super::{Calendar, CalendarUnit, Component, DateComponents, GregorianWeekday};
use crate::instant::Instant;

impl Calendar {
    /// Wall-clock time of `instant` in this calendar's time zone.
    pub(crate) fn local(&self, instant: &Instant) -> NaiveDateTime {
        instant.with_timezone(&self.time_zone).naive_local()
    }

    /// Instant denoted by a wall-clock time in this calendar's time zone.
    ///
    /// Ambiguous times take the earlier instant. Times skipped by a forward
    /// transition are read with the offset in force before it, which lands
    /// them after the transition by the length of the gap.
    pub fn resolve_local(&self, local: &NaiveDateTime) -> Option<Instant> {
        match self.time_zone.from_local_datetime(local) {
            LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
            LocalResult::None => {
                let probe = local.checked_sub_signed(Duration::days(1))?;
                let before = self.time_zone.offset_from_utc_datetime(&probe).fix();
                let utc = local
                    .checked_sub_signed(Duration::seconds(i64::from(before.local_minus_utc())))?;
                Some(Utc.from_utc_datetime(&utc))
            }
        }
    }

    /// Instant denoted by `components`, or `None` if they are unsatisfiable.
    ///
    /// A week-of-year pair takes precedence over year/month/day. Within a
    /// month, `weekday` together with `weekday_ordinal` selects the Nth
    /// occurrence; otherwise `day` (default 1) is used. Missing clock fields
    /// are zero.
    pub fn date_from_components(&self, components: &DateComponents) -> Option<Instant> {
        let time = NaiveTime::from_hms_opt(
            u32::try_from(components.hour.unwrap_or(0)).ok()?,
            u32::try_from(components.minute.unwrap_or(0)).ok()?,
            u32::try_from(components.second.unwrap_or(0)).ok()?,
        )?;
        let date = match (components.year_for_week_of_year, components.week_of_year) {
            (Some(year), Some(week)) => self.date_in_week(year, week, components.weekday)?,
            _ => self.date_in_year(components)?,
        };
        self.resolve_local(&date.and_time(time))
    }

    fn date_in_week(&self, year: i32, week: i32, weekday: Option<i32>) -> Option<NaiveDate> {
        let first = self.week_one_start(year)?;
        let weeks = (self.week_one_start(year.checked_add(1)?)? - first).num_days() / 7;
        if week < 1 || i64::from(week) > weeks {
            return None;
        }
        let start = shift_days(first, i64::from(week - 1) * 7)?;
        match weekday {
            Some(number) => {
                let weekday: Weekday = GregorianWeekday::from_number(number)?.into();
                shift_days(start, self.days_from_week_start(weekday))
            }
            None => Some(start),
        }
    }

    fn date_in_year(&self, components: &DateComponents) -> Option<NaiveDate> {
        let year = match components.era {
            None | Some(1) => components.year?,
            Some(0) => 1 - components.year?,
            Some(_) => return None,
        };
        let month = u32::try_from(components.month.unwrap_or(1)).ok()?;
        match (components.weekday, components.weekday_ordinal) {
            (Some(weekday), Some(ordinal)) => {
                let weekday: Weekday = GregorianWeekday::from_number(weekday)?.into();
                let n = u8::try_from(ordinal).ok().filter(|n| *n >= 1)?;
                NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
            }
            _ => NaiveDate::from_ymd_opt(year, month, u32::try_from(components.day.unwrap_or(1)).ok()?),
        }
    }

    /// Decompose `instant` into the requested fields.
    pub fn components(&self, fields: &[Component], instant: &Instant) -> DateComponents {
        let mut components = DateComponents::default();
        for field in fields {
            components.set(*field, self.component(*field, instant));
        }
        components
    }

    pub fn component(&self, field: Component, instant: &Instant) -> Option<i32> {
        let local = self.local(instant);
        let value = match field {
            Component::Era => i32::from(local.year() > 0),
            Component::Year => {
                let year = local.year();
                if year > 0 {
                    year
                } else {
                    1 - year
                }
            }
            Component::Month => local.month() as i32,
            Component::Day => local.day() as i32,
            Component::Hour => local.hour() as i32,
            Component::Minute => local.minute() as i32,
            Component::Second => local.second() as i32,
            Component::Weekday => local.weekday().number_from_sunday() as i32,
            Component::WeekdayOrdinal => ((local.day() - 1) / 7 + 1) as i32,
            Component::WeekOfYear => self.week_of_year(local.date())?.1,
            Component::YearForWeekOfYear => self.week_of_year(local.date())?.0,
        };
        Some(value)
    }

    /// Add a signed amount of `unit` to `instant`.
    ///
    /// Seconds, minutes and hours are elapsed time. Larger units keep the
    /// wall-clock time; months and years clamp the day to the target month.
    pub fn date_by_adding(&self, unit: CalendarUnit, amount: i64, instant: &Instant) -> Option<Instant> {
        let local = self.local(instant);
        let date = match unit {
            CalendarUnit::Second => return instant.checked_add_signed(Duration::try_seconds(amount)?),
            CalendarUnit::Minute => return instant.checked_add_signed(Duration::try_minutes(amount)?),
            CalendarUnit::Hour => return instant.checked_add_signed(Duration::try_hours(amount)?),
            CalendarUnit::Day => shift_days(local.date(), amount)?,
            CalendarUnit::Week => shift_days(local.date(), amount.checked_mul(7)?)?,
            CalendarUnit::Month => shift_months(local.date(), amount)?,
            CalendarUnit::Year => shift_months(local.date(), amount.checked_mul(12)?)?,
        };
        self.resolve_local(&date.and_time(local.time()))
    }

    /// Days between the start of a week and `weekday`.
    pub(crate) fn days_from_week_start(&self, weekday: Weekday) -> i64 {
        let first = self.first_weekday().num_days_from_sunday();
        i64::from((weekday.num_days_from_sunday() + 7 - first) % 7)
    }

    /// First day of week 1 of `year`.
    pub(crate) fn week_one_start(&self, year: i32) -> Option<NaiveDate> {
        let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let lead = self.days_from_week_start(jan1.weekday());
        let week_start = shift_days(jan1, -lead)?;
        if 7 - lead >= i64::from(self.minimum_days_in_first_week()) {
            Some(week_start)
        } else {
            shift_days(week_start, 7)
        }
    }

    /// `(year_for_week_of_year, week_of_year)` of a local date.
    pub(crate) fn week_of_year(&self, date: NaiveDate) -> Option<(i32, i32)> {
        let year = date.year();
        let owner = if date < self.week_one_start(year)? {
            year - 1
        } else if date >= self.week_one_start(year + 1)? {
            year + 1
        } else {
            year
        };
        let week = (date - self.week_one_start(owner)?).num_days() / 7 + 1;
        Some((owner, i32::try_from(week).ok()?))
    }
}

pub(crate) fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

pub(crate) fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}
