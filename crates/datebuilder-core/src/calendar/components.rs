//! Calendar fields, units and the canonical weekday numbering.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A partial set of calendar fields.
///
/// Unset fields are `None`. Which combinations denote an instant is decided by
/// [`Calendar::date_from_components`](super::Calendar::date_from_components).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DateComponents {
    /// 1 for the common era, 0 before it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<i32>,
    /// Gregorian weekday number (Sunday = 1 ... Saturday = 7)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<i32>,
    /// Occurrence of `weekday` within the month (1 = first)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday_ordinal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_of_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_for_week_of_year: Option<i32>,
}

impl DateComponents {
    pub fn ymd(year: i32, month: i32, day: i32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..Self::default()
        }
    }

    pub fn year_month(year: i32, month: i32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            ..Self::default()
        }
    }

    pub fn year_only(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    pub fn week(year_for_week_of_year: i32, week_of_year: i32) -> Self {
        Self {
            week_of_year: Some(week_of_year),
            year_for_week_of_year: Some(year_for_week_of_year),
            ..Self::default()
        }
    }

    /// Overlay a time of day onto these components.
    pub fn with_time(mut self, hour: i32, minute: i32, second: i32) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self.second = Some(second);
        self
    }

    pub fn get(&self, component: Component) -> Option<i32> {
        match component {
            Component::Era => self.era,
            Component::Year => self.year,
            Component::Month => self.month,
            Component::Day => self.day,
            Component::Hour => self.hour,
            Component::Minute => self.minute,
            Component::Second => self.second,
            Component::Weekday => self.weekday,
            Component::WeekdayOrdinal => self.weekday_ordinal,
            Component::WeekOfYear => self.week_of_year,
            Component::YearForWeekOfYear => self.year_for_week_of_year,
        }
    }

    pub fn set(&mut self, component: Component, value: Option<i32>) {
        let slot = match component {
            Component::Era => &mut self.era,
            Component::Year => &mut self.year,
            Component::Month => &mut self.month,
            Component::Day => &mut self.day,
            Component::Hour => &mut self.hour,
            Component::Minute => &mut self.minute,
            Component::Second => &mut self.second,
            Component::Weekday => &mut self.weekday,
            Component::WeekdayOrdinal => &mut self.weekday_ordinal,
            Component::WeekOfYear => &mut self.week_of_year,
            Component::YearForWeekOfYear => &mut self.year_for_week_of_year,
        };
        *slot = value;
    }
}

/// A single calendar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Era,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Weekday,
    WeekdayOrdinal,
    WeekOfYear,
    YearForWeekOfYear,
}

impl Component {
    /// Fields produced when an exact instant is decomposed.
    pub const CANONICAL: [Component; 8] = [
        Component::Era,
        Component::Year,
        Component::Month,
        Component::Weekday,
        Component::Day,
        Component::Hour,
        Component::Minute,
        Component::Second,
    ];

    /// Fields identifying a calendar day.
    pub const DAY: [Component; 4] = [
        Component::Era,
        Component::Year,
        Component::Month,
        Component::Day,
    ];
}

/// Units that can be added to an instant or used to find a containing interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Weekday with the conventional Gregorian numbering, Sunday = 1 through Saturday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GregorianWeekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl GregorianWeekday {
    pub fn number(self) -> i32 {
        self as i32
    }

    pub fn from_number(number: i32) -> Option<Self> {
        match number {
            1 => Some(Self::Sunday),
            2 => Some(Self::Monday),
            3 => Some(Self::Tuesday),
            4 => Some(Self::Wednesday),
            5 => Some(Self::Thursday),
            6 => Some(Self::Friday),
            7 => Some(Self::Saturday),
            _ => None,
        }
    }
}

impl From<Weekday> for GregorianWeekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }
}

impl From<GregorianWeekday> for Weekday {
    fn from(weekday: GregorianWeekday) -> Self {
        match weekday {
            GregorianWeekday::Sunday => Weekday::Sun,
            GregorianWeekday::Monday => Weekday::Mon,
            GregorianWeekday::Tuesday => Weekday::Tue,
            GregorianWeekday::Wednesday => Weekday::Wed,
            GregorianWeekday::Thursday => Weekday::Thu,
            GregorianWeekday::Friday => Weekday::Fri,
            GregorianWeekday::Saturday => Weekday::Sat,
        }
    }
}

/// Occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordinal {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Fifth = 5,
}

impl Ordinal {
    pub fn number(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_numbers_follow_gregorian_convention() {
        assert_eq!(GregorianWeekday::Sunday.number(), 1);
        assert_eq!(GregorianWeekday::Saturday.number(), 7);
        assert_eq!(GregorianWeekday::from_number(6), Some(GregorianWeekday::Friday));
        assert_eq!(GregorianWeekday::from_number(0), None);
        assert_eq!(GregorianWeekday::from_number(8), None);
    }

    #[test]
    fn weekday_converts_to_chrono() {
        for n in 1..=7 {
            let weekday = GregorianWeekday::from_number(n).unwrap();
            let chrono_weekday: Weekday = weekday.into();
            assert_eq!(chrono_weekday.number_from_sunday() as i32, n);
            assert_eq!(GregorianWeekday::from(chrono_weekday), weekday);
        }
    }

    #[test]
    fn get_and_set_address_the_same_field() {
        let mut components = DateComponents::ymd(2021, 1, 26);
        assert_eq!(components.get(Component::Month), Some(1));
        components.set(Component::Month, Some(3));
        components.set(Component::Day, None);
        assert_eq!(components.month, Some(3));
        assert_eq!(components.day, None);
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let json = serde_json::to_string(&DateComponents::year_month(2021, 3)).unwrap();
        assert_eq!(json, r#"{"year":2021,"month":3}"#);
    }

    #[test]
    fn with_time_overlays_clock_fields() {
        let components = DateComponents::ymd(2020, 10, 5).with_time(10, 15, 0);
        assert_eq!(components.hour, Some(10));
        assert_eq!(components.minute, Some(15));
        assert_eq!(components.second, Some(0));
        assert_eq!(components.day, Some(5));
    }
}
