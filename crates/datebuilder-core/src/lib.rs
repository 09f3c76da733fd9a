//! # DateBuilder Core Library
//!
//! Declarative construction of relative dates: "the first Thursday of next
//! month", "the last day of this week", "every day for the next 100 days at
//! 20:00". Builders are plain values that record an anchor and an offset; the
//! calendar is consulted only when a terminal operation asks for an instant or
//! for components.
//!
//! ## Architecture
//!
//! - **Builders**: [`Day`], [`Week`], [`Month`] and [`Year`], navigated with
//!   pure offset and lookup operations
//! - **Terminal values**: [`ResolvedDate`], either an instant or components
//!   still to be reconciled against the calendar
//! - **Calendar**: a chrono/chrono-tz backed [`Calendar`] with locale week
//!   rules, loadable from TOML via [`CalendarSettings`]
//! - **Context**: the per-thread active calendar with scoped overrides
//!   ([`context::with_calendar`] and friends)
//! - **Recurrence**: [`DelayDistribution`] spacing for the `every_*` series
//!
//! ## Example
//!
//! ```
//! use chrono_tz::Tz;
//! use datebuilder_core::{context, exact_month, Calendar, GregorianWeekday, TimeOfDay};
//!
//! let calendar = Calendar::gregorian(Tz::Europe__Moscow, "ru_RU");
//! let date = context::with_calendar(calendar, || {
//!     exact_month(2021, 3)
//!         .adding_months(1)
//!         .first(GregorianWeekday::Thursday)
//!         .at(TimeOfDay::hm(10, 0))
//!         .date()
//! });
//! assert!(date.is_ok());
//! ```

pub mod anchors;
pub mod calendar;
pub mod context;
pub mod day;
pub mod distribution;
pub mod error;
pub mod instant;
pub mod month;
pub mod resolved;
pub mod time_of_day;
pub mod week;
pub mod year;

pub use anchors::*;
pub use calendar::{
    Calendar, CalendarSettings, CalendarSystem, CalendarUnit, Component, DateComponents,
    DateInterval, GregorianWeekday, Locale, Ordinal,
};
pub use day::{Day, Days};
pub use distribution::DelayDistribution;
pub use error::{ConfigError, DateBuilderError, Result, ValidationError};
pub use instant::{distant_future, distant_past, is_distant_future, Instant};
pub use month::{Month, Months};
pub use resolved::{ResolvedDate, ResolvedDates};
pub use time_of_day::TimeOfDay;
pub use week::{Week, Weeks};
pub use year::{Year, Years};
