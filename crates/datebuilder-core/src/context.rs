//! The active calendar.
//!
//! Every builder consults the active calendar when it is finalized, never when
//! it is constructed or offset. The active calendar is stored per thread; a
//! fresh thread tracks the platform default ([`Calendar::system`]) and sees
//! changes to it without a new [`set_calendar`] call.
//!
//! Scoped overrides hand back a [`CalendarGuard`]. Dropping the guard restores
//! the state captured when it was created, so nested scopes unwind in order
//! and a panicking body still restores its caller's calendar.

use std::cell::RefCell;

use chrono_tz::Tz;

use crate::calendar::{Calendar, Locale};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
enum ActiveCalendar {
    /// Follow [`Calendar::system`] on every read
    System,
    Fixed(Calendar),
}

thread_local! {
    static ACTIVE: RefCell<ActiveCalendar> = const { RefCell::new(ActiveCalendar::System) };
}

/// The calendar builders on this thread finalize against.
pub fn calendar() -> Calendar {
    match ACTIVE.with(|active| active.borrow().clone()) {
        ActiveCalendar::System => Calendar::system(),
        ActiveCalendar::Fixed(calendar) => calendar,
    }
}

/// Replace the active calendar.
///
/// A calendar equal to the current platform default switches back to tracking
/// the platform default.
pub fn set_calendar(calendar: Calendar) {
    let next = if calendar == Calendar::system() {
        ActiveCalendar::System
    } else {
        ActiveCalendar::Fixed(calendar)
    };
    tracing::debug!(tracks_system = next == ActiveCalendar::System, "active calendar replaced");
    replace(next);
}

/// Parse calendar settings from TOML and make the result active.
///
/// The active calendar is left untouched when the settings are invalid.
pub fn set_calendar_from_toml(content: &str) -> Result<()> {
    set_calendar(Calendar::from_toml_str(content)?);
    Ok(())
}

/// Track the platform default again.
pub fn reset_calendar() {
    replace(ActiveCalendar::System);
}

fn replace(next: ActiveCalendar) -> ActiveCalendar {
    ACTIVE.with(|active| std::mem::replace(&mut *active.borrow_mut(), next))
}

/// Restores the calendar that was active when it was created.
#[must_use = "the override ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct CalendarGuard {
    previous: Option<ActiveCalendar>,
}

impl Drop for CalendarGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            replace(previous);
            tracing::debug!("calendar override ended");
        }
    }
}

/// Make `calendar` active until the returned guard is dropped.
pub fn override_calendar(calendar: Calendar) -> CalendarGuard {
    tracing::debug!(
        time_zone = %calendar.time_zone(),
        locale = %calendar.locale(),
        "calendar override started"
    );
    CalendarGuard {
        previous: Some(replace(ActiveCalendar::Fixed(calendar))),
    }
}

/// Run `body` with `calendar` active.
pub fn with_calendar<T>(calendar: Calendar, body: impl FnOnce() -> T) -> T {
    let _guard = override_calendar(calendar);
    body()
}

/// Run `body` with the active calendar moved to `time_zone`.
pub fn with_time_zone<T>(time_zone: Tz, body: impl FnOnce() -> T) -> T {
    with_calendar(calendar().with_time_zone(time_zone), body)
}

/// Run `body` with the active calendar using `locale`.
pub fn with_locale<T>(locale: impl Into<Locale>, body: impl FnOnce() -> T) -> T {
    with_calendar(calendar().with_locale(locale), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use chrono::Weekday;

    fn fixed() -> Calendar {
        Calendar::gregorian(Tz::Asia__Tokyo, "ja_JP")
    }

    #[test]
    fn fresh_thread_tracks_system() {
        std::thread::spawn(|| assert_eq!(calendar(), Calendar::system()))
            .join()
            .unwrap();
    }

    #[test]
    fn scope_restores_previous() {
        set_calendar(fixed());
        with_calendar(fixed().with_first_weekday(Weekday::Wed), || {
            assert_eq!(calendar().first_weekday(), Weekday::Wed);
        });
        assert_eq!(calendar(), fixed());
        reset_calendar();
    }

    #[test]
    fn nested_scopes_unwind_in_order() {
        set_calendar(fixed());
        with_time_zone(Tz::Europe__Moscow, || {
            with_locale("he_IL", || {
                assert_eq!(calendar().time_zone(), Tz::Europe__Moscow);
                assert_eq!(calendar().locale(), &Locale::new("he_IL"));
            });
            assert_eq!(calendar().locale(), &Locale::new("ja_JP"));
        });
        assert_eq!(calendar(), fixed());
        reset_calendar();
    }

    #[test]
    fn reassignment_inside_scope_is_undone() {
        set_calendar(fixed());
        with_time_zone(Tz::UTC, || {
            set_calendar(Calendar::iso8601(Tz::America__Cancun));
        });
        assert_eq!(calendar(), fixed());
        reset_calendar();
    }

    #[test]
    fn panicking_body_still_restores() {
        set_calendar(fixed());
        let result = std::panic::catch_unwind(|| {
            with_time_zone(Tz::UTC, || panic!("boom"));
        });
        assert!(result.is_err());
        assert_eq!(calendar(), fixed());
        reset_calendar();
    }

    #[test]
    fn setting_system_value_tracks_system() {
        set_calendar(Calendar::system());
        ACTIVE.with(|active| assert_eq!(*active.borrow(), ActiveCalendar::System));
    }

    #[test]
    fn scope_over_system_returns_to_tracking() {
        reset_calendar();
        with_calendar(fixed(), || {});
        ACTIVE.with(|active| assert_eq!(*active.borrow(), ActiveCalendar::System));
    }

    #[test]
    fn toml_settings_become_active() {
        set_calendar_from_toml("time_zone = \"Asia/Tokyo\"\nlocale = \"ja_JP\"\n").unwrap();
        assert_eq!(calendar(), fixed());
        reset_calendar();
    }

    #[test]
    fn invalid_toml_settings_leave_calendar_alone() {
        set_calendar(fixed());
        let err = set_calendar_from_toml("time_zone = \"Mars/Olympus\"").unwrap_err();
        assert_eq!(
            err,
            crate::error::DateBuilderError::Config(ConfigError::UnknownTimeZone("Mars/Olympus".into()))
        );
        assert_eq!(calendar(), fixed());
        reset_calendar();
    }

    #[test]
    fn scoped_value_is_returned() {
        let zone = with_time_zone(Tz::Europe__Moscow, || calendar().time_zone());
        assert_eq!(zone, Tz::Europe__Moscow);
    }
}
