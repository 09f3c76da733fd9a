//! Shared helpers for integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use datebuilder_core::{Calendar, Day, Instant};

/// Install a test subscriber once; `RUST_LOG` controls the output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn utc() -> Calendar {
    Calendar::gregorian(Tz::UTC, "en_US")
}

pub fn utc_at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Instant {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second).unwrap()
}

/// `(year, month, day)` of a day under the active calendar.
pub fn ymd(day: &Day) -> (i32, i32, i32) {
    let components = day.date_components();
    (
        components.year.unwrap_or_default(),
        components.month.unwrap_or_default(),
        components.day.unwrap_or_default(),
    )
}
