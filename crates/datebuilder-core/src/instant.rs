//! Instants, sentinels and boundary nudges.

use chrono::{DateTime, Duration, Utc};

/// An absolute point in time.
pub type Instant = DateTime<Utc>;

/// Seconds applied inward at every computed unit boundary.
///
/// Interval ends are exclusive midnights of the following unit; the nudge keeps
/// boundary instants attributed to the unit they close.
pub const BOUNDARY_NUDGE_SECS: i64 = 5;

/// 4001-01-01T00:00:00Z
const DISTANT_FUTURE_SECS: i64 = 64_092_211_200;
/// 0001-01-01T00:00:00Z
const DISTANT_PAST_SECS: i64 = -62_135_596_800;

/// Fallback returned by builder paths whose calendar computation failed.
pub fn distant_future() -> Instant {
    DateTime::from_timestamp(DISTANT_FUTURE_SECS, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

pub fn distant_past() -> Instant {
    DateTime::from_timestamp(DISTANT_PAST_SECS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Whether `instant` is (at or beyond) the distant-future sentinel.
pub fn is_distant_future(instant: &Instant) -> bool {
    *instant >= distant_future()
}

/// Move an interval start inward (later).
pub(crate) fn nudge_forward(instant: Instant) -> Instant {
    instant
        .checked_add_signed(Duration::seconds(BOUNDARY_NUDGE_SECS))
        .unwrap_or(instant)
}

/// Move an interval end inward (earlier).
pub(crate) fn nudge_backward(instant: Instant) -> Instant {
    instant
        .checked_sub_signed(Duration::seconds(BOUNDARY_NUDGE_SECS))
        .unwrap_or(instant)
}
