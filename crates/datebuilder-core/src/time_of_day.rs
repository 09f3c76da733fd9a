//! Wall-clock time of day, independent of any calendar.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::calendar::Component;
use crate::context;
use crate::error::ValidationError;
use crate::instant::Instant;

/// Hour, minute and second. Ordered by hour, then minute, then second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub fn hm(hour: u32, minute: u32) -> Self {
        Self::new(hour, minute, 0)
    }

    /// Range-checked constructor.
    pub fn checked(hour: u32, minute: u32, second: u32) -> Result<Self, ValidationError> {
        let checks = [("hour", hour, 23), ("minute", minute, 59), ("second", second, 59)];
        for (field, value, max) in checks {
            if value > max {
                return Err(ValidationError::InvalidValue {
                    field: field.into(),
                    message: format!("{value} exceeds {max}"),
                });
            }
        }
        Ok(Self::new(hour, minute, second))
    }

    /// Time of day of `instant` under the active calendar.
    pub fn of(instant: &Instant) -> Self {
        let components = context::calendar().components(
            &[Component::Hour, Component::Minute, Component::Second],
            instant,
        );
        let field = |value: Option<i32>| value.and_then(|v| u32::try_from(v).ok()).unwrap_or(0);
        Self::new(
            field(components.hour),
            field(components.minute),
            field(components.second),
        )
    }

    pub fn seconds_from_midnight(&self) -> u32 {
        self.hour
            .saturating_mul(3600)
            .saturating_add(self.minute.saturating_mul(60))
            .saturating_add(self.second)
    }

    fn from_seconds_from_midnight(seconds: u32) -> Self {
        Self::new(seconds / 3600, seconds % 3600 / 60, seconds % 60)
    }

    /// A uniformly random time in `[lower, upper)`.
    ///
    /// Both bounds must be valid times and `lower` must come strictly before
    /// `upper`.
    pub fn random_between(lower: TimeOfDay, upper: TimeOfDay) -> Result<Self, ValidationError> {
        let lower = Self::checked(lower.hour, lower.minute, lower.second)?;
        let upper = Self::checked(upper.hour, upper.minute, upper.second)?;
        if lower >= upper {
            return Err(ValidationError::InvalidTimeRange {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        let seconds = rand::thread_rng()
            .gen_range(lower.seconds_from_midnight()..upper.seconds_from_midnight());
        Ok(Self::from_seconds_from_midnight(seconds))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
