//! Wall-clock timestamps for object lifecycles.
//!
//! Timestamps are naive local date-times truncated to microseconds, so that
//! rendering to ISO-8601 and parsing back is exact:
//! - `2024-05-01T12:30:00.123456` when the fraction is non-zero
//! - `2024-05-01T12:30:00` when it is zero

use chrono::{Local, NaiveDateTime, SubsecRound, TimeDelta, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

const ISO_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const ISO_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const ISO_PARSE: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A local timestamp with microsecond precision.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Creates a timestamp at the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_naive(Local::now().naive_local())
    }

    /// Creates a timestamp from a naive date-time, dropping sub-microsecond digits.
    #[must_use]
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt.trunc_subsecs(6))
    }

    /// Returns the underlying date-time.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns the microsecond component.
    #[must_use]
    pub fn microsecond(&self) -> u32 {
        self.0.nanosecond() / 1_000
    }

    /// Generates the next timestamp, ensuring monotonicity.
    ///
    /// Returns the current time if it is later than `self`, otherwise `self`
    /// plus one microsecond.
    #[must_use]
    pub fn tick(&self) -> Self {
        let now = Self::now();
        if now > *self {
            now
        } else {
            Self(self.0 + TimeDelta::microseconds(1))
        }
    }

    /// Parses an ISO-8601 date-time (`YYYY-MM-DDTHH:MM:SS[.ffffff]`).
    pub fn parse(s: &str) -> crate::Result<Self> {
        NaiveDateTime::parse_from_str(s, ISO_PARSE)
            .map(Self::from_naive)
            .map_err(|e| crate::Error::InvalidTimestamp(format!("{s:?}: {e}")))
    }

    /// Renders the timestamp as ISO-8601, omitting a zero fraction.
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        let format = if self.microsecond() == 0 {
            ISO_SECONDS
        } else {
            ISO_MICROS
        };
        self.0.format(format).to_string()
    }

    /// Returns true if this timestamp is before the other.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns true if this timestamp is after the other.
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.to_iso_string())
    }
}

impl FromStr for Timestamp {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Sub for Timestamp {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> TimeDelta {
        self.0 - rhs.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
