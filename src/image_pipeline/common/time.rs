//! Local time base and robot clock skew correction.

use std::ops::Add;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A point in time in the local clock's time base, at nanosecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    nanos: i64,
}

impl Timestamp {
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Builds a timestamp from a seconds/nanoseconds pair as carried on the wire.
    /// Values outside the representable range saturate.
    pub fn from_secs_nanos(seconds: i64, nanos: i32) -> Self {
        Self {
            nanos: seconds
                .saturating_mul(NANOS_PER_SEC)
                .saturating_add(i64::from(nanos)),
        }
    }

    pub const fn as_nanos(&self) -> i64 {
        self.nanos
    }

    /// Whole seconds, rounded towards negative infinity.
    pub const fn sec(&self) -> i64 {
        self.nanos.div_euclid(NANOS_PER_SEC)
    }

    /// Nanoseconds past [`Timestamp::sec`], always in `0..1_000_000_000`.
    pub const fn nanosec(&self) -> u32 {
        self.nanos.rem_euclid(NANOS_PER_SEC) as u32
    }
}

/// Signed offset of the robot clock relative to the local clock (robot - local).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockSkew {
    nanos: i64,
}

impl ClockSkew {
    pub const ZERO: ClockSkew = ClockSkew { nanos: 0 };

    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self {
            nanos: millis * 1_000_000,
        }
    }

    pub fn from_secs_nanos(seconds: i64, nanos: i32) -> Self {
        Self {
            nanos: seconds
                .saturating_mul(NANOS_PER_SEC)
                .saturating_add(i64::from(nanos)),
        }
    }

    pub const fn as_nanos(&self) -> i64 {
        self.nanos
    }
}

/// Moves a robot-clock timestamp into the local time base.
///
/// The skew is `robot - local`, so the local time is `timestamp - skew`. The
/// arithmetic wraps rather than saturates so that adding the skew back always
/// recovers the original timestamp.
pub fn apply_clock_skew(timestamp: Timestamp, skew: ClockSkew) -> Timestamp {
    Timestamp::from_nanos(timestamp.nanos.wrapping_sub(skew.nanos))
}

impl Add<ClockSkew> for Timestamp {
    type Output = Timestamp;

    fn add(self, skew: ClockSkew) -> Timestamp {
        Timestamp::from_nanos(self.nanos.wrapping_add(skew.nanos))
    }
}
