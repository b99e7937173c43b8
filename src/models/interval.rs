//! Availability interval model.
//!
//! An interval is a single charger observation: a time range and whether
//! the charger was reported available during it. Intervals from different
//! chargers may overlap or contradict each other; consolidation resolves
//! that downstream.
//!
//! # Time Model
//! All times are u64 nanoseconds relative to the reporting epoch.
//! The data feed defines what the epoch means.

use serde::{Deserialize, Deserializer, Serialize};

/// Timestamp in nanoseconds.
pub type Nanos = u64;

/// A reported availability observation over `[start, end]`.
///
/// Construction enforces `start <= end`: an inverted range collapses to a
/// zero-length interval at `start`. Instances are immutable afterwards.
///
/// The derived ordering is total: by `start`, then `end`, then `available`
/// (unavailable sorts before available).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Interval {
    /// Interval start (ns, inclusive).
    start: Nanos,
    /// Interval end (ns).
    end: Nanos,
    /// Whether the charger reported itself available.
    available: bool,
}

impl Interval {
    /// Creates a new interval, collapsing `start > end` to `end = start`.
    pub fn new(start: Nanos, end: Nanos, available: bool) -> Self {
        let end = if start > end { start } else { end };
        Self {
            start,
            end,
            available,
        }
    }

    /// Interval start (ns).
    #[inline]
    pub fn start(&self) -> Nanos {
        self.start
    }

    /// Interval end (ns).
    #[inline]
    pub fn end(&self) -> Nanos {
        self.end
    }

    /// Whether the charger reported itself available.
    #[inline]
    pub fn available(&self) -> bool {
        self.available
    }

    /// Duration of this interval (ns).
    #[inline]
    pub fn duration(&self) -> Nanos {
        self.end - self.start
    }

    /// Whether this interval is zero-length.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

// Deserialization routes through `new` so the start <= end invariant
// holds for intervals from any source.
impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: Nanos,
            end: Nanos,
            available: bool,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Interval::new(raw.start, raw.end, raw.available))
    }
}
