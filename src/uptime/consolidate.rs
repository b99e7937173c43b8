//! Interval consolidation.
//!
//! Collapses a station's reported intervals, across all of its chargers,
//! into (a) the overall observed time span and (b) a non-overlapping set
//! of intervals covering every moment at least one charger was available.
//! The non-overlapping set is duration-summable: adding up its durations
//! gives the station's total available time with nothing counted twice.
//!
//! # Algorithm
//!
//! One scan collects the span bounds over all intervals (available or
//! not) and gathers the available ones into a working list. The list is
//! sorted by the total interval order (start, end, available) and merged
//! left to right against the last interval kept so far. Sorting first is
//! what makes the single pass sufficient: once ordered by start, no
//! pending interval can begin before anything already finalized, so each
//! candidate only ever interacts with the most recently kept interval.

use tracing::debug;

use crate::models::{Interval, Nanos, Station};

/// Consolidated availability data for one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consolidation {
    /// Non-overlapping intervals during which any charger was available.
    pub merged: Vec<Interval>,
    /// Smallest start over all reported intervals. `u64::MAX` when the
    /// station has no intervals at all.
    pub earliest_start: Nanos,
    /// Largest end over all reported intervals. `0` when the station has
    /// no intervals at all.
    pub latest_end: Nanos,
}

impl Consolidation {
    /// The observed span `latest_end - earliest_start`.
    ///
    /// Saturating: the no-interval sentinel state (`earliest_start`
    /// greater than `latest_end`) yields 0 rather than wrapping.
    #[inline]
    pub fn span(&self) -> Nanos {
        self.latest_end.saturating_sub(self.earliest_start)
    }

    /// Total available duration, summed over the merged set.
    pub fn covered(&self) -> Nanos {
        self.merged.iter().map(|i| i.duration()).sum()
    }

    /// Fraction of the observed span during which any charger was
    /// available.
    ///
    /// A station with no intervals, or whose observations span zero time,
    /// has a defined uptime of 0.0; the division only happens against a
    /// nonzero span, so the result is always finite.
    pub fn uptime_fraction(&self) -> f64 {
        let span = self.span();
        if span == 0 {
            return 0.0;
        }
        self.covered() as f64 / span as f64
    }
}

/// Consolidates all reported intervals of a station.
///
/// Unavailability reports are excluded from the merged set but still
/// widen the observed span: a charger reporting downtime is still a
/// charger reporting.
pub fn consolidate(station: &Station) -> Consolidation {
    let mut earliest_start = Nanos::MAX;
    let mut latest_end: Nanos = 0;
    let mut available = Vec::new();

    for charger in &station.chargers {
        for interval in &charger.intervals {
            earliest_start = earliest_start.min(interval.start());
            latest_end = latest_end.max(interval.end());
            if interval.available() {
                available.push(*interval);
            }
        }
    }

    let merged = merge(available);
    debug!(
        station = station.id,
        merged = merged.len(),
        earliest_start,
        latest_end,
        "consolidated station intervals"
    );

    Consolidation {
        merged,
        earliest_start,
        latest_end,
    }
}

/// Merges intervals into a non-overlapping set covering the same time.
///
/// Sorts the input by (start, end, available) and scans once, comparing
/// each candidate `b` against the last kept interval `a`:
///
/// - `a` ends at or before `b` starts: keep `b` as is.
/// - `b` lies entirely within `a`: drop it, it adds no coverage.
/// - otherwise `b` extends past `a` (including the equal-start case, and
///   candidates starting before a previously clipped `a`): keep only the
///   part after `a`, unless clipping leaves nothing.
///
/// Merging an already non-overlapping sorted set is a no-op.
pub fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for b in intervals {
        let Some(&a) = merged.last() else {
            merged.push(b);
            continue;
        };
        if a.end() <= b.start() {
            merged.push(b);
        } else if b.start() >= a.start() && a.end() >= b.end() {
            // contained in `a`: no new coverage
        } else {
            let clipped = Interval::new(a.end(), b.end(), b.available());
            if !clipped.is_degenerate() {
                merged.push(clipped);
            }
        }
    }
    merged
}
