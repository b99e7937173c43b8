//! Charger model.
//!
//! A charger is an identified collection of availability intervals, in the
//! order they were reported. Identity lies in the charger id alone.

use serde::{Deserialize, Serialize};

use super::Interval;

/// Charger identifier (32-bit unsigned).
pub type ChargerId = u32;

/// A single charger and the intervals reported for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charger {
    /// Charger identifier. Two chargers are equal iff their ids match.
    pub id: ChargerId,
    /// Reported intervals, in insertion order.
    pub intervals: Vec<Interval>,
}

impl Charger {
    /// Creates a charger with no reported intervals.
    pub fn new(id: ChargerId) -> Self {
        Self {
            id,
            intervals: Vec::new(),
        }
    }

    /// Appends a reported interval.
    pub fn insert_interval(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }
}

impl PartialEq for Charger {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Charger {}
