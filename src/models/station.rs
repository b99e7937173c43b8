//! Station model.
//!
//! A station is an identified collection of chargers. Identity lies in the
//! station id alone. Stations own their chargers outright; the topology is
//! a plain tree with no shared references.

use serde::{Deserialize, Serialize};

use super::{Charger, ChargerId};

/// Station identifier (32-bit unsigned).
pub type StationId = u32;

/// A charging station and its chargers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Station identifier. Two stations are equal iff their ids match.
    pub id: StationId,
    /// Chargers installed at this station, in declaration order.
    pub chargers: Vec<Charger>,
}

impl Station {
    /// Creates a station with no chargers.
    pub fn new(id: StationId) -> Self {
        Self {
            id,
            chargers: Vec::new(),
        }
    }

    /// Appends a charger.
    pub fn insert_charger(&mut self, charger: Charger) {
        self.chargers.push(charger);
    }

    /// Finds a charger by id (the first declared one, if duplicated).
    pub fn charger_mut(&mut self, id: ChargerId) -> Option<&mut Charger> {
        self.chargers.iter_mut().find(|c| c.id == id)
    }

    /// Total number of intervals reported across all chargers.
    pub fn interval_count(&self) -> usize {
        self.chargers.iter().map(|c| c.intervals.len()).sum()
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}
