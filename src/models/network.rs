//! Charging network topology.
//!
//! Owns all stations, keyed by station id, together with a routing index
//! from charger id to the station that declared it. The index lets
//! availability events, which name only a charger, reach the owning
//! charger without searching every station.
//!
//! # Construction Protocol
//! Built once during ingestion: `register_station` / `register_charger`
//! declare the topology, `record_interval` attaches observations. Report
//! generation only reads it.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Charger, ChargerId, Interval, Station, StationId};

/// An availability observation named a charger the topology does not contain.
///
/// The first mention of a charger id under the station declarations
/// establishes its existence; an event for any other id is a data
/// consistency problem in the input, not a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("charger {0} is not part of the network")]
pub struct UnknownCharger(pub ChargerId);

/// The full station/charger topology.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChargingNetwork {
    /// Stations keyed by id. `BTreeMap` keeps iteration in id order.
    stations: BTreeMap<StationId, Station>,
    /// Which station owns each charger id. First declaration wins.
    charger_owner: HashMap<ChargerId, StationId>,
}

impl ChargingNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a station, creating it if this is its first mention.
    pub fn register_station(&mut self, station_id: StationId) {
        self.stations
            .entry(station_id)
            .or_insert_with(|| Station::new(station_id));
    }

    /// Declares a charger under a station.
    ///
    /// Creates the station on first mention. The charger is appended to the
    /// station's charger list; if the charger id was already declared
    /// elsewhere, the earlier declaration keeps receiving its events.
    pub fn register_charger(&mut self, station_id: StationId, charger_id: ChargerId) {
        let station = self
            .stations
            .entry(station_id)
            .or_insert_with(|| Station::new(station_id));
        station.insert_charger(Charger::new(charger_id));
        self.charger_owner.entry(charger_id).or_insert(station_id);
    }

    /// Attaches a reported interval to the charger that owns it.
    pub fn record_interval(
        &mut self,
        charger_id: ChargerId,
        interval: Interval,
    ) -> Result<(), UnknownCharger> {
        let station_id = *self
            .charger_owner
            .get(&charger_id)
            .ok_or(UnknownCharger(charger_id))?;
        // The index is only ever written alongside the stations map, so
        // both lookups below succeed whenever the index lookup did.
        let charger = self
            .stations
            .get_mut(&station_id)
            .and_then(|station| station.charger_mut(charger_id))
            .ok_or(UnknownCharger(charger_id))?;
        charger.insert_interval(interval);
        Ok(())
    }

    /// Looks up a station by id.
    pub fn station(&self, station_id: StationId) -> Option<&Station> {
        self.stations.get(&station_id)
    }

    /// Iterates stations in ascending id order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
