//! Charging-network domain models.
//!
//! Core data types for the station/charger topology and the uptime report.
//! The topology is an owning tree: a `ChargingNetwork` owns `Station`s,
//! which own `Charger`s, which own `Interval`s. Everything is built once
//! during ingestion and read-only afterwards.
//!
//! | Type | Role |
//! |------|------|
//! | `Interval` | One availability observation (start, end, available) |
//! | `Charger` | Identified list of intervals as reported |
//! | `Station` | Identified list of chargers |
//! | `ChargingNetwork` | All stations, keyed by id, plus charger routing |
//! | `Report`, `ReportEntry` | Per-station uptime output |

mod charger;
mod interval;
mod network;
mod report;
mod station;

pub use charger::{Charger, ChargerId};
pub use interval::{Interval, Nanos};
pub use network::{ChargingNetwork, UnknownCharger};
pub use report::{Report, ReportEntry};
pub use station::{Station, StationId};
