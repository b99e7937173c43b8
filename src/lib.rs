//! Charging-network uptime reporting.
//!
//! Computes, for each charging station in a network, the fraction of time
//! at least one of its chargers was reported available, from a log of
//! possibly-overlapping availability intervals reported independently per
//! charger. The output is a deterministically ordered, deterministically
//! formatted per-station report for operations use.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Interval`, `Charger`, `Station`,
//!   `ChargingNetwork`, `Report`, `ReportEntry`
//! - **`ingest`**: Line-oriented data-file reader that builds the
//!   topology and attaches reported intervals
//! - **`uptime`**: Interval consolidation, uptime calculation, and
//!   report assembly
//!
//! # Pipeline
//!
//! ```
//! use chargewatch::{ingest, uptime};
//!
//! let data = "\
//! [Stations]
//! 0 1001
//!
//! [Charger Availability Reports]
//! 1001 0 50000 true
//! 1001 50000 100000 false
//! ";
//!
//! let network = ingest::read(data.as_bytes())?;
//! let report = uptime::build_report(&network);
//! assert_eq!(report.to_string(), "0 50");
//! # Ok::<(), chargewatch::ingest::IngestError>(())
//! ```
//!
//! The whole computation is synchronous and single-threaded: ingestion
//! fully precedes reporting, and the report owns its entries
//! independently of the source topology.

pub mod ingest;
pub mod models;
pub mod uptime;
