//! Station uptime computation.
//!
//! Turns the reported per-charger availability intervals of each station
//! into a single uptime fraction, and assembles the sorted per-station
//! report.
//!
//! # Pipeline
//!
//! 1. **Consolidation**: merge every charger's available intervals into a
//!    non-overlapping set and find the overall observed span.
//! 2. **Uptime**: covered duration divided by span, with degenerate
//!    stations defined as 0.0.
//! 3. **Assembly**: one entry per station, sorted ascending by station id
//!    then fraction.

mod builder;
mod consolidate;

pub use builder::build_report;
pub use consolidate::{consolidate, merge, Consolidation};
