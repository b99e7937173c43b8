//! Uptime report model.
//!
//! One entry per station, carrying the computed uptime fraction. The
//! report owns its entries outright; once built it is independent of the
//! topology it was computed from.
//!
//! # Formatting
//! An entry renders as the station id, a single space, and the uptime as
//! a truncated integer percentage (12.79% renders as `12`). Entries are
//! newline-separated between entries only: no trailing newline, and an
//! empty report renders as nothing at all.

use std::fmt;

use serde::Serialize;

use super::StationId;

/// One line of the uptime report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportEntry {
    /// Station this entry is about.
    pub station_id: StationId,
    /// Fraction of the observed span during which any charger at the
    /// station was available. In `[0, 1]` for well-formed input.
    pub uptime_fraction: f64,
}

impl ReportEntry {
    /// Creates a report entry.
    pub fn new(station_id: StationId, uptime_fraction: f64) -> Self {
        Self {
            station_id,
            uptime_fraction,
        }
    }

    /// Uptime as an integer percentage, truncated toward zero.
    #[inline]
    pub fn percentage(&self) -> u32 {
        (self.uptime_fraction * 100.0) as u32
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.station_id, self.percentage())
    }
}

/// The full per-station uptime report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// Sorts entries ascending by station id, then by uptime fraction.
    ///
    /// The sort is stable, so entries tied on both keys keep their
    /// insertion order and the report is reproducible.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| {
            a.station_id
                .cmp(&b.station_id)
                .then_with(|| a.uptime_fraction.total_cmp(&b.uptime_fraction))
        });
    }

    /// The entries, in their current order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_renders_truncated_percentage() {
        assert_eq!(ReportEntry::new(0, 0.125).to_string(), "0 12");
        assert_eq!(ReportEntry::new(0, 0.1279).to_string(), "0 12");
        assert_eq!(ReportEntry::new(3, 1.0).to_string(), "3 100");
        assert_eq!(ReportEntry::new(9, 0.0).to_string(), "9 0");
    }

    #[test]
    fn test_one_third_truncates_to_33() {
        let entry = ReportEntry::new(1, 100.0 / 300.0);
        assert_eq!(entry.percentage(), 33);
    }

    #[test]
    fn test_sort_by_id_regardless_of_insertion_order() {
        let mut report = Report::new();
        report.push(ReportEntry::new(0, 0.125));
        report.push(ReportEntry::new(7, 0.125));
        report.push(ReportEntry::new(3, 0.0275));
        report.sort();
        let ids: Vec<u32> = report.entries().iter().map(|e| e.station_id).collect();
        assert_eq!(ids, vec![0, 3, 7]);
    }

    #[test]
    fn test_sort_breaks_id_ties_by_fraction() {
        let mut report = Report::new();
        report.push(ReportEntry::new(5, 0.322));
        report.push(ReportEntry::new(5, 0.265));
        report.push(ReportEntry::new(2, 0.3215));
        report.sort();
        assert_eq!(report.entries()[0], ReportEntry::new(2, 0.3215));
        assert_eq!(report.entries()[1], ReportEntry::new(5, 0.265));
        assert_eq!(report.entries()[2], ReportEntry::new(5, 0.322));
    }

    #[test]
    fn test_display_newline_between_entries_only() {
        let mut report = Report::new();
        report.push(ReportEntry::new(0, 1.0));
        report.push(ReportEntry::new(1, 0.5));
        report.push(ReportEntry::new(2, 0.0));
        assert_eq!(report.to_string(), "0 100\n1 50\n2 0");
    }

    #[test]
    fn test_empty_report_renders_nothing() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn test_single_entry_no_trailing_newline() {
        let mut report = Report::new();
        report.push(ReportEntry::new(4, 0.75));
        assert_eq!(report.to_string(), "4 75");
    }

    #[test]
    fn test_entry_serializes() {
        let entry = ReportEntry::new(1, 0.5);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"station_id":1,"uptime_fraction":0.5}"#);
    }
}
