//! Input ingestion.
//!
//! Reads the line-oriented network data file and builds the
//! station/charger topology with its reported intervals.
//!
//! # Input Format
//!
//! Two sections, introduced by header lines:
//!
//! ```text
//! [Stations]
//! <stationID> <chargerID>...
//!
//! [Charger Availability Reports]
//! <chargerID> <startTime> <endTime> <true|false>
//! ```
//!
//! A charger's first mention under `[Stations]` establishes its existence
//! and owning station. Availability times are u64 nanoseconds; an
//! inverted range is normalized to a zero-length event. The availability
//! field is the literal `true` for available, anything else counts as
//! unavailable. Blank lines are ignored, as are lines before the first
//! header. Lines with missing or non-numeric required fields are
//! rejected with their line number; tokens past the required fields are
//! ignored.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, trace};

use crate::models::{ChargerId, ChargingNetwork, Interval, Nanos, StationId};

/// Header introducing the station topology section.
const STATIONS_HEADER: &str = "[Stations]";
/// Header introducing the availability events section.
const AVAILABILITY_HEADER: &str = "[Charger Availability Reports]";

/// Failures while reading the network data file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input file could not be opened.
    #[error("could not open {path}: {source}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The input stream failed mid-read.
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
    /// A line is missing a required field or carries one that does not
    /// parse.
    #[error("line {line}: {reason} in {content:?}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        reason: String,
        /// The offending line.
        content: String,
    },
    /// An availability event names a charger never declared under
    /// `[Stations]`.
    #[error("line {line}: charger {charger_id} referenced before declaration")]
    UnknownCharger {
        /// 1-based line number.
        line: usize,
        /// The undeclared charger id.
        charger_id: ChargerId,
    },
}

/// Which section of the file the reader is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Before any header; content lines are ignored.
    None,
    /// Under `[Stations]`.
    Stations,
    /// Under `[Charger Availability Reports]`.
    Availability,
}

/// Reads a network data file from disk.
pub fn read_file(path: impl AsRef<Path>) -> Result<ChargingNetwork, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read(BufReader::new(file))
}

/// Reads network data from any buffered source.
pub fn read(reader: impl BufRead) -> Result<ChargingNetwork, IngestError> {
    let mut network = ChargingNetwork::new();
    let mut section = Section::None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let content = line.trim();

        if content == STATIONS_HEADER {
            section = Section::Stations;
        } else if content == AVAILABILITY_HEADER {
            section = Section::Availability;
        } else if content.is_empty() {
            // skip blank lines
        } else {
            match section {
                Section::None => {
                    trace!(line = number, "ignoring line outside any section");
                }
                Section::Stations => parse_station_line(content, number, &mut network)?,
                Section::Availability => parse_availability_line(content, number, &mut network)?,
            }
        }
    }

    debug!(stations = network.len(), "network ingested");
    Ok(network)
}

/// Parses `stationID chargerID...` and registers the declarations.
fn parse_station_line(
    content: &str,
    line: usize,
    network: &mut ChargingNetwork,
) -> Result<(), IngestError> {
    let mut tokens = content.split_whitespace();
    let station_id: StationId = parse_field(tokens.next(), "station id", line, content)?;
    let charger_ids: Vec<ChargerId> = tokens
        .map(|token| parse_field(Some(token), "charger id", line, content))
        .collect::<Result<_, _>>()?;

    // A station line with no chargers still declares the station.
    network.register_station(station_id);
    for charger_id in charger_ids {
        network.register_charger(station_id, charger_id);
    }
    trace!(line, station = station_id, "station declared");
    Ok(())
}

/// Parses `chargerID startTime endTime availableText` and records the
/// event on the owning charger.
fn parse_availability_line(
    content: &str,
    line: usize,
    network: &mut ChargingNetwork,
) -> Result<(), IngestError> {
    let mut tokens = content.split_whitespace();
    let charger_id: ChargerId = parse_field(tokens.next(), "charger id", line, content)?;
    let start: Nanos = parse_field(tokens.next(), "start time", line, content)?;
    let end: Nanos = parse_field(tokens.next(), "end time", line, content)?;
    let available_text = tokens.next().ok_or_else(|| IngestError::MalformedLine {
        line,
        reason: "missing availability".to_string(),
        content: content.to_string(),
    })?;
    let available = available_text == "true";

    let interval = Interval::new(start, end, available);
    network
        .record_interval(charger_id, interval)
        .map_err(|unknown| IngestError::UnknownCharger {
            line,
            charger_id: unknown.0,
        })
}

/// Parses one whitespace-separated field, rejecting absent or malformed
/// values with the line context.
fn parse_field<T>(
    token: Option<&str>,
    field: &str,
    line: usize,
    content: &str,
) -> Result<T, IngestError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let token = token.ok_or_else(|| IngestError::MalformedLine {
        line,
        reason: format!("missing {field}"),
        content: content.to_string(),
    })?;
    token.parse().map_err(|err| IngestError::MalformedLine {
        line,
        reason: format!("invalid {field} {token:?}: {err}"),
        content: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uptime::build_report;
    use std::io::Write;

    const SAMPLE: &str = "\
[Stations]
0 1001 1002
1 1003
2 1004

[Charger Availability Reports]
1001 0 50000 true
1001 50000 100000 true
1002 50000 100000 true
1003 25000 75000 false
1004 0 50000 true
1004 100000 200000 true
";

    fn read_str(input: &str) -> Result<ChargingNetwork, IngestError> {
        read(input.as_bytes())
    }

    #[test]
    fn test_sample_topology() {
        let network = read_str(SAMPLE).unwrap();
        assert_eq!(network.len(), 3);
        assert_eq!(network.station(0).unwrap().chargers.len(), 2);
        assert_eq!(network.station(0).unwrap().interval_count(), 3);
        assert_eq!(network.station(1).unwrap().interval_count(), 1);
        assert_eq!(network.station(2).unwrap().interval_count(), 2);
    }

    #[test]
    fn test_sample_end_to_end_report() {
        let network = read_str(SAMPLE).unwrap();
        let report = build_report(&network);
        assert_eq!(report.to_string(), "0 100\n1 0\n2 75");
    }

    #[test]
    fn test_non_true_availability_is_false() {
        let network = read_str(
            "[Stations]\n0 1\n[Charger Availability Reports]\n1 0 10 false\n1 10 20 TRUE\n",
        )
        .unwrap();
        let station = network.station(0).unwrap();
        assert!(station.chargers[0].intervals.iter().all(|i| !i.available()));
    }

    #[test]
    fn test_inverted_event_normalized() {
        let network =
            read_str("[Stations]\n0 1\n[Charger Availability Reports]\n1 500 200 true\n").unwrap();
        let interval = network.station(0).unwrap().chargers[0].intervals[0];
        assert_eq!(interval.start(), 500);
        assert_eq!(interval.end(), 500);
    }

    #[test]
    fn test_blank_lines_and_preamble_ignored() {
        let network = read_str(
            "garbage before any header\n\n[Stations]\n\n0 1\n\n[Charger Availability Reports]\n\n1 0 10 true\n\n",
        )
        .unwrap();
        assert_eq!(network.len(), 1);
        assert_eq!(network.station(0).unwrap().interval_count(), 1);
    }

    #[test]
    fn test_zero_charger_station_registered() {
        let network = read_str("[Stations]\n5\n").unwrap();
        assert_eq!(network.len(), 1);
        assert!(network.station(5).unwrap().chargers.is_empty());
    }

    #[test]
    fn test_repeated_station_line_appends() {
        let network = read_str("[Stations]\n0 1\n0 2\n").unwrap();
        assert_eq!(network.len(), 1);
        assert_eq!(network.station(0).unwrap().chargers.len(), 2);
    }

    #[test]
    fn test_unknown_charger_rejected_with_line() {
        let err = read_str("[Stations]\n0 1\n[Charger Availability Reports]\n9 0 10 true\n")
            .unwrap_err();
        match err {
            IngestError::UnknownCharger { line, charger_id } => {
                assert_eq!(line, 4);
                assert_eq!(charger_id, 9);
            }
            other => panic!("expected UnknownCharger, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_station_id_rejected() {
        let err = read_str("[Stations]\nabc 1\n").unwrap_err();
        assert!(matches!(err, IngestError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_malformed_charger_id_rejected() {
        let err = read_str("[Stations]\n0 xyz\n").unwrap_err();
        assert!(matches!(err, IngestError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_missing_availability_field_rejected() {
        let err =
            read_str("[Stations]\n0 1\n[Charger Availability Reports]\n1 0 10\n").unwrap_err();
        match err {
            IngestError::MalformedLine { line, reason, .. } => {
                assert_eq!(line, 4);
                assert!(reason.contains("availability"));
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_time_rejected() {
        let err =
            read_str("[Stations]\n0 1\n[Charger Availability Reports]\n1 -5 10 true\n")
                .unwrap_err();
        assert!(matches!(err, IngestError::MalformedLine { .. }));
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let network = read_str(
            "[Stations]\n0 1\n[Charger Availability Reports]\n1 0 10 true trailing junk\n",
        )
        .unwrap();
        assert_eq!(network.station(0).unwrap().interval_count(), 1);
    }

    #[test]
    fn test_empty_input_empty_network() {
        let network = read_str("").unwrap();
        assert!(network.is_empty());
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let network = read_file(file.path()).unwrap();
        assert_eq!(network.len(), 3);
    }

    #[test]
    fn test_read_file_missing_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, IngestError::Open { .. }));
    }
}
