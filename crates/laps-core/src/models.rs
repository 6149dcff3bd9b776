use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Three-character driver identifier taken verbatim from a lap line.
pub type DriverCode = String;

/// Lap duration in seconds.
pub type LapTime = f64;

/// Driver metadata keyed by [`DriverCode`].
pub type Roster = HashMap<DriverCode, DriverInfo>;

// ── LapLog ────────────────────────────────────────────────────────────────────

/// Every lap recorded for one driver, in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverLaps {
    pub code: DriverCode,
    pub laps: Vec<LapTime>,
}

/// Per-driver lap times for one race session.
///
/// Drivers iterate in the order their first valid lap appeared in the race
/// log, and each driver's laps keep file order. A driver is only present
/// once at least one lap has been recorded for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<DriverLaps>", into = "Vec<DriverLaps>")]
pub struct LapLog {
    drivers: Vec<DriverLaps>,
    index: HashMap<DriverCode, usize>,
}

impl LapLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `time` to the laps of `code`, creating the driver on first use.
    pub fn push(&mut self, code: &str, time: LapTime) {
        if let Some(&slot) = self.index.get(code) {
            self.drivers[slot].laps.push(time);
            return;
        }
        self.index.insert(code.to_string(), self.drivers.len());
        self.drivers.push(DriverLaps {
            code: code.to_string(),
            laps: vec![time],
        });
    }

    /// Laps recorded for `code`, or `None` when the driver never appeared.
    pub fn get(&self, code: &str) -> Option<&[LapTime]> {
        self.index
            .get(code)
            .map(|&slot| self.drivers[slot].laps.as_slice())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Iterate `(code, laps)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LapTime])> {
        self.drivers
            .iter()
            .map(|d| (d.code.as_str(), d.laps.as_slice()))
    }

    /// Number of drivers.
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Number of laps across all drivers.
    pub fn total_laps(&self) -> usize {
        self.drivers.iter().map(|d| d.laps.len()).sum()
    }
}

impl From<Vec<DriverLaps>> for LapLog {
    fn from(drivers: Vec<DriverLaps>) -> Self {
        let mut log = LapLog::new();
        for driver in drivers {
            for time in driver.laps {
                log.push(&driver.code, time);
            }
        }
        log
    }
}

impl From<LapLog> for Vec<DriverLaps> {
    fn from(log: LapLog) -> Self {
        log.drivers
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// Static details about one driver from the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverInfo {
    pub name: String,
    pub team: String,
    pub nationality: String,
    /// Raw car number text with any leading `#` removed.
    pub car_number: String,
}

// ── Skipped input ─────────────────────────────────────────────────────────────

/// Which input file a skipped line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSource {
    RaceLog,
    Roster,
}

/// Why a parser discarded a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Lap line shorter than a code plus a number.
    TooShort,
    /// Text after the driver code is not a number.
    InvalidLapTime,
    /// Roster line with fewer than four `", "`-separated fields.
    IncompleteDriverDetails,
    /// Roster line whose first field has no `code:name` separator.
    MissingCodeSeparator,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::TooShort => "not enough data",
            SkipReason::InvalidLapTime => "invalid lap time",
            SkipReason::IncompleteDriverDetails => "incomplete driver details",
            SkipReason::MissingCodeSeparator => "missing ':' between code and name",
        }
    }
}

/// An input line a parser discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub source: LineSource,
    /// 1-based line number within the source file.
    pub line_number: usize,
    /// The line content after trimming.
    pub content: String,
    pub reason: SkipReason,
}

// ── RaceSession ───────────────────────────────────────────────────────────────

/// Everything loaded for one race: built once, read-only afterwards.
///
/// The roster and lap log are loaded independently; a driver code may
/// appear in either without appearing in the other.
#[derive(Debug, Clone, Default)]
pub struct RaceSession {
    /// First line of the race log, trimmed.
    pub race_name: String,
    pub lap_log: LapLog,
    pub roster: Roster,
    /// Lines dropped by either parser, race log first.
    pub skipped: Vec<SkippedLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> LapLog {
        let mut log = LapLog::new();
        log.push("VER", 83.1);
        log.push("HAM", 84.2);
        log.push("VER", 82.9);
        log
    }

    #[test]
    fn test_lap_log_keeps_first_seen_driver_order() {
        let log = sample_log();
        let codes: Vec<&str> = log.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["VER", "HAM"]);
    }

    #[test]
    fn test_lap_log_keeps_lap_order_per_driver() {
        let log = sample_log();
        assert_eq!(log.get("VER"), Some(&[83.1, 82.9][..]));
        assert_eq!(log.get("HAM"), Some(&[84.2][..]));
        assert_eq!(log.get("LEC"), None);
    }

    #[test]
    fn test_lap_log_counts() {
        let log = sample_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log.total_laps(), 3);
        assert!(!log.is_empty());
        assert!(log.contains("HAM"));
        assert!(!log.contains("ham"), "codes are case-sensitive");
    }

    #[test]
    fn test_empty_lap_log() {
        let log = LapLog::new();
        assert!(log.is_empty());
        assert_eq!(log.total_laps(), 0);
        assert_eq!(log.iter().count(), 0);
    }

    #[test]
    fn test_lap_log_serializes_as_ordered_list() {
        let log = sample_log();
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json[0]["code"], "VER");
        assert_eq!(json[1]["code"], "HAM");

        let back: LapLog = serde_json::from_value(json).unwrap();
        assert_eq!(back, log);
    }

    #[test]
    fn test_skip_reason_descriptions() {
        assert_eq!(SkipReason::InvalidLapTime.describe(), "invalid lap time");
        assert_eq!(
            SkipReason::IncompleteDriverDetails.describe(),
            "incomplete driver details"
        );
    }
}
