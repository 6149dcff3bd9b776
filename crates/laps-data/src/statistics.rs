//! Per-driver and race-wide lap statistics.
//!
//! Every function is a pure read of an already-loaded [`LapLog`] (and, for
//! the merged view, the [`Roster`]). Results are plain ordered data, ready
//! to be rendered without further sorting.

use std::cmp::Ordering;

use laps_core::models::{DriverCode, LapLog, LapTime, Roster};
use serde::{Deserialize, Serialize};

// ── Result types ──────────────────────────────────────────────────────────────

/// One driver paired with a single lap time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverLap {
    pub code: DriverCode,
    pub time: LapTime,
}

impl DriverLap {
    fn new(code: &str, time: LapTime) -> Self {
        Self {
            code: code.to_string(),
            time,
        }
    }
}

/// Mean lap time for one driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverAverage {
    pub code: DriverCode,
    pub average: LapTime,
}

/// Number of laps one driver completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapCount {
    pub code: DriverCode,
    pub laps: usize,
}

/// Roster details joined with a driver's lap statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRow {
    pub code: DriverCode,
    pub name: String,
    pub team: String,
    pub nationality: String,
    pub car_number: String,
    pub fastest_lap: LapTime,
    pub average_lap: LapTime,
}

// ── StatisticsEngine ──────────────────────────────────────────────────────────

/// Stateless helper computing lap statistics.
pub struct StatisticsEngine;

impl StatisticsEngine {
    /// Each driver's fastest lap, sorted by time descending.
    ///
    /// Drivers with equal times keep lap-log order.
    pub fn fastest_per_driver(lap_log: &LapLog) -> Vec<DriverLap> {
        let mut fastest: Vec<DriverLap> = lap_log
            .iter()
            .filter_map(|(code, laps)| min_lap(laps).map(|t| DriverLap::new(code, t)))
            .collect();
        fastest.sort_by(|a, b| descending(a.time, b.time));
        fastest
    }

    /// Each driver's slowest lap, sorted by time ascending.
    pub fn slowest_per_driver(lap_log: &LapLog) -> Vec<DriverLap> {
        let mut slowest: Vec<DriverLap> = lap_log
            .iter()
            .filter_map(|(code, laps)| max_lap(laps).map(|t| DriverLap::new(code, t)))
            .collect();
        slowest.sort_by(|a, b| ascending(a.time, b.time));
        slowest
    }

    /// The driver whose own fastest lap is the quickest of all.
    ///
    /// A later driver replaces the current best only when strictly faster,
    /// so ties go to the driver seen first in the race log. Returns `None`
    /// when there is no lap data.
    pub fn overall_fastest(lap_log: &LapLog) -> Option<DriverLap> {
        let mut best: Option<DriverLap> = None;
        let mut best_time = f64::INFINITY;
        for (code, laps) in lap_log.iter() {
            if let Some(time) = min_lap(laps) {
                if time < best_time {
                    best_time = time;
                    best = Some(DriverLap::new(code, time));
                }
            }
        }
        best
    }

    /// The driver whose own slowest lap is the slowest of all.
    ///
    /// Mirrors [`Self::overall_fastest`] with a strict greater-than.
    pub fn overall_slowest(lap_log: &LapLog) -> Option<DriverLap> {
        let mut worst: Option<DriverLap> = None;
        let mut worst_time = f64::NEG_INFINITY;
        for (code, laps) in lap_log.iter() {
            if let Some(time) = max_lap(laps) {
                if time > worst_time {
                    worst_time = time;
                    worst = Some(DriverLap::new(code, time));
                }
            }
        }
        worst
    }

    /// Mean of every individual lap across all drivers.
    pub fn overall_average(lap_log: &LapLog) -> Option<LapTime> {
        let all: Vec<LapTime> = lap_log
            .iter()
            .flat_map(|(_, laps)| laps.iter().copied())
            .collect();
        mean(&all)
    }

    /// Mean lap time per driver, in lap-log order.
    pub fn per_driver_average(lap_log: &LapLog) -> Vec<DriverAverage> {
        lap_log
            .iter()
            .filter_map(|(code, laps)| {
                mean(laps).map(|average| DriverAverage {
                    code: code.to_string(),
                    average,
                })
            })
            .collect()
    }

    /// Lap count per driver, in lap-log order.
    pub fn lap_counts(lap_log: &LapLog) -> Vec<LapCount> {
        lap_log
            .iter()
            .map(|(code, laps)| LapCount {
                code: code.to_string(),
                laps: laps.len(),
            })
            .collect()
    }

    /// Per-driver averages sorted by average descending.
    pub fn average_leaderboard(lap_log: &LapLog) -> Vec<DriverAverage> {
        let mut averages = Self::per_driver_average(lap_log);
        averages.sort_by(|a, b| descending(a.average, b.average));
        averages
    }

    /// Lap counts sorted by count descending.
    pub fn lap_count_leaderboard(lap_log: &LapLog) -> Vec<LapCount> {
        let mut counts = Self::lap_counts(lap_log);
        counts.sort_by(|a, b| b.laps.cmp(&a.laps));
        counts
    }

    /// Roster details joined with lap statistics.
    ///
    /// Only drivers present in both the roster and the lap log appear. Rows
    /// are sorted by fastest lap *descending*, so the driver with the
    /// slowest personal best comes first.
    pub fn merged_driver_view(roster: &Roster, lap_log: &LapLog) -> Vec<DriverRow> {
        let mut rows: Vec<DriverRow> = lap_log
            .iter()
            .filter_map(|(code, laps)| {
                let info = roster.get(code)?;
                Some(DriverRow {
                    code: code.to_string(),
                    name: info.name.clone(),
                    team: info.team.clone(),
                    nationality: info.nationality.clone(),
                    car_number: info.car_number.clone(),
                    fastest_lap: min_lap(laps)?,
                    average_lap: mean(laps)?,
                })
            })
            .collect();
        rows.sort_by(|a, b| descending(a.fastest_lap, b.fastest_lap));
        rows
    }
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn min_lap(laps: &[LapTime]) -> Option<LapTime> {
    laps.iter().copied().reduce(f64::min)
}

fn max_lap(laps: &[LapTime]) -> Option<LapTime> {
    laps.iter().copied().reduce(f64::max)
}

fn mean(laps: &[LapTime]) -> Option<LapTime> {
    if laps.is_empty() {
        return None;
    }
    Some(laps.iter().sum::<f64>() / laps.len() as f64)
}

fn ascending(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

fn descending(a: f64, b: f64) -> Ordering {
    ascending(b, a)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
