//! Complete statistics snapshot for one race session.
//!
//! Gathers every [`StatisticsEngine`] output into one serializable value
//! for the non-interactive summary and JSON views.

use laps_core::error::Result;
use laps_core::models::{RaceSession, SkippedLine};
use serde::{Deserialize, Serialize};

use crate::statistics::{DriverAverage, DriverLap, DriverRow, LapCount, StatisticsEngine};

/// Every statistic computed for a [`RaceSession`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceReport {
    pub race_name: String,
    /// Drivers with at least one lap.
    pub driver_count: usize,
    pub total_laps: usize,
    pub roster_size: usize,
    /// Fastest lap per driver, slowest-of-the-fastest first.
    pub fastest_laps: Vec<DriverLap>,
    /// Slowest lap per driver, ascending.
    pub slowest_laps: Vec<DriverLap>,
    pub overall_fastest: Option<DriverLap>,
    pub overall_slowest: Option<DriverLap>,
    pub overall_average: Option<f64>,
    /// Per-driver averages, highest first.
    pub driver_averages: Vec<DriverAverage>,
    /// Per-driver lap counts, highest first.
    pub lap_counts: Vec<LapCount>,
    pub drivers: Vec<DriverRow>,
    pub skipped_lines: Vec<SkippedLine>,
}

impl RaceReport {
    pub fn build(session: &RaceSession) -> Self {
        let log = &session.lap_log;
        Self {
            race_name: session.race_name.clone(),
            driver_count: log.len(),
            total_laps: log.total_laps(),
            roster_size: session.roster.len(),
            fastest_laps: StatisticsEngine::fastest_per_driver(log),
            slowest_laps: StatisticsEngine::slowest_per_driver(log),
            overall_fastest: StatisticsEngine::overall_fastest(log),
            overall_slowest: StatisticsEngine::overall_slowest(log),
            overall_average: StatisticsEngine::overall_average(log),
            driver_averages: StatisticsEngine::average_leaderboard(log),
            lap_counts: StatisticsEngine::lap_count_leaderboard(log),
            drivers: StatisticsEngine::merged_driver_view(&session.roster, log),
            skipped_lines: session.skipped.clone(),
        }
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
