//! Race-session loading pipeline.
//!
//! Checks both inputs exist, loads the roster (best effort) and the race
//! log (required), and assembles the read-only [`RaceSession`].

use std::path::Path;

use laps_core::error::Result;
use laps_core::models::RaceSession;
use tracing::info;

use crate::reader::{check_file_exists, load_race_log, load_roster};

/// Build a [`RaceSession`] from a race log and a roster file.
///
/// 1. Both paths must exist, otherwise nothing is loaded.
/// 2. The roster is parsed; a read failure leaves it empty.
/// 3. The race log is parsed; a read failure or an empty file is fatal.
pub fn load_session(race_path: &Path, roster_path: &Path) -> Result<RaceSession> {
    check_file_exists(race_path)?;
    check_file_exists(roster_path)?;

    let roster = load_roster(roster_path);
    let race = load_race_log(race_path)?;

    let mut skipped = race.skipped;
    skipped.extend(roster.skipped);

    info!(
        "Loaded race '{}': {} drivers, {} laps, {} roster entries, {} lines skipped",
        race.race_name,
        race.lap_log.len(),
        race.lap_log.total_laps(),
        roster.roster.len(),
        skipped.len()
    );

    Ok(RaceSession {
        race_name: race.race_name,
        lap_log: race.lap_log,
        roster: roster.roster,
        skipped,
    })
}
