//! Whole-file loading for race logs and driver rosters.
//!
//! Reads each input in one blocking call and hands the text to the matching
//! parser. A bad race log stops the run; a bad roster only costs the driver
//! details.

use std::path::Path;

use laps_core::error::{RaceError, Result};
use tracing::{debug, warn};

use crate::race_log::{parse_race_log, ParsedRaceLog};
use crate::roster::{parse_roster, ParsedRoster};

// ── Public API ────────────────────────────────────────────────────────────────

/// Fail with [`RaceError::MissingFile`] when `path` does not exist.
pub fn check_file_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(RaceError::MissingFile(path.to_path_buf()))
    }
}

/// Read a whole file as UTF-8 text.
///
/// A missing file maps to [`RaceError::MissingFile`]; any other failure
/// (permissions, invalid UTF-8, a directory) to [`RaceError::FileRead`].
pub fn read_text(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!("Read {} bytes from {}", content.len(), path.display());
            Ok(content)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(RaceError::MissingFile(path.to_path_buf()))
        }
        Err(source) => Err(RaceError::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load and parse a race log.
///
/// Fails when the file cannot be read or has no lines at all.
pub fn load_race_log(path: &Path) -> Result<ParsedRaceLog> {
    let content = read_text(path)?;
    parse_race_log(&content).ok_or_else(|| RaceError::EmptyRaceLog(path.to_path_buf()))
}

/// Load and parse a driver roster.
///
/// Never fails: when the file cannot be read a warning is logged and an
/// empty roster is returned.
pub fn load_roster(path: &Path) -> ParsedRoster {
    match read_text(path) {
        Ok(content) => parse_roster(&content),
        Err(e) => {
            warn!("Oops, something went wrong with the driver details: {}", e);
            ParsedRoster::default()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    #[test]
    fn test_check_file_exists() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write(&tmp, "race.txt", b"GP\n");

        assert!(check_file_exists(&path).is_ok());
        let missing = tmp.path().join("nope.txt");
        assert!(matches!(
            check_file_exists(&missing),
            Err(RaceError::MissingFile(p)) if p == missing
        ));
    }

    #[test]
    fn test_load_race_log() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write(&tmp, "race.txt", b"Bahrain GP\nVER91.2\nPER92.0\n");

        let parsed = load_race_log(&path).expect("load");
        assert_eq!(parsed.race_name, "Bahrain GP");
        assert_eq!(parsed.lap_log.total_laps(), 2);
    }

    #[test]
    fn test_load_race_log_empty_file() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write(&tmp, "race.txt", b"");

        let err = load_race_log(&path).unwrap_err();
        assert!(matches!(err, RaceError::EmptyRaceLog(_)), "got {err:?}");
    }

    #[test]
    fn test_load_race_log_missing_file() {
        let tmp = TempDir::new().expect("tempdir");
        let err = load_race_log(&tmp.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, RaceError::MissingFile(_)), "got {err:?}");
    }

    #[test]
    fn test_load_race_log_unreadable_content() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write(&tmp, "race.txt", &[0xff, 0xfe, b'\n', 0xc3]);

        let err = load_race_log(&path).unwrap_err();
        assert!(matches!(err, RaceError::FileRead { .. }), "got {err:?}");
    }

    #[test]
    fn test_load_race_log_directory_is_a_read_failure() {
        let tmp = TempDir::new().expect("tempdir");
        let err = load_race_log(tmp.path()).unwrap_err();
        assert!(matches!(err, RaceError::FileRead { .. }), "got {err:?}");
    }

    #[test]
    fn test_load_roster() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write(
            &tmp,
            "drivers.txt",
            b"VER:Max Verstappen, Red Bull, Dutch, #1\nPER:Sergio Perez, Red Bull, Mexican, #11\n",
        );

        let parsed = load_roster(&path);
        assert_eq!(parsed.roster.len(), 2);
        assert_eq!(parsed.roster["PER"].car_number, "11");
    }

    #[test]
    fn test_load_roster_failure_degrades_to_empty() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write(&tmp, "drivers.txt", &[0xff, 0xfe, 0xfd]);

        let parsed = load_roster(&path);
        assert!(parsed.roster.is_empty());
        assert!(parsed.skipped.is_empty());

        let missing = load_roster(&tmp.path().join("absent.txt"));
        assert!(missing.roster.is_empty());
    }
}
