//! Race-log parsing.
//!
//! The first line of a race log is the race name. Every following line is a
//! fixed-width lap record: a three-character driver code immediately
//! followed by the lap time in seconds, e.g. `VER83.456`.

use laps_core::models::{DriverCode, LapLog, LapTime, LineSource, SkipReason, SkippedLine};
use tracing::{debug, warn};

/// Width of the driver-code prefix on every lap line.
pub const DRIVER_CODE_WIDTH: usize = 3;

/// Lines shorter than this (after trimming) cannot hold a code and a time.
pub const MIN_LAP_LINE_LEN: usize = 6;

/// Result of parsing a race log.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRaceLog {
    /// First line of the file, trimmed.
    pub race_name: String,
    pub lap_log: LapLog,
    /// Lap lines that were dropped, in file order.
    pub skipped: Vec<SkippedLine>,
}

/// Parse the full text of a race log.
///
/// Returns `None` when `content` has no lines at all. A log whose lap lines
/// are all invalid still parses, yielding an empty [`LapLog`].
pub fn parse_race_log(content: &str) -> Option<ParsedRaceLog> {
    let mut lines = content.lines();
    let race_name = lines.next()?.trim().to_string();

    let mut lap_log = LapLog::new();
    let mut skipped = Vec::new();

    // Line 1 is the race name, so lap lines start at 2.
    for (line_number, raw) in (2..).zip(lines) {
        let line = raw.trim();
        match parse_lap_line(line) {
            Ok((code, time)) => lap_log.push(&code, time),
            Err(reason) => {
                match reason {
                    SkipReason::TooShort => {
                        debug!("Skipping short lap line {}: {:?}", line_number, line)
                    }
                    _ => warn!("Skipping invalid lap time entry: {}", line),
                }
                skipped.push(SkippedLine {
                    source: LineSource::RaceLog,
                    line_number,
                    content: line.to_string(),
                    reason,
                });
            }
        }
    }

    debug!(
        "Race '{}': {} drivers, {} laps, {} lines skipped",
        race_name,
        lap_log.len(),
        lap_log.total_laps(),
        skipped.len()
    );

    Some(ParsedRaceLog {
        race_name,
        lap_log,
        skipped,
    })
}

/// Parse one trimmed lap line into `(code, seconds)`.
///
/// The code is the first three characters taken as-is; the rest must be a
/// floating-point number. A lap-number tag such as the `1:` in `VER1:23.456`
/// is accepted and dropped.
pub fn parse_lap_line(line: &str) -> Result<(DriverCode, LapTime), SkipReason> {
    if line.chars().count() < MIN_LAP_LINE_LEN {
        return Err(SkipReason::TooShort);
    }

    // Byte offset of the fourth character; the length check guarantees it.
    let split_at = line
        .char_indices()
        .nth(DRIVER_CODE_WIDTH)
        .map(|(idx, _)| idx)
        .ok_or(SkipReason::TooShort)?;
    let (code, remainder) = line.split_at(split_at);

    parse_lap_time(remainder)
        .map(|time| (code.to_string(), time))
        .ok_or(SkipReason::InvalidLapTime)
}

/// Parse the numeric part of a lap line.
///
/// Only finite values count as lap times; `nan`, `inf` and overflowing
/// literals such as `1e999` are rejected.
fn parse_lap_time(text: &str) -> Option<LapTime> {
    let time = match text.trim().parse::<f64>() {
        Ok(time) => time,
        Err(_) => {
            let (tag, time) = text.split_once(':')?;
            if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            time.trim().parse::<f64>().ok()?
        }
    };
    time.is_finite().then_some(time)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_LOG: &str = "Example GP\nVER1:23.456\nHAM1:24.001\nxx\n";

    // ── parse_race_log ────────────────────────────────────────────────────────

    #[test]
    fn test_example_log() {
        let parsed = parse_race_log(EXAMPLE_LOG).unwrap();

        assert_eq!(parsed.race_name, "Example GP");
        assert_eq!(parsed.lap_log.len(), 2);
        assert_eq!(parsed.lap_log.get("VER"), Some(&[23.456][..]));
        assert_eq!(parsed.lap_log.get("HAM"), Some(&[24.001][..]));

        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].content, "xx");
        assert_eq!(parsed.skipped[0].reason, SkipReason::TooShort);
        assert_eq!(parsed.skipped[0].line_number, 4);
    }

    #[test]
    fn test_race_name_is_trimmed() {
        let parsed = parse_race_log("   Monaco Grand Prix  \r\nLEC72.909\n").unwrap();
        assert_eq!(parsed.race_name, "Monaco Grand Prix");
        assert_eq!(parsed.lap_log.get("LEC"), Some(&[72.909][..]));
    }

    #[test]
    fn test_empty_content_has_no_race() {
        assert!(parse_race_log("").is_none());
    }

    #[test]
    fn test_name_only_yields_empty_log() {
        let parsed = parse_race_log("Silverstone\n").unwrap();
        assert_eq!(parsed.race_name, "Silverstone");
        assert!(parsed.lap_log.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_blank_first_line_is_an_empty_race_name() {
        let parsed = parse_race_log("\nVER83.1\n").unwrap();
        assert_eq!(parsed.race_name, "");
        assert_eq!(parsed.lap_log.total_laps(), 1);
    }

    #[test]
    fn test_laps_append_in_file_order() {
        let log = "GP\nVER83.5\nHAM84.0\nVER82.9\nVER83.1\n";
        let parsed = parse_race_log(log).unwrap();

        assert_eq!(parsed.lap_log.get("VER"), Some(&[83.5, 82.9, 83.1][..]));
        let codes: Vec<&str> = parsed.lap_log.iter().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!["VER", "HAM"]);
    }

    #[test]
    fn test_invalid_time_skipped_and_parsing_continues() {
        let log = "GP\nVER83.5\nHAMabc.d\nLEC84.25\n";
        let parsed = parse_race_log(log).unwrap();

        assert_eq!(parsed.lap_log.len(), 2);
        assert!(!parsed.lap_log.contains("HAM"));
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].content, "HAMabc.d");
        assert_eq!(parsed.skipped[0].reason, SkipReason::InvalidLapTime);
        assert_eq!(parsed.skipped[0].source, LineSource::RaceLog);
        assert_eq!(parsed.skipped[0].line_number, 3);
    }

    #[test]
    fn test_driver_with_only_invalid_laps_never_appears() {
        let parsed = parse_race_log("GP\nNORfast!\nNORslow!\n").unwrap();
        assert!(parsed.lap_log.is_empty());
        assert_eq!(parsed.skipped.len(), 2);
    }

    #[test]
    fn test_short_lines_never_contribute() {
        let parsed = parse_race_log("GP\nVER8\nVER83\n\n   \nHAM8.5\n").unwrap();
        // "VER8", "VER83", "" and "" are too short; "HAM8.5" is exactly six.
        assert_eq!(parsed.lap_log.len(), 1);
        assert_eq!(parsed.lap_log.get("HAM"), Some(&[8.5][..]));
        assert!(parsed
            .skipped
            .iter()
            .all(|s| s.reason == SkipReason::TooShort));
        assert_eq!(parsed.skipped.len(), 4);
    }

    #[test]
    fn test_reparsing_is_idempotent() {
        let log = "GP\nVER83.5\nHAM84.0\nbad\nVER82.9\nSAIx\n";
        let first = parse_race_log(log).unwrap();
        let second = parse_race_log(log).unwrap();
        assert_eq!(first, second);
    }

    // ── parse_lap_line ────────────────────────────────────────────────────────

    #[test]
    fn test_lap_line_code_is_taken_verbatim() {
        assert_eq!(parse_lap_line("ver83.1"), Ok(("ver".to_string(), 83.1)));
        assert_eq!(parse_lap_line("V R83.1"), Ok(("V R".to_string(), 83.1)));
    }

    #[test]
    fn test_lap_line_space_after_code_is_tolerated() {
        assert_eq!(parse_lap_line("VER 83.1"), Ok(("VER".to_string(), 83.1)));
    }

    #[test]
    fn test_lap_line_integer_time() {
        assert_eq!(parse_lap_line("BOT100"), Ok(("BOT".to_string(), 100.0)));
    }

    #[test]
    fn test_lap_line_lap_tag() {
        assert_eq!(parse_lap_line("VER12:83.5"), Ok(("VER".to_string(), 83.5)));
        assert_eq!(parse_lap_line("VERab:83.5"), Err(SkipReason::InvalidLapTime));
        assert_eq!(parse_lap_line("VER:83.5x"), Err(SkipReason::InvalidLapTime));
    }

    #[test]
    fn test_lap_line_multibyte_code() {
        assert_eq!(parse_lap_line("PÉR84.5"), Ok(("PÉR".to_string(), 84.5)));
    }

    #[test]
    fn test_lap_line_too_short() {
        assert_eq!(parse_lap_line("VER1."), Err(SkipReason::TooShort));
        assert_eq!(parse_lap_line(""), Err(SkipReason::TooShort));
    }

    #[test]
    fn test_lap_line_non_finite_time_is_invalid() {
        for line in ["VERnan", "HAMNaN", "LECinf", "BOT-inf", "NORinfinity", "SAI1e999", "PER3:nan"] {
            assert_eq!(parse_lap_line(line), Err(SkipReason::InvalidLapTime), "{line}");
        }
        assert_eq!(parse_lap_line("VER1e3"), Ok(("VER".to_string(), 1000.0)));
    }

    #[test]
    fn test_non_finite_lines_are_skipped_and_stats_still_sort() {
        let mut log = String::from("Endurance GP\n");
        for i in 0..48 {
            if i % 5 == 0 {
                log.push_str(&format!("N{:02}nan\n", i));
            } else {
                log.push_str(&format!("D{:02}{}.5\n", i, 80 + i));
            }
        }

        let parsed = parse_race_log(&log).unwrap();
        assert_eq!(parsed.lap_log.len(), 38);
        assert_eq!(parsed.skipped.len(), 10);
        assert!(parsed
            .skipped
            .iter()
            .all(|s| s.reason == SkipReason::InvalidLapTime));

        let fastest = crate::statistics::StatisticsEngine::fastest_per_driver(&parsed.lap_log);
        assert_eq!(fastest.len(), 38);
        assert_eq!(fastest[0].code, "D47");
        assert!(fastest.windows(2).all(|w| w[0].time >= w[1].time));
    }
}
