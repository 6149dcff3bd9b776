//! Driver-roster parsing.
//!
//! One driver per line: `CODE: Name, Team, Nationality, #CarNumber`, fields
//! separated by the literal string `", "`.

use laps_core::models::{DriverCode, DriverInfo, LineSource, Roster, SkipReason, SkippedLine};
use tracing::{debug, warn};

/// Separator between roster fields. Plain commas inside a field are kept.
pub const FIELD_SEPARATOR: &str = ", ";

/// Result of parsing a roster file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRoster {
    pub roster: Roster,
    pub skipped: Vec<SkippedLine>,
}

/// Parse the full text of a roster file.
///
/// When a code appears more than once the last line wins.
pub fn parse_roster(content: &str) -> ParsedRoster {
    let mut parsed = ParsedRoster::default();

    for (line_number, raw) in (1..).zip(content.lines()) {
        let line = raw.trim();
        match parse_roster_line(line) {
            Ok((code, info)) => {
                if parsed.roster.insert(code.clone(), info).is_some() {
                    debug!("Roster line {} replaces earlier entry for {}", line_number, code);
                }
            }
            Err(reason) => {
                warn!(
                    "Skipping roster line {} ({}): {}",
                    line_number,
                    reason.describe(),
                    line
                );
                parsed.skipped.push(SkippedLine {
                    source: LineSource::Roster,
                    line_number,
                    content: line.to_string(),
                    reason,
                });
            }
        }
    }

    debug!(
        "Roster: {} drivers, {} lines skipped",
        parsed.roster.len(),
        parsed.skipped.len()
    );
    parsed
}

/// Parse one trimmed roster line.
///
/// A line needs at least four fields; any beyond the fourth are ignored.
pub fn parse_roster_line(line: &str) -> Result<(DriverCode, DriverInfo), SkipReason> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [code_and_name, team, nationality, car_number, ..] = parts.as_slice() else {
        return Err(SkipReason::IncompleteDriverDetails);
    };

    let (code, name) = code_and_name
        .split_once(':')
        .ok_or(SkipReason::MissingCodeSeparator)?;

    let info = DriverInfo {
        name: name.trim().to_string(),
        team: team.to_string(),
        nationality: nationality.to_string(),
        car_number: car_number
            .strip_prefix('#')
            .unwrap_or(*car_number)
            .to_string(),
    };

    Ok((code.to_string(), info))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_roster_line() {
        let (code, info) = parse_roster_line("VER:Max Verstappen, Red Bull, Dutch, #1").unwrap();
        assert_eq!(code, "VER");
        assert_eq!(
            info,
            DriverInfo {
                name: "Max Verstappen".to_string(),
                team: "Red Bull".to_string(),
                nationality: "Dutch".to_string(),
                car_number: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_name_after_colon_is_trimmed() {
        let (code, info) =
            parse_roster_line("HAM: Lewis Hamilton, Mercedes, British, #44").unwrap();
        assert_eq!(code, "HAM");
        assert_eq!(info.name, "Lewis Hamilton");
    }

    #[test]
    fn test_car_number_without_hash_is_kept() {
        let (_, info) = parse_roster_line("LEC:Charles Leclerc, Ferrari, Monegasque, 16").unwrap();
        assert_eq!(info.car_number, "16");
    }

    #[test]
    fn test_plain_commas_stay_inside_fields() {
        let (_, info) =
            parse_roster_line("SAI:Carlos Sainz, Scuderia Ferrari,HP, Spanish, #55").unwrap();
        assert_eq!(info.team, "Scuderia Ferrari,HP");
        assert_eq!(info.nationality, "Spanish");
        assert_eq!(info.car_number, "55");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let (_, info) =
            parse_roster_line("NOR:Lando Norris, McLaren, British, #4, rookie of 2019").unwrap();
        assert_eq!(info.car_number, "4");
    }

    #[test]
    fn test_too_few_fields_is_rejected() {
        assert_eq!(
            parse_roster_line("VER:Max Verstappen, Red Bull, Dutch"),
            Err(SkipReason::IncompleteDriverDetails)
        );
        assert_eq!(
            parse_roster_line("VER:Max Verstappen,Red Bull,Dutch,#1"),
            Err(SkipReason::IncompleteDriverDetails)
        );
        assert_eq!(parse_roster_line(""), Err(SkipReason::IncompleteDriverDetails));
    }

    #[test]
    fn test_missing_colon_is_rejected() {
        assert_eq!(
            parse_roster_line("VER Max Verstappen, Red Bull, Dutch, #1"),
            Err(SkipReason::MissingCodeSeparator)
        );
    }

    #[test]
    fn test_parse_roster_skips_bad_lines_and_continues() {
        let content = "VER:Max Verstappen, Red Bull, Dutch, #1\n\
                       broken line\n\
                       HAM:Lewis Hamilton, Mercedes, British, #44\n";
        let parsed = parse_roster(content);

        assert_eq!(parsed.roster.len(), 2);
        assert!(parsed.roster.contains_key("VER"));
        assert!(parsed.roster.contains_key("HAM"));
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line_number, 2);
        assert_eq!(parsed.skipped[0].content, "broken line");
        assert_eq!(parsed.skipped[0].source, LineSource::Roster);
    }

    #[test]
    fn test_parse_roster_last_occurrence_wins() {
        let content = "VER:Max Verstappen, Red Bull, Dutch, #33\n\
                       VER:Max Verstappen, Red Bull Racing, Dutch, #1\n";
        let parsed = parse_roster(content);

        assert_eq!(parsed.roster.len(), 1);
        let info = &parsed.roster["VER"];
        assert_eq!(info.team, "Red Bull Racing");
        assert_eq!(info.car_number, "1");
    }

    #[test]
    fn test_parse_empty_roster() {
        let parsed = parse_roster("");
        assert!(parsed.roster.is_empty());
        assert!(parsed.skipped.is_empty());
    }
}
