/// Decimal places used for every lap time shown to the user.
pub const LAP_TIME_DECIMALS: usize = 3;

/// Format a lap time in seconds with three decimal places.
///
/// Exact for every finite value, with no digit grouping.
///
/// ```
/// use laps_core::formatting::format_seconds;
///
/// assert_eq!(format_seconds(23.7285), "23.729");
/// assert_eq!(format_seconds(90.0), "90.000");
/// assert_eq!(format_seconds(1234.5), "1234.500");
/// ```
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.prec$}", seconds, prec = LAP_TIME_DECIMALS)
}

/// Format a lap time followed by its unit, e.g. `"83.456 seconds"`.
pub fn format_seconds_with_unit(seconds: f64) -> String {
    format!("{} seconds", format_seconds(seconds))
}

/// Format a count with an English plural suffix, e.g. `"1 lap"`, `"3 laps"`.
pub fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}s", count, singular)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
