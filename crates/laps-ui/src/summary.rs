//! Plain-text rendering of a [`RaceReport`] for non-interactive output.
//!
//! Tables use box-drawing grids with a double rule under the header. Column
//! widths are measured in terminal cells with [`unicode_width`], so driver
//! names with accents or wide glyphs stay aligned.

use laps_core::formatting::{format_seconds_with_unit, pluralize};
use laps_core::models::LineSource;
use laps_data::report::RaceReport;
use unicode_width::UnicodeWidthStr;

use crate::table_view;

/// Column alignment inside a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Render every statistic in `report` as text.
pub fn render_summary(report: &RaceReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Race: {}\n", report.race_name));
    out.push_str(&format!(
        "{}, {}, {} in roster\n",
        pluralize(report.driver_count, "driver"),
        pluralize(report.total_laps, "lap"),
        pluralize(report.roster_size, "driver"),
    ));

    section(&mut out, "Fastest Laps (in descending order):");
    if report.fastest_laps.is_empty() {
        out.push_str("No lap times available.\n");
    } else {
        out.push_str(&two_column(
            ["Driver", "Fastest Lap (seconds)"],
            &table_view::lap_rows(&report.fastest_laps),
        ));
    }

    section(&mut out, "Slowest Laps (in ascending order):");
    if report.slowest_laps.is_empty() {
        out.push_str("No lap times available.\n");
    } else {
        out.push_str(&two_column(
            ["Driver", "Slowest Lap (seconds)"],
            &table_view::lap_rows(&report.slowest_laps),
        ));
    }

    out.push('\n');
    match &report.overall_fastest {
        Some(lap) => out.push_str(&format!(
            "Overall Fastest Driver: {} with a lap time of {}.\n",
            lap.code,
            format_seconds_with_unit(lap.time)
        )),
        None => out.push_str("No lap data available to determine the fastest driver.\n"),
    }
    match &report.overall_slowest {
        Some(lap) => out.push_str(&format!(
            "Overall Slowest Driver: {} with a lap time of {}.\n",
            lap.code,
            format_seconds_with_unit(lap.time)
        )),
        None => out.push_str("No lap data available to determine the slowest driver.\n"),
    }
    match report.overall_average {
        Some(avg) => out.push_str(&format!(
            "Overall Average Time: {}\n",
            format_seconds_with_unit(avg)
        )),
        None => out.push_str("No lap times available to calculate the average.\n"),
    }

    section(&mut out, "Driver Averages (sorted by average lap time):");
    if report.driver_averages.is_empty() {
        out.push_str("No averages available.\n");
    } else {
        out.push_str(&two_column(
            ["Driver", "Average Lap Time (seconds)"],
            &table_view::average_rows(&report.driver_averages),
        ));
    }

    section(&mut out, "Laps Completed by Each Driver:");
    if report.lap_counts.is_empty() {
        out.push_str("No lap counts available.\n");
    } else {
        out.push_str(&two_column(
            ["Driver", "Laps Completed"],
            &table_view::lap_count_rows(&report.lap_counts),
        ));
    }

    section(
        &mut out,
        "Driver Information (sorted in descending order by fastest lap):",
    );
    if report.drivers.is_empty() {
        out.push_str("No driver information to display.\n");
    } else {
        let rows: Vec<Vec<String>> = table_view::driver_rows(&report.drivers)
            .into_iter()
            .map(Vec::from)
            .collect();
        out.push_str(&grid(
            &table_view::DRIVER_HEADERS,
            &rows,
            &[
                Align::Left,
                Align::Left,
                Align::Left,
                Align::Right,
                Align::Right,
                Align::Right,
            ],
        ));
    }

    if !report.skipped_lines.is_empty() {
        section(&mut out, "Skipped Input Lines:");
        let rows: Vec<Vec<String>> = report
            .skipped_lines
            .iter()
            .map(|s| {
                let source = match s.source {
                    LineSource::RaceLog => "race log",
                    LineSource::Roster => "roster",
                };
                vec![
                    source.to_string(),
                    s.line_number.to_string(),
                    s.content.clone(),
                    s.reason.describe().to_string(),
                ]
            })
            .collect();
        out.push_str(&grid(
            &["File", "Line", "Content", "Reason"],
            &rows,
            &[Align::Left, Align::Right, Align::Left, Align::Left],
        ));
    }

    out
}

// ── Grid rendering ────────────────────────────────────────────────────────────

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
}

fn two_column(headers: [&str; 2], rows: &[[String; 2]]) -> String {
    let rows: Vec<Vec<String>> = rows.iter().map(|r| r.to_vec()).collect();
    grid(&headers, &rows, &[Align::Left, Align::Right])
}

/// Draw a box grid:
///
/// ```text
/// ╒════════╤═══════╕
/// │ Driver │  Time │
/// ╞════════╪═══════╡
/// │ VER    │ 1.000 │
/// ├────────┼───────┤
/// │ HAM    │ 2.000 │
/// ╘════════╧═══════╛
/// ```
fn grid(headers: &[&str], rows: &[Vec<String>], align: &[Align]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, h)| {
            rows.iter()
                .filter_map(|r| r.get(col))
                .map(|c| c.width())
                .chain(std::iter::once(h.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, fill: &str, mid: &str, right: &str| -> String {
        let inner: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
        format!("{}{}{}\n", left, inner.join(mid), right)
    };

    let line = |cells: &[&str]| -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, &w)| {
                let cell = cells.get(col).copied().unwrap_or("");
                let a = align.get(col).copied().unwrap_or(Align::Left);
                format!(" {} ", pad(cell, w, a))
            })
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = rule("╒", "═", "╤", "╕");
    out.push_str(&line(headers));
    out.push_str(&rule("╞", "═", "╪", "╡"));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(&rule("├", "─", "┼", "┤"));
        }
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&line(&cells));
    }
    out.push_str(&rule("╘", "═", "╧", "╛"));
    out
}

/// Pad `cell` to `width` terminal cells.
fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match align {
        Align::Left => format!("{}{}", cell, fill),
        Align::Right => format!("{}{}", fill, cell),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
