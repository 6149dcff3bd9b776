//! Result tables for the lap-times menu.
//!
//! Renders bordered [`ratatui::widgets::Table`]s for the per-driver
//! statistics plus single-line result and "no data" panels.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use laps_core::formatting::format_seconds;
use laps_data::statistics::{DriverAverage, DriverLap, DriverRow, LapCount};

use crate::themes::Theme;

/// Column headers of the driver information table.
pub const DRIVER_HEADERS: [&str; 6] = [
    "Driver",
    "Team",
    "Nationality",
    "Car Number",
    "Fastest Lap (seconds)",
    "Average Lap Time (seconds)",
];

// ── Row conversion ────────────────────────────────────────────────────────────

/// `(code, time)` rows for a lap table.
pub fn lap_rows(laps: &[DriverLap]) -> Vec<[String; 2]> {
    laps.iter()
        .map(|l| [l.code.clone(), format_seconds(l.time)])
        .collect()
}

/// `(code, average)` rows for the driver averages table.
pub fn average_rows(averages: &[DriverAverage]) -> Vec<[String; 2]> {
    averages
        .iter()
        .map(|a| [a.code.clone(), format_seconds(a.average)])
        .collect()
}

/// `(code, laps)` rows for the laps-per-driver table.
pub fn lap_count_rows(counts: &[LapCount]) -> Vec<[String; 2]> {
    counts
        .iter()
        .map(|c| [c.code.clone(), c.laps.to_string()])
        .collect()
}

/// Driver information rows, one cell per [`DRIVER_HEADERS`] column.
pub fn driver_rows(drivers: &[DriverRow]) -> Vec<[String; 6]> {
    drivers
        .iter()
        .map(|d| {
            [
                d.name.clone(),
                d.team.clone(),
                d.nationality.clone(),
                d.car_number.clone(),
                format_seconds(d.fastest_lap),
                format_seconds(d.average_lap),
            ]
        })
        .collect()
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render a two-column `driver | value` table into `area`.
pub fn render_value_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    headers: [&str; 2],
    rows: &[[String; 2]],
    theme: &Theme,
) {
    let value_width = headers[1].chars().count().max(10) as u16 + 2;
    let widths = [Constraint::Length(8), Constraint::Length(value_width)];
    render_table(frame, area, title, &headers, rows, &widths, theme);
}

/// Render the merged driver information table into `area`.
pub fn render_driver_table(frame: &mut Frame, area: Rect, rows: &[[String; 6]], theme: &Theme) {
    let widths = [
        Constraint::Min(16),
        Constraint::Min(12),
        Constraint::Length(12),
        Constraint::Length(11),
        Constraint::Length(22),
        Constraint::Length(27),
    ];
    render_table(
        frame,
        area,
        "Driver Information (sorted in descending order by fastest lap)",
        &DRIVER_HEADERS,
        rows,
        &widths,
        theme,
    );
}

/// Render a single headline result such as the overall fastest driver.
pub fn render_message(frame: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    render_paragraph(frame, area, title, message, theme.value, theme);
}

/// Render a "no data" placeholder for a menu entry with nothing to show.
pub fn render_no_data(frame: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    render_paragraph(frame, area, title, message, theme.warning, theme);
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn render_table<const N: usize>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    headers: &[&str; N],
    rows: &[[String; N]],
    widths: &[Constraint; N],
    theme: &Theme,
) {
    let header = Row::new(
        headers
            .iter()
            .map(|h| Cell::from(*h).style(theme.table_header)),
    )
    .height(1);

    let data_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Row::new(row.iter().map(|c| Cell::from(c.clone()))).style(theme.row_style(i))
        })
        .collect();

    let table = Table::new(data_rows, widths.to_vec())
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(format!(" {} ", title)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

fn render_paragraph(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    style: Style,
    theme: &Theme,
) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), style)),
        Line::from(""),
        Line::from(Span::styled("Press Esc to go back", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.table_border)
                    .title(format!(" {} ", title)),
            ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
