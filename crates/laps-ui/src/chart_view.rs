//! Vertical bar charts of per-driver lap times.
//!
//! Bars are scaled in milliseconds and labelled with the driver code; the
//! text on each bar is the lap time in seconds.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use laps_core::formatting::format_seconds;
use laps_data::statistics::DriverLap;

use crate::themes::Theme;

/// Columns per bar; wide enough for `"123.456"`.
pub const BAR_WIDTH: u16 = 7;
pub const BAR_GAP: u16 = 2;

/// Convert a lap time to the integer bar height.
pub fn bar_height(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    }
}

/// Build one bar per driver in the given order.
pub fn lap_bars<'a>(laps: &'a [DriverLap], bar_style: Style, theme: &Theme) -> Vec<Bar<'a>> {
    laps.iter()
        .map(|lap| {
            Bar::default()
                .value(bar_height(lap.time))
                .text_value(format_seconds(lap.time))
                .label(Line::from(lap.code.as_str()))
                .style(bar_style)
                .value_style(theme.bar_value)
        })
        .collect()
}

/// Render the lap chart into `area` with `title` on the border.
pub fn render_lap_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    laps: &[DriverLap],
    bar_style: Style,
    theme: &Theme,
) {
    let bars = lap_bars(laps, bar_style, theme);
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(format!(" {} ", title)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .label_style(theme.bar_label);

    frame.render_widget(chart, area);
}
