use laps_core::formatting::pluralize;
use ratatui::text::{Line, Span};

use crate::themes::Theme;

/// Chequered-flag decoration placed either side of the race title.
pub const FLAGS: &str = "▚▞▚▞";

/// Width of the `=` rule under the title.
pub const SEPARATOR_WIDTH: usize = 60;

/// Race header rendering four lines:
///
/// 1. Race name between flag decorations.
/// 2. A 60-column `=` separator.
/// 3. Totals in `[ drivers | laps | skipped ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    pub race_name: &'a str,
    /// Drivers with at least one recorded lap.
    pub drivers: usize,
    pub laps: usize,
    /// Input lines the parsers discarded.
    pub skipped: usize,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(
        race_name: &'a str,
        drivers: usize,
        laps: usize,
        skipped: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            race_name,
            drivers,
            laps,
            skipped,
            theme,
        }
    }

    /// Render the header as exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let title = if self.race_name.is_empty() {
            " UNNAMED RACE ".to_string()
        } else {
            format!(" RACE: {} ", self.race_name)
        };

        let skipped_style = if self.skipped > 0 {
            self.theme.warning
        } else {
            self.theme.value
        };

        vec![
            Line::from(vec![
                Span::styled(FLAGS, self.theme.header_accent),
                Span::styled(title, self.theme.header),
                Span::styled(FLAGS, self.theme.header_accent),
            ]),
            Line::from(Span::styled(
                "=".repeat(SEPARATOR_WIDTH),
                self.theme.separator,
            )),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(pluralize(self.drivers, "driver"), self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(pluralize(self.laps, "lap"), self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(format!("{} skipped", self.skipped), skipped_style),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
