use ratatui::text::{Line, Span};

use crate::themes::Theme;

/// One entry of the race results menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    FastestLaps,
    SlowestLaps,
    OverallFastest,
    OverallSlowest,
    OverallAverage,
    DriverAverages,
    LapCounts,
    DriverInfo,
    Exit,
}

impl MenuItem {
    /// All entries in display order.
    pub const ALL: [MenuItem; 9] = [
        MenuItem::FastestLaps,
        MenuItem::SlowestLaps,
        MenuItem::OverallFastest,
        MenuItem::OverallSlowest,
        MenuItem::OverallAverage,
        MenuItem::DriverAverages,
        MenuItem::LapCounts,
        MenuItem::DriverInfo,
        MenuItem::Exit,
    ];

    /// 1-based menu number.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// 0-based position in [`MenuItem::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&item| item == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::FastestLaps => "Show Fastest Lap Times",
            MenuItem::SlowestLaps => "Show Slowest Lap Times",
            MenuItem::OverallFastest => "Show Overall Fastest Driver",
            MenuItem::OverallSlowest => "Show Overall Slowest Driver",
            MenuItem::OverallAverage => "Show Average Lap Time Overall",
            MenuItem::DriverAverages => "Show Driver Averages",
            MenuItem::LapCounts => "Show How Many Laps Each Driver Did",
            MenuItem::DriverInfo => "Show Driver Info",
            MenuItem::Exit => "Exit",
        }
    }

    /// Map a typed digit (`'1'`..=`'9'`) to its entry.
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    /// Whether the result can also be shown as a bar chart.
    pub fn has_chart(self) -> bool {
        matches!(self, MenuItem::FastestLaps | MenuItem::SlowestLaps)
    }
}

/// Menu list rendering one line per [`MenuItem`].
///
/// The entry under the cursor uses `menu_selected`; the entry whose result
/// is on screen is marked with `menu_active`.
pub struct Menu<'a> {
    pub selected: usize,
    pub active: Option<MenuItem>,
    pub theme: &'a Theme,
}

impl<'a> Menu<'a> {
    pub fn new(selected: usize, active: Option<MenuItem>, theme: &'a Theme) -> Self {
        Self {
            selected,
            active,
            theme,
        }
    }

    pub fn to_lines(&self) -> Vec<Line<'a>> {
        MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, &item)| {
                let marker = if self.active == Some(item) { "▶ " } else { "  " };
                let style = if i == self.selected {
                    self.theme.menu_selected
                } else if self.active == Some(item) {
                    self.theme.menu_active
                } else {
                    self.theme.menu_item
                };
                Line::from(vec![
                    Span::styled(marker, self.theme.menu_active),
                    Span::styled(format!("{}. {}", item.number(), item.label()), style),
                ])
            })
            .collect()
    }
}
