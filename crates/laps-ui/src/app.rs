//! Main application state and TUI event loop for lap-times.
//!
//! [`App`] owns the theme, the loaded race session and the menu state.
//! Key handling and result building are pure so they can be tested
//! without a terminal; [`App::run`] is the thin crossterm adapter.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use laps_core::formatting::format_seconds_with_unit;
use laps_core::models::RaceSession;
use laps_data::statistics::{DriverAverage, DriverLap, DriverRow, LapCount, StatisticsEngine};

use crate::chart_view;
use crate::components::header::Header;
use crate::components::menu::{Menu, MenuItem};
use crate::table_view;
use crate::themes::Theme;

/// Width of the menu column, wide enough for the longest label.
const MENU_WIDTH: u16 = 42;

// ── LapKind ───────────────────────────────────────────────────────────────────

/// Which per-driver lap extreme a lap table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapKind {
    Fastest,
    Slowest,
}

impl LapKind {
    pub fn title(self) -> &'static str {
        match self {
            LapKind::Fastest => "Fastest Laps (in descending order)",
            LapKind::Slowest => "Slowest Laps (in ascending order)",
        }
    }

    pub fn value_header(self) -> &'static str {
        match self {
            LapKind::Fastest => "Fastest Lap (seconds)",
            LapKind::Slowest => "Slowest Lap (seconds)",
        }
    }

    pub fn chart_title(self) -> &'static str {
        match self {
            LapKind::Fastest => "Fastest Laps by Driver",
            LapKind::Slowest => "Slowest Laps by Driver",
        }
    }
}

// ── ResultView ────────────────────────────────────────────────────────────────

/// Engine output for one menu entry, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Laps { kind: LapKind, laps: Vec<DriverLap> },
    Averages(Vec<DriverAverage>),
    LapCounts(Vec<LapCount>),
    Drivers(Vec<DriverRow>),
    /// One-line answer such as the overall fastest driver.
    Headline { title: &'static str, text: String },
    NoData { title: &'static str, message: &'static str },
}

impl ResultView {
    /// Run the engine query behind `item` against `session`.
    ///
    /// [`MenuItem::Exit`] has no result and yields `None`.
    pub fn build(item: MenuItem, session: &RaceSession) -> Option<Self> {
        let log = &session.lap_log;
        let view = match item {
            MenuItem::FastestLaps => Self::laps(LapKind::Fastest, StatisticsEngine::fastest_per_driver(log)),
            MenuItem::SlowestLaps => Self::laps(LapKind::Slowest, StatisticsEngine::slowest_per_driver(log)),
            MenuItem::OverallFastest => match StatisticsEngine::overall_fastest(log) {
                Some(lap) => ResultView::Headline {
                    title: "Overall Fastest Driver",
                    text: format!(
                        "Overall Fastest Driver: {} with a lap time of {}.",
                        lap.code,
                        format_seconds_with_unit(lap.time)
                    ),
                },
                None => ResultView::NoData {
                    title: "Overall Fastest Driver",
                    message: "No lap data available to determine the fastest driver.",
                },
            },
            MenuItem::OverallSlowest => match StatisticsEngine::overall_slowest(log) {
                Some(lap) => ResultView::Headline {
                    title: "Overall Slowest Driver",
                    text: format!(
                        "Overall Slowest Driver: {} with a lap time of {}.",
                        lap.code,
                        format_seconds_with_unit(lap.time)
                    ),
                },
                None => ResultView::NoData {
                    title: "Overall Slowest Driver",
                    message: "No lap data available to determine the slowest driver.",
                },
            },
            MenuItem::OverallAverage => match StatisticsEngine::overall_average(log) {
                Some(avg) => ResultView::Headline {
                    title: "Overall Average",
                    text: format!("Overall Average Time: {}", format_seconds_with_unit(avg)),
                },
                None => ResultView::NoData {
                    title: "Overall Average",
                    message: "No lap times available to calculate the average.",
                },
            },
            MenuItem::DriverAverages => {
                let averages = StatisticsEngine::average_leaderboard(log);
                if averages.is_empty() {
                    ResultView::NoData {
                        title: "Driver Averages",
                        message: "No averages available.",
                    }
                } else {
                    ResultView::Averages(averages)
                }
            }
            MenuItem::LapCounts => {
                let counts = StatisticsEngine::lap_count_leaderboard(log);
                if counts.is_empty() {
                    ResultView::NoData {
                        title: "Laps Completed",
                        message: "No lap counts available.",
                    }
                } else {
                    ResultView::LapCounts(counts)
                }
            }
            MenuItem::DriverInfo => {
                let drivers = StatisticsEngine::merged_driver_view(&session.roster, log);
                if drivers.is_empty() {
                    ResultView::NoData {
                        title: "Driver Information",
                        message: "No driver information to display.",
                    }
                } else {
                    ResultView::Drivers(drivers)
                }
            }
            MenuItem::Exit => return None,
        };
        Some(view)
    }

    fn laps(kind: LapKind, laps: Vec<DriverLap>) -> Self {
        if laps.is_empty() {
            ResultView::NoData {
                title: kind.title(),
                message: "No lap times available.",
            }
        } else {
            ResultView::Laps { kind, laps }
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the lap-times menu.
pub struct App {
    pub theme: Theme,
    pub session: RaceSession,
    /// Index into [`MenuItem::ALL`] under the cursor.
    pub selected: usize,
    /// Entry whose result is on screen.
    pub active: Option<MenuItem>,
    /// Result of the active entry, computed when it was opened.
    pub result: Option<ResultView>,
    /// Show the bar chart instead of the table for lap results.
    pub show_chart: bool,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    pub fn new(theme_name: &str, session: RaceSession) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            session,
            selected: 0,
            active: None,
            result: None,
            show_chart: false,
            should_quit: false,
        }
    }

    // ── State transitions ─────────────────────────────────────────────────────

    /// Open `item`: compute its result, or quit for [`MenuItem::Exit`].
    pub fn open(&mut self, item: MenuItem) {
        self.selected = item.index();
        self.show_chart = false;
        match ResultView::build(item, &self.session) {
            Some(view) => {
                self.result = Some(view);
                self.active = Some(item);
            }
            None => self.should_quit = true,
        }
    }

    /// Close the result panel.
    pub fn close(&mut self) {
        self.active = None;
        self.result = None;
        self.show_chart = false;
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(item) = MenuItem::from_digit(c) {
                    self.open(item);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(MenuItem::ALL.len() - 1);
            }
            KeyCode::Enter => {
                if let Some(&item) = MenuItem::ALL.get(self.selected) {
                    self.open(item);
                }
            }
            KeyCode::Esc | KeyCode::Backspace => self.close(),
            KeyCode::Char('g') | KeyCode::Char('G') => {
                if self.active.is_some_and(MenuItem::has_chart) {
                    self.show_chart = !self.show_chart;
                }
            }
            _ => {}
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the interactive menu until the user quits.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout; only key presses
    /// are handled so releases on some platforms do not double-fire.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let header = Header::new(
            &self.session.race_name,
            self.session.lap_log.len(),
            self.session.lap_log.total_laps(),
            self.session.skipped.len(),
            &self.theme,
        );
        frame.render_widget(Paragraph::new(Text::from(header.to_lines())), chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);

        let menu = Menu::new(self.selected, self.active, &self.theme);
        frame.render_widget(
            Paragraph::new(Text::from(menu.to_lines())).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.table_border)
                    .title(" Race Results Menu "),
            ),
            body[0],
        );

        self.render_result(frame, body[1]);

        frame.render_widget(Paragraph::new(self.footer()), chunks[2]);
    }

    fn render_result(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let Some(result) = &self.result else {
            table_view::render_message(
                frame,
                area,
                "Results",
                "Pick an option (1-9) or press q to quit.",
                theme,
            );
            return;
        };

        match result {
            ResultView::Laps { kind, laps } if self.show_chart => {
                let style = match kind {
                    LapKind::Fastest => theme.bar_fastest,
                    LapKind::Slowest => theme.bar_slowest,
                };
                chart_view::render_lap_chart(frame, area, kind.chart_title(), laps, style, theme);
            }
            ResultView::Laps { kind, laps } => table_view::render_value_table(
                frame,
                area,
                kind.title(),
                ["Driver", kind.value_header()],
                &table_view::lap_rows(laps),
                theme,
            ),
            ResultView::Averages(averages) => table_view::render_value_table(
                frame,
                area,
                "Driver Averages (sorted by average lap time)",
                ["Driver", "Average Lap Time (seconds)"],
                &table_view::average_rows(averages),
                theme,
            ),
            ResultView::LapCounts(counts) => table_view::render_value_table(
                frame,
                area,
                "Laps Completed by Each Driver",
                ["Driver", "Laps Completed"],
                &table_view::lap_count_rows(counts),
                theme,
            ),
            ResultView::Drivers(drivers) => {
                table_view::render_driver_table(frame, area, &table_view::driver_rows(drivers), theme)
            }
            ResultView::Headline { title, text } => {
                table_view::render_message(frame, area, title, text, theme)
            }
            ResultView::NoData { title, message } => {
                table_view::render_no_data(frame, area, title, message, theme)
            }
        }
    }

    fn footer(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(" 1-9", self.theme.info),
            Span::styled(" open  ", self.theme.dim),
            Span::styled("↑/↓ Enter", self.theme.info),
            Span::styled(" select  ", self.theme.dim),
            Span::styled("Esc", self.theme.info),
            Span::styled(" back  ", self.theme.dim),
        ];
        if self.active.is_some_and(MenuItem::has_chart) {
            let label = if self.show_chart { " table  " } else { " graph  " };
            spans.push(Span::styled("g", self.theme.info));
            spans.push(Span::styled(label, self.theme.dim));
        }
        spans.push(Span::styled("q", self.theme.info));
        spans.push(Span::styled(" quit", self.theme.dim));
        Line::from(spans)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
