//! Terminal UI layer for lap-times.
//!
//! Provides themes, the header and menu components, table and bar-chart
//! result views, the plain-text summary renderer, and the interactive menu
//! event loop built on top of [`ratatui`].

pub mod app;
pub mod chart_view;
pub mod components;
pub mod summary;
pub mod table_view;
pub mod themes;

pub use laps_core as core;
