//! Core types for the lap-times workspace.
//!
//! Holds the race data model, the error type, command-line settings and the
//! number formatting shared by every presentation surface.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
