//! Data ingestion and statistics layer for lap-times.
//!
//! Reads and parses race logs and driver rosters, assembles the race
//! session, and computes the per-driver and race-wide lap statistics.

pub mod race_log;
pub mod reader;
pub mod report;
pub mod roster;
pub mod session;
pub mod statistics;

pub use laps_core as core;
