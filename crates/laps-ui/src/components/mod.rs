//! Reusable building blocks shared by the menu screen.

pub mod header;
pub mod menu;
