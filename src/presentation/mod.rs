//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the movie grid with ratatui and maps key presses
//! onto application actions.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
