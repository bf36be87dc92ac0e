//! Terminal User Interface module
//!
//! Runs the expenses dashboard inside the terminal with ratatui: a
//! navigation drawer, the chart screen and the static pages.

pub mod app;
pub mod canvas;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Layout
pub mod layout;

pub use app::App;
pub use canvas::TerminalCanvas;
pub use terminal::run_tui;
