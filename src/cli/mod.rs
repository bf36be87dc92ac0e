//! CLI command handlers
//!
//! Non-interactive commands, bridging clap argument parsing with the chart
//! builders, the summary tables and the navigation model.

pub mod chart;
pub mod menu;
pub mod summary;

pub use chart::{handle_chart_command, ChartArgs, ChartSelector, OutputFormat};
pub use menu::{handle_menu_command, MenuArgs};
pub use summary::{handle_summary_command, SummaryArgs};
