//! Display formatting for terminal output
//!
//! Locale-aware number and currency formatting, and the tabular dashboard
//! summary printed by the CLI.

pub mod number;
pub mod summary;

pub use number::{format_currency, format_number, format_share, NumberLocale};
pub use summary::DashboardSummary;
