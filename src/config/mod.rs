//! Configuration module for Carteira
//!
//! - XDG-compliant path resolution
//! - User settings persistence (widget defaults, timings, breakpoints, logging)

pub mod paths;
pub mod settings;

pub use paths::CarteiraPaths;
pub use settings::{Settings, WidgetTimings};
