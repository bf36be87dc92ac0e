//! Carteira - terminal personal-finance dashboard
//!
//! This library turns expense, budget and trend data into chart
//! configurations and drives interactive chart widgets inside a terminal
//! UI with a navigation drawer.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `charts`: Chart configuration model and the builders that produce it
//! - `widgets`: Chart widgets with timed layout passes and teardown
//! - `screens`: The expenses screen, persona card and static pages
//! - `navigation`: Routes, menu and the drawer shell
//! - `models`: Money and the dashboard datasets
//! - `display`: Number formatting and terminal summaries
//! - `config`: Configuration and path management
//! - `cli`: Non-interactive commands
//! - `tui`: The ratatui front end
//!
//! # Example
//!
//! ```rust
//! use carteira::charts::build_category_chart;
//! use carteira::models::DashboardData;
//!
//! let data = DashboardData::mock();
//! let chart = build_category_chart(&data.categories);
//! assert_eq!(chart.point_count(), data.categories.len());
//! ```

pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod tui;
pub mod widgets;

pub use error::{CarteiraError, CarteiraResult};
