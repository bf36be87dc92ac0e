//! Chart configuration builder
//!
//! Stateless mapping from expense categories, monthly budgets and trend
//! series to declarative chart configurations, plus the color helpers the
//! builders share.

pub mod builder;
pub mod color;
pub mod config;
pub mod palette;

pub use builder::{
    build_category_chart, build_monthly_chart, build_pie_chart, build_trend_chart, total,
};
pub use color::{hex_to_fill_color, Rgba};
pub use config::{share_percentage, ChartConfiguration, ChartKind};
pub use palette::{palette_color, PALETTE};
