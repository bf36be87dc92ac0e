//! Chart widgets
//!
//! Stateful wrappers binding a data type to a rendering engine, with timed
//! layout passes, teardown and interaction forwarding.

pub mod bar;
pub mod doughnut;
pub mod engine;
pub mod lifecycle;
pub mod line;
pub mod timers;

pub use bar::{BarWidget, MonthlyComparison};
pub use doughnut::{DoughnutWidget, ExpenseBreakdown};
pub use engine::{ActiveElement, ChartInteraction, EngineNotification, RenderEngine};
pub use lifecycle::{
    ChartBinding, ChartWidget, ContainerSize, WidgetEvent, WidgetOptions, WidgetState,
};
pub use line::{LineWidget, SeriesMetric, SpendingTrend, TrendDirection};
pub use timers::{TimerKind, Timers};
