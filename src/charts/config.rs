//! Declarative chart configuration
//!
//! The value handed to a rendering engine: chart kind, labelled data series
//! and display options. Serializes to a Chart.js-shaped document. Formatter
//! callbacks are represented by [`TickFormat`] and [`TooltipFormat`] and
//! evaluated through [`ChartConfiguration::format_value_tick`] and
//! [`ChartConfiguration::tooltip_label`].

use serde::Serialize;

use crate::display::number::{format_currency_label, format_number, format_share};

/// Which chart an engine should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Pie,
    Bar,
    Line,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doughnut => "doughnut",
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Line => "line",
        }
    }

    /// Doughnut and pie charts plot one series as slices of a whole
    pub fn is_radial(&self) -> bool {
        matches!(self, Self::Doughnut | Self::Pie)
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full configuration for one chart instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfiguration {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Category labels plus the series plotted against them
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One color for the whole series, or one per point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Uniform(String),
    PerPoint(Vec<String>),
}

impl Paint {
    /// Color used for point `index`
    pub fn color_at(&self, index: usize) -> Option<&str> {
        match self {
            Self::Uniform(color) => Some(color),
            Self::PerPoint(colors) => colors.get(index).map(String::as_str),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Paint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<Paint>,
    pub border_color: Paint,
    pub border_width: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u8>,
    pub fill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(flatten)]
    pub points: Option<PointStyle>,
}

impl Dataset {
    /// Main color of the series, used for lines and legend swatches
    pub fn primary_color(&self) -> Option<&str> {
        match &self.border_color {
            Paint::Uniform(color) if self.points.is_some() => Some(color),
            _ => self.background_color.color_at(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointStyle {
    pub point_background_color: String,
    pub point_border_color: String,
    pub point_border_width: u8,
    pub point_radius: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    Index,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interaction {
    pub intersect: bool,
    pub mode: InteractionMode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickFormat>,
    pub grid: Grid,
}

/// How value-axis tick labels are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TickFormat {
    /// `R$ ` + pt-BR number
    Currency,
}

impl TickFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Currency => format_currency_label(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    pub position: LegendPosition,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub padding: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u16>,
    pub use_point_style: bool,
}

/// How tooltip text is built for a hovered point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipFormat {
    /// `"<label>: R$ <value> (<share>%)"`, share of the dataset total
    CategoryShare,
    /// `"<series>: R$ <value>"`
    SeriesValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub format: TooltipFormat,
}

/// Percentage of `value` in `total`. An all-zero or empty total yields 0
pub fn share_percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        value / total * 100.0
    }
}

impl ChartConfiguration {
    /// Total number of plotted points across all series
    pub fn point_count(&self) -> usize {
        self.data.datasets.iter().map(|d| d.data.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Tooltip text for point `index` of series `dataset`
    pub fn tooltip_label(&self, dataset: usize, index: usize) -> Option<String> {
        let series = self.data.datasets.get(dataset)?;
        let value = *series.data.get(index)?;
        let text = match self.options.plugins.tooltip.format {
            TooltipFormat::CategoryShare => {
                let label = self.data.labels.get(index).map(String::as_str).unwrap_or("");
                let total: f64 = series.data.iter().sum();
                format!(
                    "{}: {} ({}%)",
                    label,
                    format_currency_label(value),
                    format_share(share_percentage(value, total))
                )
            }
            TooltipFormat::SeriesValue => format!(
                "{}: {}",
                series.label.as_deref().unwrap_or(""),
                format_currency_label(value)
            ),
        };
        Some(text)
    }

    /// Tick label for `value` on the value axis
    pub fn format_value_tick(&self, value: f64) -> String {
        match self.options.scales.as_ref().and_then(|s| s.y.ticks) {
            Some(ticks) => ticks.format(value),
            None => format_number(value),
        }
    }

    /// Show or hide the legend
    pub fn with_legend_display(mut self, display: bool) -> Self {
        self.options.plugins.legend.display = display;
        self
    }

    /// Fill the container instead of keeping a fixed aspect ratio
    pub fn with_fluid_layout(mut self) -> Self {
        self.options.responsive = true;
        self.options.maintain_aspect_ratio = false;
        self.options.aspect_ratio = Some(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_percentage_guards_zero_total() {
        assert_eq!(share_percentage(25.0, 100.0), 25.0);
        assert_eq!(share_percentage(0.0, 0.0), 0.0);
        assert_eq!(share_percentage(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_paint_color_at() {
        let uniform = Paint::Uniform("#fff".into());
        assert_eq!(uniform.color_at(99), Some("#fff"));

        let per_point = Paint::PerPoint(vec!["#a".into(), "#b".into()]);
        assert_eq!(per_point.color_at(1), Some("#b"));
        assert_eq!(per_point.color_at(2), None);
    }

    #[test]
    fn test_paint_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Paint::Uniform("#fff".into())).unwrap(), r##""#fff""##);
        assert_eq!(
            serde_json::to_string(&Paint::PerPoint(vec!["#a".into()])).unwrap(),
            r##"["#a"]"##
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ChartKind::Doughnut.to_string(), "doughnut");
        assert!(ChartKind::Pie.is_radial());
        assert!(!ChartKind::Line.is_radial());
    }
}
