//! Spending trend widget (lines)

use serde::Serialize;

use crate::charts::{build_trend_chart, ChartConfiguration, ChartKind};
use crate::models::{Money, TrendData, TrendDataset};

use super::engine::RenderEngine;
use super::lifecycle::{ChartBinding, ChartWidget};

pub const ADD_SERIES_LABEL: &str = "Adicionar Série";

/// Relative change between first and last value that counts as movement
pub const TREND_THRESHOLD: f64 = 0.05;

pub struct SpendingTrend;

impl ChartBinding for SpendingTrend {
    type Data = TrendData;

    const KIND: ChartKind = ChartKind::Line;
    const DEFAULT_ACTION_LABEL: &'static str = ADD_SERIES_LABEL;

    fn has_content(data: &Self::Data) -> bool {
        !data.labels.is_empty() && !data.datasets.is_empty()
    }

    fn build(data: &Self::Data) -> ChartConfiguration {
        build_trend_chart(&data.labels, &data.datasets)
    }
}

pub type LineWidget<E> = ChartWidget<SpendingTrend, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    /// Compare the last value with the first
    ///
    /// A change within 5% of the first value, or a zero first value, is stable.
    pub fn of(values: &[Money]) -> Self {
        let (Some(first), Some(last)) = (values.first(), values.last()) else {
            return Self::Stable;
        };
        if first.is_zero() {
            return Self::Stable;
        }
        let change = (last.cents() - first.cents()) as f64 / first.cents().abs() as f64;
        if change > TREND_THRESHOLD {
            Self::Up
        } else if change < -TREND_THRESHOLD {
            Self::Down
        } else {
            Self::Stable
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Stable => "■",
        }
    }
}

/// Per-series figures shown under the chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesMetric {
    pub label: String,
    pub color: Option<String>,
    pub average: Money,
    pub direction: TrendDirection,
}

impl SeriesMetric {
    pub fn of(dataset: &TrendDataset) -> Self {
        Self {
            label: dataset.label.clone(),
            color: dataset.color.clone(),
            average: Money::average(&dataset.data),
            direction: TrendDirection::of(&dataset.data),
        }
    }
}

impl<E: RenderEngine> ChartWidget<SpendingTrend, E> {
    pub fn metrics(&self) -> Vec<SeriesMetric> {
        self.data()
            .map(|trend| trend.datasets.iter().map(SeriesMetric::of).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::WidgetTimings;
    use crate::widgets::lifecycle::tests::RecordingEngine;
    use crate::widgets::lifecycle::{WidgetOptions, WidgetState};

    fn reais(values: &[i64]) -> Vec<Money> {
        values.iter().copied().map(Money::from_reais).collect()
    }

    #[test]
    fn test_direction() {
        assert_eq!(TrendDirection::of(&reais(&[100, 200])), TrendDirection::Up);
        assert_eq!(TrendDirection::of(&reais(&[200, 100])), TrendDirection::Down);
        assert_eq!(TrendDirection::of(&reais(&[100, 104])), TrendDirection::Stable);
        assert_eq!(TrendDirection::of(&reais(&[0, 500])), TrendDirection::Stable);
        assert_eq!(TrendDirection::of(&[]), TrendDirection::Stable);
    }

    #[test]
    fn test_metrics() {
        let (engine, _) = RecordingEngine::new();
        let mut widget: LineWidget<_> = ChartWidget::new(
            engine,
            WidgetOptions::for_binding::<SpendingTrend>(),
            WidgetTimings::default(),
        );
        widget.set_data(
            TrendData::new(
                vec!["Semana 1".into(), "Semana 2".into()],
                vec![TrendDataset::new("Alimentação", reais(&[100, 300])).with_color("#FF6384")],
            ),
            Duration::ZERO,
        );

        let metrics = widget.metrics();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].average, Money::from_reais(200));
        assert_eq!(metrics[0].direction, TrendDirection::Up);
        assert_eq!(metrics[0].color.as_deref(), Some("#FF6384"));
    }

    #[test]
    fn test_labels_without_series_stay_idle() {
        let (engine, _) = RecordingEngine::new();
        let mut widget: LineWidget<_> = ChartWidget::new(
            engine,
            WidgetOptions::for_binding::<SpendingTrend>(),
            WidgetTimings::default(),
        );
        widget.set_data(TrendData::new(vec!["Semana 1".into()], Vec::new()), Duration::ZERO);
        assert_eq!(widget.state(), WidgetState::Idle);
        assert!(!widget.action_enabled());
    }
}
