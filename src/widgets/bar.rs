//! Monthly spending versus budget widget (grouped bars)

use crate::charts::{build_monthly_chart, ChartConfiguration, ChartKind};
use crate::models::{Money, MonthlyBudget};

use super::engine::RenderEngine;
use super::lifecycle::{ChartBinding, ChartWidget};

pub const ADD_MONTH_LABEL: &str = "Adicionar Mês";

pub struct MonthlyComparison;

impl ChartBinding for MonthlyComparison {
    type Data = Vec<MonthlyBudget>;

    const KIND: ChartKind = ChartKind::Bar;
    const DEFAULT_ACTION_LABEL: &'static str = ADD_MONTH_LABEL;

    fn has_content(data: &Self::Data) -> bool {
        !data.is_empty()
    }

    fn build(data: &Self::Data) -> ChartConfiguration {
        build_monthly_chart(data)
    }
}

pub type BarWidget<E> = ChartWidget<MonthlyComparison, E>;

impl<E: RenderEngine> ChartWidget<MonthlyComparison, E> {
    /// Mean actual spending across months
    pub fn average_actual(&self) -> Money {
        let months = self.data().map(Vec::as_slice).unwrap_or_default();
        Money::average(months.iter().map(|m| &m.actual))
    }

    /// Mean planned budget across months
    pub fn average_budget(&self) -> Money {
        let months = self.data().map(Vec::as_slice).unwrap_or_default();
        Money::average(months.iter().map(|m| &m.budget))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::WidgetTimings;
    use crate::widgets::lifecycle::tests::RecordingEngine;
    use crate::widgets::lifecycle::WidgetOptions;

    fn widget() -> BarWidget<RecordingEngine> {
        let (engine, _) = RecordingEngine::new();
        ChartWidget::new(
            engine,
            WidgetOptions::for_binding::<MonthlyComparison>(),
            WidgetTimings::default(),
        )
    }

    #[test]
    fn test_averages() {
        let mut widget = widget();
        assert_eq!(widget.average_actual(), Money::zero());

        widget.set_data(
            vec![
                MonthlyBudget::new("Jan", Money::from_reais(4000), Money::from_reais(6000)),
                MonthlyBudget::new("Fev", Money::from_reais(5000), Money::from_reais(6000)),
            ],
            Duration::ZERO,
        );
        assert_eq!(widget.average_actual(), Money::from_reais(4500));
        assert_eq!(widget.average_budget(), Money::from_reais(6000));
        assert_eq!(widget.options().action_label, "Adicionar Mês");
    }

    #[test]
    fn test_empty_months_disable_action() {
        let mut widget = widget();
        widget.set_data(Vec::new(), Duration::ZERO);
        assert!(!widget.action_enabled());
        assert!(!widget.press_action());
    }
}
