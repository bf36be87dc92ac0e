//! Expense breakdown widget (doughnut)

use crate::charts::{build_category_chart, total, ChartConfiguration, ChartKind};
use crate::models::{ExpenseCategory, Money};

use super::engine::RenderEngine;
use super::lifecycle::{ChartBinding, ChartWidget};

pub const ADD_ITEM_LABEL: &str = "Adicionar Item";

pub struct ExpenseBreakdown;

impl ChartBinding for ExpenseBreakdown {
    type Data = Vec<ExpenseCategory>;

    const KIND: ChartKind = ChartKind::Doughnut;
    const DEFAULT_ACTION_LABEL: &'static str = ADD_ITEM_LABEL;

    fn has_content(data: &Self::Data) -> bool {
        !data.is_empty()
    }

    fn build(data: &Self::Data) -> ChartConfiguration {
        build_category_chart(data)
    }
}

pub type DoughnutWidget<E> = ChartWidget<ExpenseBreakdown, E>;

impl<E: RenderEngine> ChartWidget<ExpenseBreakdown, E> {
    /// Sum of every category amount, shown under the chart
    pub fn total(&self) -> Money {
        self.data().map(|data| total(data)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::WidgetTimings;
    use crate::widgets::lifecycle::tests::RecordingEngine;
    use crate::widgets::lifecycle::{WidgetOptions, WidgetState};

    fn widget() -> DoughnutWidget<RecordingEngine> {
        let (engine, _) = RecordingEngine::new();
        ChartWidget::new(
            engine,
            WidgetOptions::for_binding::<ExpenseBreakdown>(),
            WidgetTimings::default(),
        )
    }

    #[test]
    fn test_action_label() {
        assert_eq!(widget().options().action_label, "Adicionar Item");
    }

    #[test]
    fn test_total() {
        let mut widget = widget();
        assert_eq!(widget.total(), Money::zero());

        widget.set_data(
            vec![
                ExpenseCategory::new("A", Money::from_reais(100)),
                ExpenseCategory::new("B", Money::from_cents(30050)),
            ],
            Duration::ZERO,
        );
        assert_eq!(widget.state(), WidgetState::Ready);
        assert_eq!(widget.total(), Money::from_cents(40050));
        assert_eq!(
            widget.configuration().map(|c| c.kind),
            Some(ChartKind::Doughnut)
        );
    }
}
