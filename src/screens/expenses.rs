//! Expenses screen
//!
//! Holds the dashboard datasets, hands them to the three chart widgets and
//! reacts to what the widgets report. The "add" actions replace a dataset
//! with a new value and push it to its widget, which rebuilds its chart.

use std::time::Duration;

use rand::Rng;

use crate::charts::ChartKind;
use crate::config::Settings;
use crate::models::{DashboardData, ExpenseCategory, Money, MonthlyBudget, TrendData};
use crate::widgets::{
    BarWidget, ChartInteraction, ChartWidget, ContainerSize, DoughnutWidget, ExpenseBreakdown,
    LineWidget, MonthlyComparison, RenderEngine, SpendingTrend, WidgetEvent, WidgetOptions,
};

/// Fixed budget of months appended by the add-month action
pub const NEW_MONTH_BUDGET: Money = Money::from_reais(6000);

/// Which chart the screen currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartView {
    #[default]
    Doughnut,
    Bar,
    Line,
}

impl ChartView {
    pub fn all() -> [ChartView; 3] {
        [ChartView::Doughnut, ChartView::Bar, ChartView::Line]
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Doughnut => ChartKind::Doughnut,
            Self::Bar => ChartKind::Bar,
            Self::Line => ChartKind::Line,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Doughnut => "Categorias",
            Self::Bar => "Mensal",
            Self::Line => "Tendência",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Doughnut => Self::Bar,
            Self::Bar => Self::Line,
            Self::Line => Self::Doughnut,
        }
    }
}

/// Add a random amount in [50, 250) to one category picked uniformly
///
/// Returns the new list and the index that changed. An empty list is
/// returned unchanged.
pub fn with_random_expense<R: Rng>(
    categories: &[ExpenseCategory],
    rng: &mut R,
) -> (Vec<ExpenseCategory>, Option<usize>) {
    let mut next = categories.to_vec();
    if next.is_empty() {
        return (next, None);
    }
    let index = rng.gen_range(0..next.len());
    next[index].amount += Money::from_reais(rng.gen_range(50..250));
    (next, Some(index))
}

/// Append "Mês N" with a random actual in [4000, 6000) and budget 6000
pub fn with_random_month<R: Rng>(months: &[MonthlyBudget], rng: &mut R) -> Vec<MonthlyBudget> {
    let mut next = months.to_vec();
    next.push(MonthlyBudget::new(
        format!("Mês {}", months.len() + 1),
        Money::from_reais(rng.gen_range(4000..6000)),
        NEW_MONTH_BUDGET,
    ));
    next
}

/// Append "Semana N" and one random value in [100, 300) to every series
///
/// Every series grows together with the labels.
pub fn with_random_week<R: Rng>(trend: &TrendData, rng: &mut R) -> TrendData {
    let mut labels = trend.labels.clone();
    labels.push(format!("Semana {}", trend.labels.len() + 1));

    let datasets = trend
        .datasets
        .iter()
        .map(|dataset| {
            let mut dataset = dataset.clone();
            dataset
                .data
                .push(Money::from_reais(rng.gen_range(100..300)));
            dataset
        })
        .collect();

    TrendData { labels, datasets }
}

/// Most recent interaction reported by a widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionNote {
    pub view: ChartView,
    pub clicked: bool,
    /// Tooltip text of the first active element, if any
    pub description: Option<String>,
}

pub struct ExpensesScreen<E: RenderEngine, R: Rng> {
    data: DashboardData,
    doughnut: DoughnutWidget<E>,
    bar: BarWidget<E>,
    line: LineWidget<E>,
    current: ChartView,
    rng: R,
    last_interaction: Option<InteractionNote>,
}

impl<E: RenderEngine, R: Rng> ExpensesScreen<E, R> {
    /// Build the screen and hand the initial datasets to its widgets
    ///
    /// `engine_for` is called once per chart kind.
    pub fn new<F>(
        data: DashboardData,
        settings: &Settings,
        mut engine_for: F,
        rng: R,
        now: Duration,
    ) -> Self
    where
        F: FnMut(ChartKind) -> E,
    {
        let timings = settings.timings;
        let options = |base: WidgetOptions, title: &str| WidgetOptions {
            show_legend: settings.show_legend,
            show_actions: settings.show_actions,
            ..base.with_title(title)
        };

        let mut screen = Self {
            doughnut: ChartWidget::new(
                engine_for(ChartKind::Doughnut),
                options(
                    WidgetOptions::for_binding::<ExpenseBreakdown>(),
                    "Distribuição de Gastos",
                ),
                timings,
            ),
            bar: ChartWidget::new(
                engine_for(ChartKind::Bar),
                options(
                    WidgetOptions::for_binding::<MonthlyComparison>(),
                    "Gastos vs Orçamento",
                ),
                timings,
            ),
            line: ChartWidget::new(
                engine_for(ChartKind::Line),
                options(
                    WidgetOptions::for_binding::<SpendingTrend>(),
                    "Tendência de Gastos",
                ),
                timings,
            ),
            data,
            current: ChartView::default(),
            rng,
            last_interaction: None,
        };

        screen.doughnut.set_data(screen.data.categories.clone(), now);
        screen.bar.set_data(screen.data.months.clone(), now);
        screen.line.set_data(screen.data.trend.clone(), now);
        screen
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn current_chart(&self) -> ChartView {
        self.current
    }

    pub fn switch_chart(&mut self, view: ChartView) {
        if self.current != view {
            tracing::debug!(chart = view.label(), "chart switched");
        }
        self.current = view;
    }

    pub fn doughnut(&self) -> &DoughnutWidget<E> {
        &self.doughnut
    }

    pub fn bar(&self) -> &BarWidget<E> {
        &self.bar
    }

    pub fn line(&self) -> &LineWidget<E> {
        &self.line
    }

    pub fn doughnut_mut(&mut self) -> &mut DoughnutWidget<E> {
        &mut self.doughnut
    }

    pub fn bar_mut(&mut self) -> &mut BarWidget<E> {
        &mut self.bar
    }

    pub fn line_mut(&mut self) -> &mut LineWidget<E> {
        &mut self.line
    }

    /// Sum of all expense categories
    pub fn total_expenses(&self) -> Money {
        crate::charts::total(&self.data.categories)
    }

    pub fn last_interaction(&self) -> Option<&InteractionNote> {
        self.last_interaction.as_ref()
    }

    pub fn add_expense(&mut self, now: Duration) {
        let (categories, changed) = with_random_expense(&self.data.categories, &mut self.rng);
        if let Some(index) = changed {
            tracing::info!(
                category = %categories[index].category,
                amount = %categories[index].amount,
                "expense added"
            );
        }
        self.data.categories = categories;
        self.doughnut.set_data(self.data.categories.clone(), now);
    }

    pub fn add_month(&mut self, now: Duration) {
        self.data.months = with_random_month(&self.data.months, &mut self.rng);
        if let Some(month) = self.data.months.last() {
            tracing::info!(month = %month.month, actual = %month.actual, "month added");
        }
        self.bar.set_data(self.data.months.clone(), now);
    }

    pub fn add_trend_week(&mut self, now: Duration) {
        self.data.trend = with_random_week(&self.data.trend, &mut self.rng);
        tracing::info!(periods = self.data.trend.period_count(), "trend period added");
        self.line.set_data(self.data.trend.clone(), now);
    }

    /// Run the add action of the visible chart, if its widget allows it
    pub fn press_action(&mut self) -> bool {
        match self.current {
            ChartView::Doughnut => self.doughnut.press_action(),
            ChartView::Bar => self.bar.press_action(),
            ChartView::Line => self.line.press_action(),
        }
    }

    /// Attach every widget to a container of `size`
    pub fn attach(&mut self, size: ContainerSize, now: Duration) {
        self.doughnut.attach(size, now);
        self.bar.attach(size, now);
        self.line.attach(size, now);
    }

    pub fn container_resized(&mut self, size: ContainerSize, now: Duration) {
        self.doughnut.container_resized(size, now);
        self.bar.container_resized(size, now);
        self.line.container_resized(size, now);
    }

    /// Drive widget timers and handle the events they raise
    ///
    /// Returns the number of events handled.
    pub fn poll(&mut self, now: Duration) -> usize {
        self.doughnut.tick(now);
        self.bar.tick(now);
        self.line.tick(now);

        let mut events: Vec<(ChartView, WidgetEvent)> = Vec::new();
        events.extend(
            self.doughnut
                .drain_events()
                .into_iter()
                .map(|e| (ChartView::Doughnut, e)),
        );
        events.extend(self.bar.drain_events().into_iter().map(|e| (ChartView::Bar, e)));
        events.extend(self.line.drain_events().into_iter().map(|e| (ChartView::Line, e)));

        let handled = events.len();
        for (view, event) in events {
            self.handle_event(view, event, now);
        }
        handled
    }

    fn handle_event(&mut self, view: ChartView, event: WidgetEvent, now: Duration) {
        match event {
            WidgetEvent::Click(interaction) => {
                tracing::info!(chart = view.label(), active = interaction.active.len(), "chart clicked");
                if interaction.has_active() {
                    tracing::info!(chart = view.label(), "clicked on chart element");
                }
                self.record_interaction(view, &interaction, true);
            }
            WidgetEvent::Hover(interaction) => {
                tracing::debug!(chart = view.label(), active = interaction.active.len(), "chart hovered");
                self.record_interaction(view, &interaction, false);
            }
            WidgetEvent::Action => match view {
                ChartView::Doughnut => self.add_expense(now),
                ChartView::Bar => self.add_month(now),
                ChartView::Line => self.add_trend_week(now),
            },
        }
    }

    fn record_interaction(&mut self, view: ChartView, interaction: &ChartInteraction, clicked: bool) {
        let config = match view {
            ChartView::Doughnut => self.doughnut.configuration(),
            ChartView::Bar => self.bar.configuration(),
            ChartView::Line => self.line.configuration(),
        };
        let description = interaction.active.first().and_then(|element| {
            config.and_then(|c| c.tooltip_label(element.dataset_index, element.index))
        });
        self.last_interaction = Some(InteractionNote {
            view,
            clicked,
            description,
        });
    }

    /// Tear down every widget
    pub fn dispose(&mut self) {
        self.doughnut.dispose();
        self.bar.dispose();
        self.line.dispose();
    }
}
