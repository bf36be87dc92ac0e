//! Chart widget lifecycle
//!
//! A widget owns one rendering engine, the configuration last handed to it,
//! and the timers that drive layout passes. Every operation takes the current
//! logical time; the event loop calls [`ChartWidget::tick`] to fire due
//! timers and collect interactions.

use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use crate::charts::{ChartConfiguration, ChartKind};
use crate::config::WidgetTimings;

use super::engine::{ChartInteraction, EngineNotification, RenderEngine};
use super::timers::{TimerKind, Timers};

/// How a data type becomes a chart
pub trait ChartBinding {
    type Data: Clone + PartialEq + fmt::Debug;

    const KIND: ChartKind;

    /// Label of the widget's action control
    const DEFAULT_ACTION_LABEL: &'static str;

    /// Whether `data` has anything to plot
    fn has_content(data: &Self::Data) -> bool;

    fn build(data: &Self::Data) -> ChartConfiguration;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// Created, no data received yet
    Uninitialized,
    /// Data received but nothing to plot
    Idle,
    /// An engine instance holds a configuration
    Ready,
    /// Torn down. Every later call is ignored
    Disposed,
}

/// Container dimensions in layout units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSize {
    pub width: u16,
    pub height: u16,
}

impl ContainerSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Notifications a widget raises to its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Click(ChartInteraction),
    Hover(ChartInteraction),
    /// The action control was activated
    Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    pub title: Option<String>,
    pub show_legend: bool,
    pub show_actions: bool,
    pub action_label: String,
    /// Show the widget's figures (total, averages or per-series metrics)
    pub show_metrics: bool,
}

impl WidgetOptions {
    pub fn for_binding<B: ChartBinding>() -> Self {
        Self {
            title: None,
            show_legend: true,
            show_actions: false,
            action_label: B::DEFAULT_ACTION_LABEL.to_string(),
            show_metrics: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_actions(mut self, show: bool) -> Self {
        self.show_actions = show;
        self
    }
}

pub struct ChartWidget<B: ChartBinding, E: RenderEngine> {
    engine: E,
    options: WidgetOptions,
    timings: WidgetTimings,
    state: WidgetState,
    data: Option<B::Data>,
    configuration: Option<ChartConfiguration>,
    timers: Timers,
    container: Option<ContainerSize>,
    events: Vec<WidgetEvent>,
    layout_passes: u64,
    _binding: PhantomData<B>,
}

impl<B: ChartBinding, E: RenderEngine> ChartWidget<B, E> {
    pub fn new(engine: E, options: WidgetOptions, timings: WidgetTimings) -> Self {
        Self {
            engine,
            options,
            timings,
            state: WidgetState::Uninitialized,
            data: None,
            configuration: None,
            timers: Timers::new(),
            container: None,
            events: Vec::new(),
            layout_passes: 0,
            _binding: PhantomData,
        }
    }

    /// Replace the widget's data and rebuild its chart
    ///
    /// Data with nothing to plot leaves the widget idle and clears any chart
    /// already drawn. Otherwise the configuration is rebuilt from scratch, the
    /// engine receives it, and a layout pass is scheduled.
    pub fn set_data(&mut self, data: B::Data, now: Duration) {
        if self.state == WidgetState::Disposed {
            return;
        }

        if !B::has_content(&data) {
            if self.configuration.take().is_some() {
                self.engine.clear();
            }
            self.data = Some(data);
            self.state = WidgetState::Idle;
            tracing::debug!(chart = %B::KIND, "no data to plot");
            return;
        }

        let config = B::build(&data)
            .with_legend_display(self.options.show_legend)
            .with_fluid_layout();
        self.engine.set_chart(&config);
        tracing::debug!(
            chart = %B::KIND,
            points = config.point_count(),
            "chart configuration rebuilt"
        );

        self.configuration = Some(config);
        self.data = Some(data);
        self.state = WidgetState::Ready;
        self.timers
            .debounce(TimerKind::PostUpdate, now, self.timings.post_update());
    }

    /// Start observing a container and schedule the initial layout pass
    pub fn attach(&mut self, size: ContainerSize, now: Duration) {
        if self.state == WidgetState::Disposed {
            return;
        }
        self.container = Some(size);
        self.timers
            .debounce(TimerKind::InitialLayout, now, self.timings.initial_layout());
    }

    /// Report a new container size. Layout follows after the debounce delay
    pub fn container_resized(&mut self, size: ContainerSize, now: Duration) {
        if self.state == WidgetState::Disposed {
            return;
        }
        match self.container {
            Some(current) if current == size => {}
            Some(_) => {
                self.container = Some(size);
                self.timers
                    .debounce(TimerKind::Relayout, now, self.timings.relayout_debounce());
            }
            None => {}
        }
    }

    /// Fire due timers and collect engine interactions
    ///
    /// Returns the number of layout passes performed.
    pub fn tick(&mut self, now: Duration) -> usize {
        if self.state == WidgetState::Disposed {
            return 0;
        }

        let mut passes = 0;
        for kind in self.timers.take_due(now) {
            if self.configuration.is_some() {
                self.engine.resize();
                self.layout_passes += 1;
                passes += 1;
                tracing::trace!(chart = %B::KIND, ?kind, "layout pass");
            }
        }

        for notification in self.engine.poll_interactions() {
            self.notify(notification);
        }
        passes
    }

    /// Forward an engine interaction to the parent
    pub fn notify(&mut self, notification: EngineNotification) {
        if self.state != WidgetState::Ready {
            return;
        }
        let event = match notification {
            EngineNotification::Click(interaction) => WidgetEvent::Click(interaction),
            EngineNotification::Hover(interaction) => WidgetEvent::Hover(interaction),
        };
        self.events.push(event);
    }

    /// Activate the action control. Returns whether the action was raised
    pub fn press_action(&mut self) -> bool {
        if !self.action_enabled() {
            return false;
        }
        self.events.push(WidgetEvent::Action);
        true
    }

    /// The action control is shown and there is data to act on
    pub fn action_enabled(&self) -> bool {
        self.state != WidgetState::Disposed
            && self.options.show_actions
            && self.data.as_ref().is_some_and(B::has_content)
    }

    pub fn drain_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }

    /// Show or hide the legend, rebuilding the chart if one is drawn
    pub fn set_show_legend(&mut self, show: bool, now: Duration) {
        if self.options.show_legend == show {
            return;
        }
        self.options.show_legend = show;
        if let Some(data) = self.data.clone() {
            self.set_data(data, now);
        }
    }

    /// Tear the widget down
    ///
    /// Pending timers are cancelled and the container is no longer observed.
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.state == WidgetState::Disposed {
            return;
        }
        self.timers.cancel_all();
        self.container = None;
        self.events.clear();
        self.state = WidgetState::Disposed;
        tracing::debug!(chart = %B::KIND, "widget disposed");
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn data(&self) -> Option<&B::Data> {
        self.data.as_ref()
    }

    pub fn configuration(&self) -> Option<&ChartConfiguration> {
        self.configuration.as_ref()
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn is_observing(&self) -> bool {
        self.container.is_some()
    }

    pub fn container(&self) -> Option<ContainerSize> {
        self.container
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }
}

impl<B: ChartBinding, E: RenderEngine> Drop for ChartWidget<B, E> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::charts::build_category_chart;
    use crate::models::{ExpenseCategory, Money};

    /// What a recording engine was asked to do
    #[derive(Debug, Clone, PartialEq)]
    pub enum EngineCall {
        SetChart(ChartKind, usize),
        Clear,
        Resize,
    }

    /// Engine that records calls into a log shared with the test
    #[derive(Default)]
    pub struct RecordingEngine {
        pub log: Rc<RefCell<Vec<EngineCall>>>,
        pub queued: Vec<EngineNotification>,
    }

    impl RecordingEngine {
        pub fn new() -> (Self, Rc<RefCell<Vec<EngineCall>>>) {
            let engine = Self::default();
            let log = Rc::clone(&engine.log);
            (engine, log)
        }
    }

    impl RenderEngine for RecordingEngine {
        fn set_chart(&mut self, config: &ChartConfiguration) {
            self.log
                .borrow_mut()
                .push(EngineCall::SetChart(config.kind, config.point_count()));
        }

        fn clear(&mut self) {
            self.log.borrow_mut().push(EngineCall::Clear);
        }

        fn resize(&mut self) {
            self.log.borrow_mut().push(EngineCall::Resize);
        }

        fn poll_interactions(&mut self) -> Vec<EngineNotification> {
            std::mem::take(&mut self.queued)
        }
    }

    struct Slices;

    impl ChartBinding for Slices {
        type Data = Vec<ExpenseCategory>;
        const KIND: ChartKind = ChartKind::Doughnut;
        const DEFAULT_ACTION_LABEL: &'static str = "Adicionar";

        fn has_content(data: &Self::Data) -> bool {
            !data.is_empty()
        }

        fn build(data: &Self::Data) -> ChartConfiguration {
            build_category_chart(data)
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn widget() -> (ChartWidget<Slices, RecordingEngine>, Rc<RefCell<Vec<EngineCall>>>) {
        let (engine, log) = RecordingEngine::new();
        let widget = ChartWidget::new(
            engine,
            WidgetOptions::for_binding::<Slices>().with_actions(true),
            WidgetTimings::default(),
        );
        (widget, log)
    }

    fn sample() -> Vec<ExpenseCategory> {
        vec![
            ExpenseCategory::new("A", Money::from_reais(100)),
            ExpenseCategory::new("B", Money::from_reais(300)),
        ]
    }

    fn resizes(log: &Rc<RefCell<Vec<EngineCall>>>) -> usize {
        log.borrow()
            .iter()
            .filter(|call| **call == EngineCall::Resize)
            .count()
    }

    #[test]
    fn test_starts_uninitialized() {
        let (widget, log) = widget();
        assert_eq!(widget.state(), WidgetState::Uninitialized);
        assert!(widget.configuration().is_none());
        assert!(!widget.action_enabled());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_set_data_builds_fluid_configuration() {
        let (mut widget, log) = widget();
        widget.set_data(sample(), ms(0));

        assert_eq!(widget.state(), WidgetState::Ready);
        let config = widget.configuration().unwrap();
        assert!(config.options.responsive);
        assert!(!config.options.maintain_aspect_ratio);
        assert_eq!(config.options.aspect_ratio, Some(0.0));
        assert!(config.options.plugins.legend.display);
        assert_eq!(
            *log.borrow(),
            vec![EngineCall::SetChart(ChartKind::Doughnut, 2)]
        );
    }

    #[test]
    fn test_empty_data_stays_idle() {
        let (mut widget, log) = widget();
        widget.set_data(Vec::new(), ms(0));

        assert_eq!(widget.state(), WidgetState::Idle);
        assert!(widget.configuration().is_none());
        assert!(log.borrow().is_empty());
        assert_eq!(widget.pending_timers(), 0);
    }

    #[test]
    fn test_data_emptied_after_ready_clears_engine() {
        let (mut widget, log) = widget();
        widget.set_data(sample(), ms(0));
        widget.set_data(Vec::new(), ms(10));

        assert_eq!(widget.state(), WidgetState::Idle);
        assert!(widget.configuration().is_none());
        assert_eq!(log.borrow().last(), Some(&EngineCall::Clear));
    }

    #[test]
    fn test_post_update_layout_after_50ms() {
        let (mut widget, log) = widget();
        widget.set_data(sample(), ms(0));

        assert_eq!(widget.tick(ms(49)), 0);
        assert_eq!(widget.tick(ms(50)), 1);
        assert_eq!(resizes(&log), 1);
    }

    #[test]
    fn test_initial_layout_after_100ms() {
        let (mut widget, log) = widget();
        widget.set_data(sample(), ms(0));
        widget.attach(ContainerSize::new(80, 20), ms(0));

        widget.tick(ms(50));
        assert_eq!(resizes(&log), 1);
        widget.tick(ms(99));
        assert_eq!(resizes(&log), 1);
        widget.tick(ms(100));
        assert_eq!(resizes(&log), 2);
        assert!(widget.is_observing());
    }

    #[test]
    fn test_resize_bursts_are_debounced() {
        let (mut widget, log) = widget();
        widget.set_data(sample(), ms(0));
        widget.attach(ContainerSize::new(80, 20), ms(0));
        widget.tick(ms(100));
        let baseline = resizes(&log);

        widget.container_resized(ContainerSize::new(70, 20), ms(200));
        widget.container_resized(ContainerSize::new(60, 20), ms(250));
        widget.container_resized(ContainerSize::new(50, 20), ms(300));
        widget.tick(ms(440));
        assert_eq!(resizes(&log), baseline);
        widget.tick(ms(450));
        assert_eq!(resizes(&log), baseline + 1);
    }

    #[test]
    fn test_unchanged_size_does_not_schedule() {
        let (mut widget, _log) = widget();
        widget.set_data(sample(), ms(0));
        widget.attach(ContainerSize::new(80, 20), ms(0));
        widget.tick(ms(100));

        widget.container_resized(ContainerSize::new(80, 20), ms(200));
        assert_eq!(widget.pending_timers(), 0);
    }

    #[test]
    fn test_no_layout_after_dispose_even_when_timers_elapse() {
        let (mut widget, log) = widget();
        widget.set_data(sample(), ms(0));
        widget.attach(ContainerSize::new(80, 20), ms(0));
        widget.container_resized(ContainerSize::new(60, 20), ms(10));
        assert!(widget.pending_timers() > 0);

        widget.dispose();
        let calls_at_teardown = log.borrow().len();

        assert_eq!(widget.tick(ms(10_000)), 0);
        widget.set_data(sample(), ms(10_000));
        widget.container_resized(ContainerSize::new(40, 20), ms(10_000));
        widget.tick(ms(20_000));

        assert_eq!(log.borrow().len(), calls_at_teardown);
        assert_eq!(resizes(&log), 0);
        assert_eq!(widget.state(), WidgetState::Disposed);
        assert!(!widget.is_observing());
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let (mut widget, _log) = widget();
        widget.dispose();
        widget.dispose();
        assert_eq!(widget.state(), WidgetState::Disposed);
    }

    #[test]
    fn test_interactions_are_forwarded_unchanged() {
        let (mut widget, _log) = widget();
        widget.set_data(sample(), ms(0));
        widget.engine_mut().queued = vec![
            EngineNotification::Hover(ChartInteraction::on(0, 1)),
            EngineNotification::Click(ChartInteraction::on(0, 1)),
        ];
        widget.tick(ms(1));

        assert_eq!(
            widget.drain_events(),
            vec![
                WidgetEvent::Hover(ChartInteraction::on(0, 1)),
                WidgetEvent::Click(ChartInteraction::on(0, 1)),
            ]
        );
        assert!(widget.drain_events().is_empty());
    }

    #[test]
    fn test_action_requires_data_and_visible_control() {
        let (mut widget, _log) = widget();
        assert!(!widget.press_action());

        widget.set_data(sample(), ms(0));
        assert!(widget.press_action());
        assert_eq!(widget.drain_events(), vec![WidgetEvent::Action]);

        let (engine, _) = RecordingEngine::new();
        let mut hidden = ChartWidget::<Slices, _>::new(
            engine,
            WidgetOptions::for_binding::<Slices>(),
            WidgetTimings::default(),
        );
        hidden.set_data(sample(), ms(0));
        assert!(!hidden.press_action());
    }

    #[test]
    fn test_hiding_legend_rebuilds() {
        let (mut widget, log) = widget();
        widget.set_data(sample(), ms(0));
        widget.set_show_legend(false, ms(5));

        assert!(!widget.configuration().unwrap().options.plugins.legend.display);
        assert_eq!(log.borrow().len(), 2);
    }
}
