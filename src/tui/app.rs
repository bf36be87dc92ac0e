//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;

use crate::config::paths::CarteiraPaths;
use crate::config::settings::Settings;
use crate::display::NumberLocale;
use crate::models::DashboardData;
use crate::navigation::{NavigationShell, Route, SidenavMode, Viewport, ViewportClass};
use crate::screens::{ChartView, ExpensesScreen, Persona};
use crate::widgets::ContainerSize;

use super::canvas::TerminalCanvas;

pub type TerminalScreen = ExpensesScreen<TerminalCanvas, StdRng>;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Drawer,
    #[default]
    Main,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a CarteiraPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Route, drawer and breakpoint state
    pub shell: NavigationShell,

    /// Expenses screen, alive only while the home route is shown
    pub screen: Option<TerminalScreen>,

    /// Persona card beside the charts
    pub persona: Persona,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Status message to display
    pub status_message: Option<String>,

    /// Area the visible chart was last drawn into
    pub chart_area: Option<Rect>,

    dataset: DashboardData,
    viewport: Viewport,
    started: Instant,
    seed: Option<u64>,
}

impl<'a> App<'a> {
    /// Create a new App instance showing the home route
    pub fn new(
        settings: &'a Settings,
        paths: &'a CarteiraPaths,
        dataset: DashboardData,
        viewport: Viewport,
    ) -> Self {
        Self::build(settings, paths, dataset, viewport, None)
    }

    /// Same as [`App::new`] with deterministic "add" actions
    pub fn with_seed(
        settings: &'a Settings,
        paths: &'a CarteiraPaths,
        dataset: DashboardData,
        viewport: Viewport,
        seed: u64,
    ) -> Self {
        Self::build(settings, paths, dataset, viewport, Some(seed))
    }

    fn build(
        settings: &'a Settings,
        paths: &'a CarteiraPaths,
        dataset: DashboardData,
        viewport: Viewport,
        seed: Option<u64>,
    ) -> Self {
        let mut shell = NavigationShell::new(settings.handset_max_width);
        shell.apply_viewport(viewport);

        let mut app = Self {
            settings,
            paths,
            should_quit: false,
            shell,
            screen: None,
            persona: Persona::mock(),
            focused_panel: FocusedPanel::default(),
            status_message: None,
            chart_area: None,
            dataset,
            viewport,
            started: Instant::now(),
            seed,
        };
        app.screen = Some(app.new_screen());
        app
    }

    fn new_screen(&self) -> TerminalScreen {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ExpensesScreen::new(
            self.dataset.clone(),
            self.settings,
            |_| TerminalCanvas::new(),
            rng,
            self.now(),
        )
    }

    /// Logical time since the app started
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Number formatting chosen by the `locale` setting
    pub fn locale(&self) -> NumberLocale {
        NumberLocale::from_tag(&self.settings.locale)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        if let Some(screen) = self.screen.as_mut() {
            screen.dispose();
        }
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Show `route`, tearing down or building the expenses screen as needed
    pub fn navigate(&mut self, route: Route) {
        let leaving_home = self.shell.active_route() == Route::Home && route != Route::Home;
        let entering_home = self.shell.active_route() != Route::Home && route == Route::Home;

        self.shell.navigate(route);
        if leaving_home {
            if let Some(mut screen) = self.screen.take() {
                screen.dispose();
            }
            self.chart_area = None;
        }
        if entering_home {
            self.screen = Some(self.new_screen());
        }
        if !self.shell.is_drawer_open() {
            self.focused_panel = FocusedPanel::Main;
        }
        self.clear_status();
    }

    pub fn toggle_drawer(&mut self) {
        self.shell.toggle_drawer();
        self.focused_panel = if self.shell.is_drawer_open() {
            FocusedPanel::Drawer
        } else {
            FocusedPanel::Main
        };
    }

    /// Close the drawer and return focus to the content
    pub fn close_drawer(&mut self) {
        self.shell.close_now();
        self.focused_panel = FocusedPanel::Main;
    }

    /// Toggle focus between drawer and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Drawer => FocusedPanel::Main,
            FocusedPanel::Main if self.shell.is_drawer_open() => FocusedPanel::Drawer,
            FocusedPanel::Main => FocusedPanel::Main,
        };
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        if self.shell.apply_viewport(self.viewport) {
            self.focused_panel = FocusedPanel::Main;
        }
    }

    /// Breakpoint class of the current terminal size
    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport
            .classify(self.settings.handset_max_width, self.settings.compact_max_width)
    }

    /// Single-column expenses layout for handset and compact terminals
    pub fn is_compact(&self) -> bool {
        self.viewport_class() != ViewportClass::Wide
    }

    /// Drawer overlays the content on handset, sits beside it otherwise
    pub fn drawer_mode(&self) -> SidenavMode {
        self.shell.sidenav_mode()
    }

    pub fn switch_chart(&mut self, view: ChartView) {
        if let Some(screen) = self.screen.as_mut() {
            screen.switch_chart(view);
        }
    }

    /// Canvas of the chart currently shown
    pub fn visible_canvas(&self) -> Option<&TerminalCanvas> {
        let screen = self.screen.as_ref()?;
        Some(match screen.current_chart() {
            ChartView::Doughnut => screen.doughnut().engine(),
            ChartView::Bar => screen.bar().engine(),
            ChartView::Line => screen.line().engine(),
        })
    }

    pub fn visible_canvas_mut(&mut self) -> Option<&mut TerminalCanvas> {
        let screen = self.screen.as_mut()?;
        Some(match screen.current_chart() {
            ChartView::Doughnut => screen.doughnut_mut().engine_mut(),
            ChartView::Bar => screen.bar_mut().engine_mut(),
            ChartView::Line => screen.line_mut().engine_mut(),
        })
    }

    /// Run the visible chart's add action
    pub fn press_action(&mut self) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        if !screen.press_action() {
            self.set_status("Ação indisponível");
        }
    }

    /// Report the chart area drawn this frame to the widgets
    pub fn sync_chart_area(&mut self) {
        let now = self.now();
        let (Some(screen), Some(area)) = (self.screen.as_mut(), self.chart_area) else {
            return;
        };
        let size = ContainerSize::new(area.width, area.height);
        if screen.doughnut().is_observing() {
            screen.container_resized(size, now);
        } else {
            screen.attach(size, now);
        }
    }

    /// Fire widget timers and fold widget events into the status line
    pub fn tick(&mut self) {
        let now = self.now();
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        if screen.poll(now) > 0 {
            if let Some(note) = screen.last_interaction() {
                let verb = if note.clicked { "Clique" } else { "Seleção" };
                let message = match &note.description {
                    Some(description) => format!("{}: {}", verb, description),
                    None => format!("{} em {}", verb, note.view.label()),
                };
                self.status_message = Some(message);
            }
        }
    }
}
