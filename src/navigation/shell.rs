//! Navigation shell state
//!
//! Tracks the active route, the drawer, and how the drawer behaves for the
//! current viewport. The drawer starts closed in every viewport class.

use crate::error::CarteiraResult;

use super::menu::{index_of, MenuItem, MENU_ITEMS};
use super::routes::Route;
use super::viewport::Viewport;

/// How the drawer sits relative to the content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidenavMode {
    /// Drawn on top of the content, with a backdrop
    Over,
    /// Pushes the content aside
    Side,
}

impl SidenavMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Over => "over",
            Self::Side => "side",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationShell {
    active: Route,
    drawer_open: bool,
    selected: usize,
    handset: bool,
    handset_max_width: u16,
}

impl NavigationShell {
    pub fn new(handset_max_width: u16) -> Self {
        Self {
            active: Route::default(),
            drawer_open: false,
            selected: 0,
            handset: false,
            handset_max_width,
        }
    }

    /// Re-evaluate the breakpoint. Crossing it closes the drawer
    ///
    /// Returns whether the handset classification changed.
    pub fn apply_viewport(&mut self, viewport: Viewport) -> bool {
        let handset = viewport.is_handset(self.handset_max_width);
        if handset == self.handset {
            return false;
        }
        self.handset = handset;
        self.drawer_open = false;
        tracing::debug!(handset, mode = self.sidenav_mode().as_str(), "viewport class changed");
        true
    }

    pub fn is_handset(&self) -> bool {
        self.handset
    }

    pub fn sidenav_mode(&self) -> SidenavMode {
        if self.handset {
            SidenavMode::Over
        } else {
            SidenavMode::Side
        }
    }

    pub fn has_backdrop(&self) -> bool {
        self.handset
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
        self.selected = index_of(self.active).unwrap_or(0);
    }

    pub fn toggle_drawer(&mut self) {
        if self.drawer_open {
            self.close_now();
        } else {
            self.open_drawer();
        }
    }

    /// Close the drawer immediately
    pub fn close_now(&mut self) {
        self.drawer_open = false;
    }

    /// A click on the backdrop dismisses the drawer
    pub fn backdrop_clicked(&mut self) {
        if self.has_backdrop() {
            self.close_now();
        }
    }

    /// Show `route`. On handset the drawer closes afterwards
    pub fn navigate(&mut self, route: Route) {
        self.active = route;
        self.selected = index_of(route).unwrap_or(0);
        if self.handset && self.drawer_open {
            self.close_now();
        }
        tracing::info!(route = %route, "navigated");
    }

    /// Resolve `path` and navigate to it
    pub fn navigate_path(&mut self, path: &str) -> CarteiraResult<Route> {
        let route = Route::resolve(path)?;
        self.navigate(route);
        Ok(route)
    }

    pub fn active_route(&self) -> Route {
        self.active
    }

    pub fn menu_items(&self) -> &'static [MenuItem] {
        MENU_ITEMS
    }

    /// Highlighted drawer entry
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < MENU_ITEMS.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Navigate to the highlighted entry
    pub fn activate_selected(&mut self) -> Route {
        let route = MENU_ITEMS
            .get(self.selected)
            .map(|item| item.route)
            .unwrap_or_default();
        self.navigate(route);
        route
    }
}
