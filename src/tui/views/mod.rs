//! TUI Views module
//!
//! Contains the navigation drawer, the expenses screen, the static pages
//! and the status bar.

pub mod expenses;
pub mod page;
pub mod sidebar;
pub mod status_bar;

use ratatui::{widgets::Clear, Frame};

use crate::navigation::{Route, SidenavMode};

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let mode = app.drawer_mode();
    let layout = AppLayout::new(frame.area(), app.shell.is_drawer_open(), mode);

    match app.shell.active_route() {
        Route::Home => expenses::render(frame, app, layout.main),
        route => page::render(frame, route, layout.main),
    }

    if let Some(drawer) = layout.drawer {
        if mode == SidenavMode::Over {
            frame.render_widget(Clear, drawer);
        }
        sidebar::render(frame, app, drawer);
    }

    status_bar::render(frame, app, layout.status_bar);
}
