//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: drawer, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::navigation::SidenavMode;

/// Width of the navigation drawer
pub const DRAWER_WIDTH: u16 = 30;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Drawer area when the drawer is open
    pub drawer: Option<Rect>,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    ///
    /// In `Side` mode the drawer takes a fixed column beside the content.
    /// In `Over` mode it is drawn on top of the content's left edge.
    pub fn new(area: Rect, drawer_open: bool, mode: SidenavMode) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = vertical[0];
        let (drawer, main) = match (drawer_open, mode) {
            (false, _) => (None, body),
            (true, SidenavMode::Side) => {
                let horizontal = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(DRAWER_WIDTH), Constraint::Min(20)])
                    .split(body);
                (Some(horizontal[0]), horizontal[1])
            }
            (true, SidenavMode::Over) => {
                let width = DRAWER_WIDTH.min(body.width);
                (Some(Rect::new(body.x, body.y, width, body.height)), body)
            }
        };

        Self {
            drawer,
            main,
            status_bar: vertical[1],
        }
    }
}

/// Layout for the expenses screen
pub struct ExpensesLayout {
    /// Persona card
    pub persona: Rect,
    /// Chart switcher tabs
    pub tabs: Rect,
    /// Chart drawing area
    pub chart: Rect,
    /// Metrics and action hint
    pub footer: Rect,
}

impl ExpensesLayout {
    /// Stack everything vertically when compact, put the persona card
    /// beside the charts otherwise
    pub fn new(area: Rect, compact: bool) -> Self {
        let (persona, charts) = if compact {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(8)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(28), Constraint::Min(40)])
                .split(area);
            (chunks[0], chunks[1])
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(5),    // Chart
                Constraint::Length(4), // Metrics
            ])
            .split(charts);

        Self {
            persona,
            tabs: chunks[0],
            chart: chunks[1],
            footer: chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_drawer_shrinks_main() {
        let layout = AppLayout::new(Rect::new(0, 0, 160, 40), true, SidenavMode::Side);
        assert_eq!(layout.drawer.map(|d| d.width), Some(DRAWER_WIDTH));
        assert_eq!(layout.main.width, 130);
        assert_eq!(layout.status_bar.height, 1);
    }

    #[test]
    fn test_over_drawer_overlays_main() {
        let layout = AppLayout::new(Rect::new(0, 0, 60, 30), true, SidenavMode::Over);
        assert_eq!(layout.main.width, 60);
        assert_eq!(layout.drawer.map(|d| d.x), Some(0));
    }

    #[test]
    fn test_closed_drawer() {
        let layout = AppLayout::new(Rect::new(0, 0, 60, 30), false, SidenavMode::Over);
        assert!(layout.drawer.is_none());
        assert_eq!(layout.main.height, 29);
    }

    #[test]
    fn test_compact_expenses_layout_stacks() {
        let layout = ExpensesLayout::new(Rect::new(0, 0, 60, 30), true);
        assert_eq!(layout.persona.width, 60);
        assert!(layout.chart.y > layout.persona.y);
    }
}
