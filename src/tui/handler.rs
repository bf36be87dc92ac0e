//! Event handler for the TUI
//!
//! Routes keyboard events to the drawer or the main panel, and feeds
//! resizes and ticks into the app state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::navigation::Route;
use crate::screens::ChartView;

use super::app::{App, FocusedPanel};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(width, height) => {
            app.resize(width, height);
            Ok(())
        }
        Event::Tick => {
            app.tick();
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('m') => {
            app.toggle_drawer();
            return Ok(());
        }
        KeyCode::Esc if app.shell.is_drawer_open() => {
            app.close_drawer();
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Drawer => handle_drawer_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }
}

/// Handle keys when the drawer is focused
fn handle_drawer_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.shell.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.shell.select_previous(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let route = app
                .shell
                .menu_items()
                .get(app.shell.selected_index())
                .map(|item| item.route)
                .unwrap_or_default();
            app.navigate(route);
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys when the main panel is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.shell.active_route() != Route::Home {
        if key.code == KeyCode::Char('h') || key.code == KeyCode::Home {
            app.navigate(Route::Home);
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('1') => app.switch_chart(ChartView::Doughnut),
        KeyCode::Char('2') => app.switch_chart(ChartView::Bar),
        KeyCode::Char('3') => app.switch_chart(ChartView::Line),
        KeyCode::Char('v') => {
            if let Some(view) = app.screen.as_ref().map(|s| s.current_chart().next()) {
                app.switch_chart(view);
            }
        }
        KeyCode::Char('a') | KeyCode::Char('+') => app.press_action(),
        KeyCode::Char('l') | KeyCode::Right => {
            if let Some(canvas) = app.visible_canvas_mut() {
                canvas.move_cursor(1);
            }
        }
        KeyCode::Char('h') | KeyCode::Left => {
            if let Some(canvas) = app.visible_canvas_mut() {
                canvas.move_cursor(-1);
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(canvas) = app.visible_canvas_mut() {
                canvas.click();
            }
        }
        _ => {}
    }
    Ok(())
}
