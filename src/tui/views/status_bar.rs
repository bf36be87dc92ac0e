//! Status bar view
//!
//! Shows the active route, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::navigation::Route;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.shell.active_route().title()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = key_hints(app);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(app: &App) -> &'static str {
    if app.shell.is_drawer_open() {
        " j/k:Mover  Enter:Abrir  Esc:Fechar  q:Sair "
    } else if app.shell.active_route() == Route::Home {
        " m:Menu  1-3:Gráfico  ←/→:Selecionar  a:Adicionar  q:Sair "
    } else {
        " m:Menu  h:Início  q:Sair "
    }
}
