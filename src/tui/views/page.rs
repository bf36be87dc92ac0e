//! Static content pages

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::navigation::Route;
use crate::screens::{page_for, FEATURES_HEADING};

/// Render the page registered for `route`
pub fn render(frame: &mut Frame, route: Route, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", route.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(page) = page_for(route) else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            page.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(page.description),
    ];

    if !page.features.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            FEATURES_HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            page.features
                .iter()
                .map(|feature| Line::from(format!("  • {}", feature))),
        );
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
