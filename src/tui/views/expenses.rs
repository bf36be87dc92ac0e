//! Expenses screen view
//!
//! Persona card, chart switcher, the visible chart and its metrics.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::display::number::{format_currency_with, NumberLocale};
use crate::screens::ChartView;
use crate::tui::app::{App, FocusedPanel, TerminalScreen};
use crate::tui::canvas::to_color;
use crate::tui::layout::ExpensesLayout;
use crate::widgets::{ChartBinding, ChartWidget, RenderEngine};

/// Render the expenses screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let compact = app.is_compact();
    let layout = ExpensesLayout::new(area, compact);

    render_persona(frame, app, layout.persona);

    let Some(screen) = app.screen.as_ref() else {
        app.chart_area = None;
        return;
    };

    render_tabs(frame, screen, layout.tabs);

    let focused = app.focused_panel == FocusedPanel::Main;
    let title = match screen.current_chart() {
        ChartView::Doughnut => widget_title(screen.doughnut()),
        ChartView::Bar => widget_title(screen.bar()),
        ChartView::Line => widget_title(screen.line()),
    };
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(layout.chart);
    frame.render_widget(block, layout.chart);

    if let Some(canvas) = app.visible_canvas() {
        canvas.render(frame, inner);
    }

    let locale = app.locale();
    if let Some(screen) = app.screen.as_ref() {
        render_footer(frame, screen, &locale, layout.footer);
    }
    app.chart_area = Some(inner);
}

fn widget_title<B: ChartBinding, E: RenderEngine>(widget: &ChartWidget<B, E>) -> String {
    widget.options().title.clone().unwrap_or_default()
}

fn render_persona(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Perfil ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(Span::styled(
            app.persona.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Dinheiro: "),
            Span::styled(
                app.persona.cash_label(&app.locale()),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_tabs(frame: &mut Frame, screen: &TerminalScreen, area: Rect) {
    let titles: Vec<Line> = ChartView::all()
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.label())))
        .collect();
    let selected = ChartView::all()
        .iter()
        .position(|view| *view == screen.current_chart())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, screen: &TerminalScreen, locale: &NumberLocale, area: Rect) {
    let mut lines = Vec::new();

    let (metrics_enabled, action) = match screen.current_chart() {
        ChartView::Doughnut => (
            screen.doughnut().options().show_metrics,
            action_hint(screen.doughnut()),
        ),
        ChartView::Bar => (screen.bar().options().show_metrics, action_hint(screen.bar())),
        ChartView::Line => (screen.line().options().show_metrics, action_hint(screen.line())),
    };

    if metrics_enabled {
        match screen.current_chart() {
            ChartView::Doughnut => {
                lines.push(Line::from(vec![
                    Span::raw("Total: "),
                    Span::styled(
                        format_currency_with(locale, screen.doughnut().total()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            ChartView::Bar => {
                lines.push(Line::from(format!(
                    "Média gasta: {}  │  Média orçada: {}",
                    format_currency_with(locale, screen.bar().average_actual()),
                    format_currency_with(locale, screen.bar().average_budget()),
                )));
            }
            ChartView::Line => {
                let spans: Vec<Span> = screen
                    .line()
                    .metrics()
                    .into_iter()
                    .flat_map(|metric| {
                        let color = metric.color.as_deref().map(to_color).unwrap_or(Color::Gray);
                        [
                            Span::styled(format!("{} ", metric.direction.symbol()), Style::default().fg(color)),
                            Span::raw(format!("{}: {}  ", metric.label, format_currency_with(locale, metric.average))),
                        ]
                    })
                    .collect();
                lines.push(Line::from(spans));
            }
        }
    }

    if let Some((label, enabled)) = action {
        let style = if enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(format!("[a] {}", label), style)));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn action_hint<B: ChartBinding, E: RenderEngine>(
    widget: &ChartWidget<B, E>,
) -> Option<(String, bool)> {
    let options = widget.options();
    options
        .show_actions
        .then(|| (options.action_label.clone(), widget.action_enabled()))
}
