//! Terminal chart engine
//!
//! Draws a chart configuration with ratatui widgets. Radial charts become
//! horizontal bars, bar charts become grouped bars, line charts become a
//! braille line chart. A keyboard cursor stands in for the pointer: moving
//! it reports a hover, activating it reports a click.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, GraphType, Paragraph},
    Frame,
};

use crate::charts::{ChartConfiguration, ChartKind, Rgba};
use crate::charts::config::InteractionMode;
use crate::widgets::{ActiveElement, ChartInteraction, EngineNotification, RenderEngine};

/// Value range computed by the last layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Upper bound of the value axis
    pub value_max: f64,
    /// Number of positions along the category axis
    pub categories: usize,
}

#[derive(Debug, Default)]
pub struct TerminalCanvas {
    config: Option<ChartConfiguration>,
    geometry: Option<Geometry>,
    cursor: Option<usize>,
    pending: Vec<EngineNotification>,
    layout_passes: u64,
}

impl TerminalCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configuration(&self) -> Option<&ChartConfiguration> {
        self.config.as_ref()
    }

    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Move the cursor by `delta` positions, wrapping, and report a hover
    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.category_count();
        if count == 0 {
            return;
        }
        let next = match self.cursor {
            Some(current) => (current as isize + delta).rem_euclid(count as isize) as usize,
            None if delta < 0 => count - 1,
            None => 0,
        };
        self.cursor = Some(next);
        let interaction = self.interaction_at(next);
        self.pending.push(EngineNotification::Hover(interaction));
    }

    /// Report a click at the cursor. Without a cursor the click hits nothing
    pub fn click(&mut self) {
        if self.config.is_none() {
            return;
        }
        let interaction = self
            .cursor
            .map(|index| self.interaction_at(index))
            .unwrap_or_default();
        self.pending.push(EngineNotification::Click(interaction));
    }

    /// Tooltip for the cursor position, one line per active series
    pub fn tooltip(&self) -> Vec<String> {
        let (Some(config), Some(index)) = (&self.config, self.cursor) else {
            return Vec::new();
        };
        self.interaction_at(index)
            .active
            .iter()
            .filter_map(|element| config.tooltip_label(element.dataset_index, element.index))
            .collect()
    }

    fn category_count(&self) -> usize {
        self.config
            .as_ref()
            .map(|config| {
                config
                    .data
                    .datasets
                    .iter()
                    .map(|d| d.data.len())
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0)
    }

    /// Elements under the cursor. Index mode selects every series at once
    fn interaction_at(&self, index: usize) -> ChartInteraction {
        let Some(config) = &self.config else {
            return ChartInteraction::default();
        };
        let index_mode = config
            .options
            .interaction
            .is_some_and(|interaction| interaction.mode == InteractionMode::Index);
        let series = if index_mode {
            config.data.datasets.len()
        } else {
            config.data.datasets.len().min(1)
        };
        ChartInteraction {
            active: (0..series)
                .filter(|dataset_index| config.data.datasets[*dataset_index].data.len() > index)
                .map(|dataset_index| ActiveElement {
                    dataset_index,
                    index,
                })
                .collect(),
        }
    }

    fn compute_geometry(config: &ChartConfiguration) -> Geometry {
        let max = config
            .data
            .datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .fold(0.0_f64, f64::max);
        Geometry {
            value_max: if max > 0.0 { max * 1.1 } else { 1.0 },
            categories: config
                .data
                .datasets
                .iter()
                .map(|d| d.data.len())
                .max()
                .unwrap_or(0),
        }
    }

    /// Draw the chart into `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(config) = &self.config else {
            let empty = Paragraph::new("Sem dados para exibir").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        };
        let geometry = self
            .geometry
            .unwrap_or_else(|| Self::compute_geometry(config));

        let legend = config.options.plugins.legend.display;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if legend { 1 } else { 0 }),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        if legend {
            frame.render_widget(Paragraph::new(legend_line(config)), chunks[0]);
        }

        match config.kind {
            ChartKind::Doughnut | ChartKind::Pie => {
                self.render_slices(frame, chunks[1], config, geometry)
            }
            ChartKind::Bar => self.render_groups(frame, chunks[1], config),
            ChartKind::Line => self.render_lines(frame, chunks[1], config, geometry),
        }

        let tooltip = self.tooltip().join("  │  ");
        frame.render_widget(
            Paragraph::new(tooltip).style(Style::default().fg(Color::Yellow)),
            chunks[2],
        );
    }

    fn render_slices(&self, frame: &mut Frame, area: Rect, config: &ChartConfiguration, geometry: Geometry) {
        let Some(series) = config.data.datasets.first() else {
            return;
        };
        let label_width = config
            .data
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);

        let bars: Vec<Bar> = series
            .data
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let label = config.data.labels.get(i).cloned().unwrap_or_default();
                let color = series.background_color.color_at(i).map(to_color).unwrap_or(Color::Gray);
                let mut style = Style::default().fg(color);
                if self.cursor == Some(i) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Bar::default()
                    .label(Line::from(format!("{:<width$}", label, width = label_width)))
                    .value(*value as u64)
                    .text_value(config.format_value_tick(*value))
                    .style(style)
            })
            .collect();

        let chart = BarChart::default()
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(0)
            .max(geometry.value_max as u64);
        frame.render_widget(chart, area);
    }

    fn render_groups(&self, frame: &mut Frame, area: Rect, config: &ChartConfiguration) {
        let mut chart = BarChart::default().bar_width(3).bar_gap(0).group_gap(2);

        for (i, label) in config.data.labels.iter().enumerate() {
            let bars: Vec<Bar> = config
                .data
                .datasets
                .iter()
                .map(|series| {
                    let value = series.data.get(i).copied().unwrap_or(0.0);
                    let color = series.primary_color().map(to_color).unwrap_or(Color::Gray);
                    let mut style = Style::default().fg(color);
                    if self.cursor == Some(i) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Bar::default().value(value as u64).text_value(String::new()).style(style)
                })
                .collect();
            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(short_label(label)))
                    .bars(&bars),
            );
        }
        frame.render_widget(chart, area);
    }

    fn render_lines(&self, frame: &mut Frame, area: Rect, config: &ChartConfiguration, geometry: Geometry) {
        let points: Vec<Vec<(f64, f64)>> = config
            .data
            .datasets
            .iter()
            .map(|series| {
                series
                    .data
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64, *v))
                    .collect()
            })
            .collect();

        let datasets = config
            .data
            .datasets
            .iter()
            .zip(&points)
            .map(|(series, data)| {
                let color = series.primary_color().map(to_color).unwrap_or(Color::Gray);
                ratatui::widgets::Dataset::default()
                    .name(series.label.clone().unwrap_or_default())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(color))
                    .data(data)
            })
            .collect();

        let x_max = geometry.categories.saturating_sub(1).max(1) as f64;
        let first = config.data.labels.first().cloned().unwrap_or_default();
        let last = config.data.labels.last().cloned().unwrap_or_default();
        let x_labels = match self.cursor.and_then(|i| config.data.labels.get(i)) {
            Some(selected) => vec![Span::raw(first), Span::styled(selected.clone(), Style::default().fg(Color::Yellow)), Span::raw(last)],
            None => vec![Span::raw(first), Span::raw(last)],
        };

        let chart = Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max])
                    .labels(x_labels)
                    .style(Style::default().fg(Color::DarkGray)),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, geometry.value_max])
                    .labels(vec![
                        Span::raw(config.format_value_tick(0.0)),
                        Span::raw(config.format_value_tick(geometry.value_max / 2.0)),
                        Span::raw(config.format_value_tick(geometry.value_max)),
                    ])
                    .style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(chart, area);
    }
}

impl RenderEngine for TerminalCanvas {
    fn set_chart(&mut self, config: &ChartConfiguration) {
        let count = config
            .data
            .datasets
            .iter()
            .map(|d| d.data.len())
            .max()
            .unwrap_or(0);
        self.cursor = self.cursor.filter(|index| *index < count);
        self.config = Some(config.clone());
        self.geometry = None;
    }

    fn clear(&mut self) {
        self.config = None;
        self.geometry = None;
        self.cursor = None;
    }

    fn resize(&mut self) {
        self.geometry = self.config.as_ref().map(Self::compute_geometry);
        self.layout_passes += 1;
    }

    fn poll_interactions(&mut self) -> Vec<EngineNotification> {
        std::mem::take(&mut self.pending)
    }
}

/// Terminal color for a `#RRGGBB` string
pub fn to_color(hex: &str) -> Color {
    match Rgba::parse_hex(hex, 1.0) {
        Some(rgba) => Color::Rgb(rgba.r, rgba.g, rgba.b),
        None => Color::Gray,
    }
}

fn legend_line(config: &ChartConfiguration) -> Line<'static> {
    let mut spans = Vec::new();
    if config.kind.is_radial() {
        if let Some(series) = config.data.datasets.first() {
            for (i, label) in config.data.labels.iter().enumerate() {
                let color = series.background_color.color_at(i).map(to_color).unwrap_or(Color::Gray);
                spans.push(Span::styled("● ", Style::default().fg(color)));
                spans.push(Span::raw(format!("{}  ", label)));
            }
        }
    } else {
        for series in &config.data.datasets {
            let color = series.primary_color().map(to_color).unwrap_or(Color::Gray);
            spans.push(Span::styled("● ", Style::default().fg(color)));
            spans.push(Span::raw(format!("{}  ", series.label.as_deref().unwrap_or(""))));
        }
    }
    Line::from(spans)
}

/// First three characters of a category label
fn short_label(label: &str) -> String {
    label.chars().take(3).collect()
}
