//! Chart configuration builders
//!
//! Pure functions from domain records to [`ChartConfiguration`]. Empty input
//! produces a configuration with zero data points, never an error.

use super::color::hex_to_fill_color;
use super::config::{
    Axis, ChartConfiguration, ChartData, ChartKind, ChartOptions, Dataset, Grid, Interaction,
    InteractionMode, Legend, LegendLabels, LegendPosition, Paint, Plugins, PointStyle, Scales,
    TickFormat, Tooltip, TooltipFormat,
};
use super::palette::resolve_color;
use crate::models::{ExpenseCategory, Money, MonthlyBudget, TrendDataset};

pub const ACTUAL_SERIES_LABEL: &str = "Gastos Reais";
pub const BUDGET_SERIES_LABEL: &str = "Orçamento Planejado";

const WHITE: &str = "#ffffff";
const VALUE_GRID_COLOR: &str = "rgba(0,0,0,0.1)";
const HOVER_ALPHA_SUFFIX: &str = "AA";
const TREND_FILL_ALPHA: f64 = 0.1;

/// Sum of all category amounts
pub fn total(categories: &[ExpenseCategory]) -> Money {
    categories.iter().map(|c| c.amount).sum()
}

/// Doughnut chart: one slice per category
pub fn build_category_chart(categories: &[ExpenseCategory]) -> ChartConfiguration {
    let colors: Vec<String> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| resolve_color(c.color.as_deref(), i))
        .collect();
    let hover_colors = colors
        .iter()
        .map(|c| format!("{}{}", c, HOVER_ALPHA_SUFFIX))
        .collect();

    let dataset = Dataset {
        label: None,
        data: categories.iter().map(|c| c.amount.as_decimal()).collect(),
        background_color: Paint::PerPoint(colors),
        hover_background_color: Some(Paint::PerPoint(hover_colors)),
        border_color: Paint::Uniform(WHITE.to_string()),
        border_width: 2,
        border_radius: None,
        fill: false,
        tension: None,
        points: None,
    };

    ChartConfiguration {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: categories.iter().map(|c| c.category.clone()).collect(),
            datasets: vec![dataset],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            aspect_ratio: None,
            interaction: None,
            scales: None,
            plugins: Plugins {
                legend: Legend {
                    display: true,
                    position: LegendPosition::Bottom,
                    labels: LegendLabels {
                        padding: 20,
                        font_size: Some(14),
                        use_point_style: false,
                    },
                },
                tooltip: Tooltip {
                    format: TooltipFormat::CategoryShare,
                },
            },
        },
    }
}

/// Pie chart: the doughnut configuration drawn as a full circle
pub fn build_pie_chart(categories: &[ExpenseCategory]) -> ChartConfiguration {
    ChartConfiguration {
        kind: ChartKind::Pie,
        ..build_category_chart(categories)
    }
}

/// Grouped bar chart: actual vs budget per month
pub fn build_monthly_chart(months: &[MonthlyBudget]) -> ChartConfiguration {
    let bar = |label: &str, data: Vec<f64>, fill: &str, border: &str| Dataset {
        label: Some(label.to_string()),
        data,
        background_color: Paint::Uniform(fill.to_string()),
        hover_background_color: None,
        border_color: Paint::Uniform(border.to_string()),
        border_width: 1,
        border_radius: Some(4),
        fill: false,
        tension: None,
        points: None,
    };

    ChartConfiguration {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: months.iter().map(|m| m.month.clone()).collect(),
            datasets: vec![
                bar(
                    ACTUAL_SERIES_LABEL,
                    months.iter().map(|m| m.actual.as_decimal()).collect(),
                    "#36A2EB",
                    "#1E88E5",
                ),
                bar(
                    BUDGET_SERIES_LABEL,
                    months.iter().map(|m| m.budget.as_decimal()).collect(),
                    "#FF6384",
                    "#E91E63",
                ),
            ],
        },
        options: cartesian_options(),
    }
}

/// Line chart: one smoothed, filled line per series
pub fn build_trend_chart(labels: &[String], datasets: &[TrendDataset]) -> ChartConfiguration {
    let lines = datasets
        .iter()
        .enumerate()
        .map(|(i, series)| {
            let color = resolve_color(series.color.as_deref(), i);
            Dataset {
                label: Some(series.label.clone()),
                data: series.data.iter().map(Money::as_decimal).collect(),
                background_color: Paint::Uniform(hex_to_fill_color(&color, TREND_FILL_ALPHA)),
                hover_background_color: None,
                border_color: Paint::Uniform(color.clone()),
                border_width: 3,
                border_radius: None,
                fill: true,
                tension: Some(0.4),
                points: Some(PointStyle {
                    point_background_color: color,
                    point_border_color: WHITE.to_string(),
                    point_border_width: 2,
                    point_radius: 5,
                }),
            }
        })
        .collect();

    ChartConfiguration {
        kind: ChartKind::Line,
        data: ChartData {
            labels: labels.to_vec(),
            datasets: lines,
        },
        options: cartesian_options(),
    }
}

/// Shared options for bar and line charts
fn cartesian_options() -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        aspect_ratio: None,
        interaction: Some(Interaction {
            intersect: false,
            mode: InteractionMode::Index,
        }),
        scales: Some(Scales {
            x: Axis {
                begin_at_zero: false,
                ticks: None,
                grid: Grid {
                    display: false,
                    color: None,
                },
            },
            y: Axis {
                begin_at_zero: true,
                ticks: Some(TickFormat::Currency),
                grid: Grid {
                    display: true,
                    color: Some(VALUE_GRID_COLOR.to_string()),
                },
            },
        }),
        plugins: Plugins {
            legend: Legend {
                display: true,
                position: LegendPosition::Top,
                labels: LegendLabels {
                    padding: 20,
                    font_size: None,
                    use_point_style: true,
                },
            },
            tooltip: Tooltip {
                format: TooltipFormat::SeriesValue,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::palette::palette_color;

    fn category(name: &str, reais: i64) -> ExpenseCategory {
        ExpenseCategory::new(name, Money::from_reais(reais))
    }

    #[test]
    fn test_total_is_order_independent() {
        let forward = vec![category("A", 100), category("B", 300), category("C", 7)];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(total(&forward), Money::from_reais(407));
        assert_eq!(total(&forward), total(&reversed));
        assert_eq!(total(&[]), Money::zero());
    }

    #[test]
    fn test_category_tooltips_show_share() {
        let config = build_category_chart(&[category("A", 100), category("B", 300)]);

        assert_eq!(config.tooltip_label(0, 0).unwrap(), "A: R$ 100 (25.0%)");
        assert_eq!(config.tooltip_label(0, 1).unwrap(), "B: R$ 300 (75.0%)");
        assert!(config.tooltip_label(0, 2).is_none());
        assert!(config.tooltip_label(1, 0).is_none());
    }

    #[test]
    fn test_category_tooltip_uses_locale_grouping() {
        let config = build_category_chart(&[
            ExpenseCategory::new("Moradia", Money::from_cents(250050)),
            category("Outros", 2500),
        ]);
        assert_eq!(config.tooltip_label(0, 0).unwrap(), "Moradia: R$ 2.500,5 (50.0%)");
    }

    #[test]
    fn test_all_zero_categories_render_zero_share() {
        let config = build_category_chart(&[category("A", 0), category("B", 0)]);
        assert_eq!(config.tooltip_label(0, 1).unwrap(), "B: R$ 0 (0.0%)");
    }

    #[test]
    fn test_category_colors_fall_back_to_palette() {
        let categories: Vec<_> = (0..10)
            .map(|i| category(&format!("C{}", i), 10))
            .chain(std::iter::once(category("Explicit", 1).with_color("#010203")))
            .collect();
        let config = build_category_chart(&categories);
        let colors = &config.data.datasets[0].background_color;

        assert_eq!(colors.color_at(0), Some(palette_color(0)));
        assert_eq!(colors.color_at(8), colors.color_at(0));
        assert_eq!(colors.color_at(9), colors.color_at(1));
        assert_eq!(colors.color_at(10), Some("#010203"));

        let hover = config.data.datasets[0].hover_background_color.as_ref().unwrap();
        assert_eq!(hover.color_at(10), Some("#010203AA"));
    }

    #[test]
    fn test_category_legend_below_plot() {
        let config = build_category_chart(&[category("A", 1)]);
        assert_eq!(config.kind, ChartKind::Doughnut);
        assert_eq!(config.options.plugins.legend.position, LegendPosition::Bottom);
    }

    #[test]
    fn test_pie_matches_doughnut_data() {
        let categories = [category("A", 1), category("B", 2)];
        let pie = build_pie_chart(&categories);
        let doughnut = build_category_chart(&categories);

        assert_eq!(pie.kind, ChartKind::Pie);
        assert_eq!(pie.data, doughnut.data);
        assert_eq!(pie.options, doughnut.options);
    }

    #[test]
    fn test_empty_inputs_have_no_points() {
        assert_eq!(build_category_chart(&[]).point_count(), 0);
        assert_eq!(build_monthly_chart(&[]).point_count(), 0);
        assert_eq!(build_trend_chart(&[], &[]).point_count(), 0);
        assert!(build_monthly_chart(&[]).is_empty());
    }

    #[test]
    fn test_monthly_chart_series() {
        let config = build_monthly_chart(&[MonthlyBudget::new(
            "Jan",
            Money::from_reais(5900),
            Money::from_reais(6000),
        )]);

        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.data.labels, vec!["Jan"]);
        assert_eq!(config.data.datasets.len(), 2);
        assert_eq!(config.data.datasets[0].data, vec![5900.0]);
        assert_eq!(config.data.datasets[1].data, vec![6000.0]);
        assert_eq!(config.data.datasets[0].border_radius, Some(4));

        assert_eq!(config.format_value_tick(6000.0), "R$ 6.000");
        assert_eq!(config.tooltip_label(0, 0).unwrap(), "Gastos Reais: R$ 5.900");
        assert_eq!(config.tooltip_label(1, 0).unwrap(), "Orçamento Planejado: R$ 6.000");
    }

    #[test]
    fn test_monthly_grid_only_on_value_axis() {
        let config = build_monthly_chart(&[]);
        let scales = config.options.scales.unwrap();
        assert!(!scales.x.grid.display);
        assert!(scales.y.grid.display);
        assert!(scales.y.begin_at_zero);
    }

    #[test]
    fn test_trend_chart_styling() {
        let labels = vec!["W1".to_string(), "W2".to_string()];
        let datasets = vec![
            TrendDataset::new("A", vec![Money::from_reais(1), Money::from_reais(2)])
                .with_color("#36A2EB"),
            TrendDataset::new("B", vec![Money::from_reais(3), Money::from_reais(4)]),
        ];
        let config = build_trend_chart(&labels, &datasets);

        assert_eq!(config.kind, ChartKind::Line);
        let first = &config.data.datasets[0];
        assert!(first.fill);
        assert_eq!(first.tension, Some(0.4));
        assert_eq!(first.border_color, Paint::Uniform("#36A2EB".into()));
        assert_eq!(first.background_color, Paint::Uniform("rgba(54, 162, 235, 0.1)".into()));
        assert_eq!(first.points.as_ref().unwrap().point_radius, 5);

        let second = &config.data.datasets[1];
        assert_eq!(second.border_color, Paint::Uniform(palette_color(1).into()));
        assert_eq!(second.primary_color(), Some(palette_color(1)));
        assert_eq!(config.tooltip_label(1, 1).unwrap(), "B: R$ 4");
    }

    #[test]
    fn test_trend_palette_wraps_by_series_index() {
        let datasets: Vec<_> = (0..9)
            .map(|i| TrendDataset::new(format!("S{}", i), vec![Money::from_reais(1)]))
            .collect();
        let config = build_trend_chart(&["W1".to_string()], &datasets);

        assert_eq!(
            config.data.datasets[8].border_color,
            config.data.datasets[0].border_color
        );
    }

    #[test]
    fn test_configuration_serializes_chart_js_shape() {
        let config = build_trend_chart(
            &["W1".to_string()],
            &[TrendDataset::new("A", vec![Money::from_reais(1)])],
        );
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["datasets"][0]["pointRadius"], 5);
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["options"]["scales"]["y"]["ticks"], "currency");
        assert_eq!(json["options"]["plugins"]["legend"]["position"], "top");
    }
}
