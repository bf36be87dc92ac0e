//! Dashboard summary
//!
//! Tabular text view of the three datasets: category shares, monthly
//! actual versus budget, and trend averages with their direction.

use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::charts::{share_percentage, total};
use crate::models::{DashboardData, Money};
use crate::widgets::{SeriesMetric, TrendDirection};

use super::number::{format_currency_with, format_share, NumberLocale};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub amount: Money,
    pub share: f64,
    pub bar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRow {
    pub month: String,
    pub actual: Money,
    pub budget: Money,
    pub remaining: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    pub label: String,
    pub average: Money,
    pub direction: TrendDirection,
}

fn display_direction(direction: TrendDirection) -> String {
    let word = match direction {
        TrendDirection::Up => "alta",
        TrendDirection::Down => "queda",
        TrendDirection::Stable => "estável",
    };
    format!("{} {}", direction.symbol(), word)
}

/// Width of the share bars in the category table
const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total: Money,
    pub categories: Vec<CategoryRow>,
    pub months: Vec<MonthRow>,
    pub over_budget_months: usize,
    pub trend: Vec<TrendRow>,
    /// Separators and currency symbol used by [`DashboardSummary::format_terminal`]
    #[serde(skip)]
    pub locale: NumberLocale,
}

impl DashboardSummary {
    pub fn from_data(data: &DashboardData) -> Self {
        let total_amount = total(&data.categories);
        let total_decimal = total_amount.as_decimal();

        let categories = data
            .categories
            .iter()
            .map(|c| {
                let share = share_percentage(c.amount.as_decimal(), total_decimal);
                CategoryRow {
                    category: c.category.clone(),
                    amount: c.amount,
                    share,
                    bar: format_bar(share, 100.0, BAR_WIDTH),
                }
            })
            .collect();

        let months = data
            .months
            .iter()
            .map(|m| MonthRow {
                month: m.month.clone(),
                actual: m.actual,
                budget: m.budget,
                remaining: m.remaining(),
            })
            .collect();

        let trend = data
            .trend
            .datasets
            .iter()
            .map(SeriesMetric::of)
            .map(|metric| TrendRow {
                label: metric.label,
                average: metric.average,
                direction: metric.direction,
            })
            .collect();

        Self {
            total: total_amount,
            categories,
            months,
            over_budget_months: data.months.iter().filter(|m| m.is_over_budget()).count(),
            trend,
            locale: NumberLocale::default(),
        }
    }

    /// Format amounts with `locale` instead of pt-BR
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    fn money(&self, amount: Money) -> String {
        format_currency_with(&self.locale, amount)
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Resumo de Gastos\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Total: {}\n\n", self.money(self.total)));

        output.push_str("Gastos por Categoria\n");
        if self.categories.is_empty() {
            output.push_str("  (sem categorias)\n");
        } else {
            let rows = self.categories.iter().map(|row| {
                vec![
                    row.category.clone(),
                    self.money(row.amount),
                    format!("{}%", format_share(row.share)),
                    row.bar.clone(),
                ]
            });
            output.push_str(&table(["Categoria", "Valor", "%", ""], rows));
            output.push('\n');
        }
        output.push('\n');

        output.push_str("Gastos vs Orçamento\n");
        if self.months.is_empty() {
            output.push_str("  (sem meses)\n");
        } else {
            let rows = self.months.iter().map(|row| {
                vec![
                    row.month.clone(),
                    self.money(row.actual),
                    self.money(row.budget),
                    self.money(row.remaining),
                ]
            });
            output.push_str(&table(["Mês", "Gastos Reais", "Orçamento", "Saldo"], rows));
            output.push('\n');
            output.push_str(&format!(
                "Meses acima do orçamento: {} de {}\n",
                self.over_budget_months,
                self.months.len()
            ));
        }
        output.push('\n');

        output.push_str("Tendência de Gastos\n");
        if self.trend.is_empty() {
            output.push_str("  (sem séries)\n");
        } else {
            let rows = self.trend.iter().map(|row| {
                vec![
                    row.label.clone(),
                    self.money(row.average),
                    display_direction(row.direction),
                ]
            });
            output.push_str(&table(["Série", "Média", "Tendência"], rows));
            output.push('\n');
        }

        output
    }
}

fn table<const N: usize>(header: [&str; N], rows: impl Iterator<Item = Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header.map(String::from));
    for row in rows {
        builder.push_record(row);
    }
    builder.build().with(Style::rounded()).to_string()
}

/// Horizontal bar of `width` cells filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, MonthlyBudget};

    #[test]
    fn test_summary_of_mock_data() {
        let summary = DashboardSummary::from_data(&DashboardData::mock());

        assert_eq!(summary.total, Money::from_reais(5900));
        assert_eq!(summary.categories.len(), 6);
        assert_eq!(summary.over_budget_months, 3);
        assert_eq!(summary.trend.len(), 2);

        let shares: f64 = summary.categories.iter().map(|r| r.share).sum();
        assert!((shares - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_shares() {
        let data = DashboardData {
            categories: vec![ExpenseCategory::new("A", Money::zero())],
            ..DashboardData::default()
        };
        let summary = DashboardSummary::from_data(&data);
        assert_eq!(summary.categories[0].share, 0.0);
        assert_eq!(summary.categories[0].bar, " ".repeat(BAR_WIDTH));
    }

    #[test]
    fn test_format_terminal() {
        let data = DashboardData {
            categories: vec![
                ExpenseCategory::new("Alimentação", Money::from_reais(100)),
                ExpenseCategory::new("Moradia", Money::from_reais(300)),
            ],
            months: vec![MonthlyBudget::new(
                "Janeiro",
                Money::from_reais(6200),
                Money::from_reais(6000),
            )],
            ..DashboardData::default()
        };
        let text = DashboardSummary::from_data(&data).format_terminal();

        assert!(text.contains("Total: R$ 400,00"));
        assert!(text.contains("Alimentação"));
        assert!(text.contains("25.0%"));
        assert!(text.contains("-R$ 200,00"));
        assert!(text.contains("Meses acima do orçamento: 1 de 1"));
        assert!(text.contains("(sem séries)"));
    }

    #[test]
    fn test_format_terminal_follows_locale() {
        let data = DashboardData {
            categories: vec![ExpenseCategory::new("Moradia", Money::from_cents(250075))],
            ..DashboardData::default()
        };
        let text = DashboardSummary::from_data(&data)
            .with_locale(NumberLocale::from_tag("en-US"))
            .format_terminal();

        assert!(text.contains("Total: $ 2,500.75"));
        assert!(!text.contains("R$"));
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }
}
