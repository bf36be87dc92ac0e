//! Dashboard dataset bundle
//!
//! The three datasets the expenses screen works with, the built-in mock
//! values, and loading a bundle from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ExpenseCategory, Money, MonthlyBudget, TrendData, TrendDataset};
use crate::error::{CarteiraError, CarteiraResult};

/// Everything the expenses screen renders
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub categories: Vec<ExpenseCategory>,

    #[serde(default)]
    pub months: Vec<MonthlyBudget>,

    #[serde(default)]
    pub trend: TrendData,
}

impl DashboardData {
    /// The in-memory demo datasets
    pub fn mock() -> Self {
        Self {
            categories: mock_categories(),
            months: mock_months(),
            trend: mock_trend(),
        }
    }

    /// Load a bundle from a JSON file and validate it
    pub fn load(path: &Path) -> CarteiraResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CarteiraError::Io(format!("Failed to read dataset {}: {}", path.display(), e))
        })?;
        let data: DashboardData = serde_json::from_str(&contents).map_err(|e| {
            if e.is_data() {
                CarteiraError::Validation(format!("Invalid dataset {}: {}", path.display(), e))
            } else {
                CarteiraError::from(e)
            }
        })?;
        data.validate()?;
        tracing::debug!(
            path = %path.display(),
            categories = data.categories.len(),
            months = data.months.len(),
            periods = data.trend.period_count(),
            "dataset loaded"
        );
        Ok(data)
    }

    /// Check the invariants the chart builders rely on
    pub fn validate(&self) -> CarteiraResult<()> {
        for category in &self.categories {
            category
                .validate()
                .map_err(|e| CarteiraError::Validation(e.to_string()))?;
        }
        if let Some(dataset) = self.trend.misaligned_dataset() {
            return Err(CarteiraError::Validation(format!(
                "trend series '{}' has {} values for {} labels",
                dataset.label,
                dataset.data.len(),
                self.trend.labels.len()
            )));
        }
        Ok(())
    }
}

fn mock_categories() -> Vec<ExpenseCategory> {
    vec![
        ExpenseCategory::new("Alimentação", Money::from_reais(1250)).with_color("#FF6384"),
        ExpenseCategory::new("Transporte", Money::from_reais(800)).with_color("#36A2EB"),
        ExpenseCategory::new("Moradia", Money::from_reais(2500)).with_color("#FFCE56"),
        ExpenseCategory::new("Entretenimento", Money::from_reais(350)).with_color("#4BC0C0"),
        ExpenseCategory::new("Saúde", Money::from_reais(600)).with_color("#9966FF"),
        ExpenseCategory::new("Outros", Money::from_reais(400)).with_color("#FF9F40"),
    ]
}

fn mock_months() -> Vec<MonthlyBudget> {
    [
        ("Janeiro", 5900),
        ("Fevereiro", 6200),
        ("Março", 5800),
        ("Abril", 6400),
        ("Maio", 6100),
        ("Junho", 5750),
    ]
    .into_iter()
    .map(|(month, actual)| {
        MonthlyBudget::new(month, Money::from_reais(actual), Money::from_reais(6000))
    })
    .collect()
}

fn mock_trend() -> TrendData {
    let series = |values: [i64; 8]| values.iter().map(|v| Money::from_reais(*v)).collect();
    TrendData::new(
        (1..=8).map(|week| format!("Semana {}", week)).collect(),
        vec![
            TrendDataset::new("Alimentação", series([280, 320, 290, 360, 315, 340, 275, 395]))
                .with_color("#FF6384"),
            TrendDataset::new("Transporte", series([180, 200, 220, 200, 210, 190, 235, 185]))
                .with_color("#36A2EB"),
        ],
    )
}
