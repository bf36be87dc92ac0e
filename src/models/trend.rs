//! Trend series models
//!
//! Each dataset's values are parallel to the shared label sequence: value `i`
//! of every dataset belongs to period `labels[i]`.

use serde::{Deserialize, Serialize};

use super::Money;

/// A named sequence of amounts aligned to the shared period labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendDataset {
    pub label: String,

    pub data: Vec<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TrendDataset {
    pub fn new(label: impl Into<String>, data: Vec<Money>) -> Self {
        Self {
            label: label.into(),
            data,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Period labels plus the series plotted against them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrendData {
    pub labels: Vec<String>,
    pub datasets: Vec<TrendDataset>,
}

impl TrendData {
    pub fn new(labels: Vec<String>, datasets: Vec<TrendDataset>) -> Self {
        Self { labels, datasets }
    }

    /// Whether every dataset has exactly one value per label
    pub fn is_aligned(&self) -> bool {
        self.datasets
            .iter()
            .all(|dataset| dataset.data.len() == self.labels.len())
    }

    /// Find the first dataset whose length disagrees with the labels
    pub fn misaligned_dataset(&self) -> Option<&TrendDataset> {
        self.datasets
            .iter()
            .find(|dataset| dataset.data.len() != self.labels.len())
    }

    pub fn period_count(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reais(values: &[i64]) -> Vec<Money> {
        values.iter().map(|v| Money::from_reais(*v)).collect()
    }

    #[test]
    fn test_alignment() {
        let mut trend = TrendData::new(
            vec!["W1".into(), "W2".into()],
            vec![TrendDataset::new("A", reais(&[1, 2]))],
        );
        assert!(trend.is_aligned());
        assert!(trend.misaligned_dataset().is_none());

        trend.datasets.push(TrendDataset::new("B", reais(&[1])));
        assert!(!trend.is_aligned());
        assert_eq!(trend.misaligned_dataset().unwrap().label, "B");
    }

    #[test]
    fn test_empty_trend_is_aligned() {
        assert!(TrendData::default().is_aligned());
    }
}
