//! Core data models for Carteira
//!
//! Immutable value records for the three chart datasets. Records have no
//! identity beyond their position in a sequence.

pub mod dashboard;
pub mod expense;
pub mod money;
pub mod monthly;
pub mod trend;

pub use dashboard::DashboardData;
pub use expense::{ExpenseCategory, ExpenseValidationError};
pub use money::Money;
pub use monthly::MonthlyBudget;
pub use trend::{TrendData, TrendDataset};
