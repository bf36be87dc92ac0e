//! Screens
//!
//! The expenses dashboard with its persona card, and the static pages.

pub mod expenses;
pub mod pages;
pub mod persona;

pub use expenses::{ChartView, ExpensesScreen, InteractionNote};
pub use pages::{page_for, StaticPage, FEATURES_HEADING};
pub use persona::Persona;
