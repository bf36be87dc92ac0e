//! Persona card shown beside the expenses screen

use serde::Serialize;

use crate::display::number::{format_currency_with, NumberLocale};
use crate::models::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub name: String,
    /// Cash on hand
    pub cash: Money,
}

impl Persona {
    pub fn mock() -> Self {
        Self {
            name: "João Silva".to_string(),
            cash: Money::from_cents(250_075),
        }
    }

    pub fn cash_label(&self, locale: &NumberLocale) -> String {
        format_currency_with(locale, self.cash)
    }
}
