//! Locale-aware number formatting
//!
//! Brazilian Portuguese is the default: `.` groups thousands, `,` separates
//! decimals, and plain numbers show at most three fraction digits with
//! trailing zeros dropped (`1250` -> `1.250`, `1234.5` -> `1.234,5`).

use crate::models::Money;

/// Separators and precision for a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub max_fraction_digits: usize,
    pub currency_symbol: &'static str,
}

impl NumberLocale {
    pub const PT_BR: NumberLocale = NumberLocale {
        grouping_separator: '.',
        decimal_separator: ',',
        max_fraction_digits: 3,
        currency_symbol: "R$",
    };

    pub const EN_US: NumberLocale = NumberLocale {
        grouping_separator: ',',
        decimal_separator: '.',
        max_fraction_digits: 3,
        currency_symbol: "$",
    };

    /// Resolve a language tag; unknown tags fall back to pt-BR
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "en-us" | "en" => Self::EN_US,
            _ => Self::PT_BR,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::PT_BR
    }
}

/// Format a plain number in pt-BR
pub fn format_number(value: f64) -> String {
    format_number_with(&NumberLocale::PT_BR, value)
}

/// Format a plain number: grouped integer part, up to `max_fraction_digits`
/// fraction digits, trailing zeros trimmed
pub fn format_number_with(locale: &NumberLocale, value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let body = format!("{:.*}", locale.max_fraction_digits, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (body.as_str(), ""),
    };

    let mut out = String::new();
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.grouping_separator));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Format an amount as currency with exactly two fraction digits (`R$ 2.500,75`)
pub fn format_currency(amount: Money) -> String {
    format_currency_with(&NumberLocale::PT_BR, amount)
}

pub fn format_currency_with(locale: &NumberLocale, amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = amount.abs();
    format!(
        "{}{} {}{}{:02}",
        sign,
        locale.currency_symbol,
        group_digits(&abs.reais().to_string(), locale.grouping_separator),
        locale.decimal_separator,
        abs.cents_part()
    )
}

/// `R$ ` followed by the pt-BR number, as used by axis ticks and tooltips
pub fn format_currency_label(value: f64) -> String {
    format!("{} {}", NumberLocale::PT_BR.currency_symbol, format_number(value))
}

/// One decimal place with a `.` separator, matching chart tooltips (`25.0`)
pub fn format_share(percentage: f64) -> String {
    format!("{:.1}", percentage)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_are_grouped() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(6000.0), "6.000");
        assert_eq!(format_number(1234567.0), "1.234.567");
    }

    #[test]
    fn test_fraction_digits_are_trimmed() {
        assert_eq!(format_number(1234.5), "1.234,5");
        assert_eq!(format_number(2500.75), "2.500,75");
        assert_eq!(format_number(0.1234), "0,123");
        assert_eq!(format_number(10.5), "10,5");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(format_number(-6000.0), "-6.000");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
    }

    #[test]
    fn test_en_us_locale() {
        assert_eq!(format_number_with(&NumberLocale::EN_US, 1234.5), "1,234.5");
        assert_eq!(NumberLocale::from_tag("en-US"), NumberLocale::EN_US);
        assert_eq!(NumberLocale::from_tag("xx"), NumberLocale::PT_BR);
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(Money::from_cents(250075)), "R$ 2.500,75");
        assert_eq!(format_currency(Money::from_reais(6000)), "R$ 6.000,00");
        assert_eq!(format_currency(Money::from_cents(5)), "R$ 0,05");
        assert_eq!(format_currency(Money::from_cents(-123456)), "-R$ 1.234,56");
    }

    #[test]
    fn test_currency_label_and_share() {
        assert_eq!(format_currency_label(6000.0), "R$ 6.000");
        assert_eq!(format_share(25.0), "25.0");
        assert_eq!(format_share(33.333), "33.3");
    }
}
