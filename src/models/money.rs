//! Money type for representing currency amounts
//!
//! Internally stores amounts in centavos (i64) so that totals are exact and
//! independent of summation order. Serialized as a plain decimal number of
//! reais, which is what dataset files and chart configurations carry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::display::number::format_currency;
use crate::error::{CarteiraError, CarteiraResult};

/// Largest magnitude accepted from decimal input, in centavos (R$ 10 trilhões)
pub const MAX_ABS_CENTS: i64 = 1_000_000_000_000_000;

/// A monetary amount stored as centavos (hundredths of a real)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from centavos
    ///
    /// # Examples
    /// ```
    /// use carteira::models::Money;
    /// let amount = Money::from_cents(1050); // R$ 10,50
    /// assert_eq!(amount.reais(), 10);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole reais
    pub const fn from_reais(reais: i64) -> Self {
        Self(reais * 100)
    }

    /// Create a Money amount from a decimal value, rounded to the nearest centavo
    ///
    /// # Errors
    ///
    /// Returns a validation error for non-finite values and for amounts
    /// beyond [`MAX_ABS_CENTS`].
    pub fn try_from_decimal(value: f64) -> CarteiraResult<Self> {
        if !value.is_finite() {
            return Err(CarteiraError::Validation(
                "amount must be a finite number".into(),
            ));
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_ABS_CENTS as f64 {
            return Err(CarteiraError::Validation(format!(
                "amount {} is out of range",
                value
            )));
        }
        Ok(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in centavos
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole reais portion (truncated toward zero)
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Get the centavos portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a plain decimal number, as charts consume it
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Mean of the amounts, rounded to the nearest centavo. Zero when empty
    pub fn average<'a, I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = &'a Money>,
    {
        let (sum, count) = amounts
            .into_iter()
            .fold((0i128, 0i128), |(sum, count), m| (sum + m.0 as i128, count + 1));
        if count == 0 {
            Self::zero()
        } else {
            Self((sum as f64 / count as f64).round() as i64)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(*self))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.cents_part() == 0 {
            serializer.serialize_i64(self.reais())
        } else {
            serializer.serialize_f64(self.as_decimal())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::try_from_decimal(value).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
