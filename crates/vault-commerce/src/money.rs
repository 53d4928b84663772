//! Money type for representing monetary values.
//!
//! Amounts are integers in the currency's minor unit, so totals never
//! pick up floating-point drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₽").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Number of decimal places in the minor unit.
    ///
    /// Ruble prices are quoted in whole rubles.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::RUB => 0,
            Currency::USD | Currency::EUR => 2,
        }
    }

    /// Whether the symbol is written after the amount.
    fn symbol_trails(&self) -> bool {
        matches!(self, Currency::RUB)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the currency's minor unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Format the amount without symbol (e.g., "25.00").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        if places == 0 {
            return self.amount.to_string();
        }
        let divisor = 10_i64.pow(places);
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        format!(
            "{sign}{}.{:0width$}",
            abs / divisor as u64,
            abs % divisor as u64,
            width = places as usize
        )
    }

    /// Format as a display string (e.g., "2500 ₽", "$25.00").
    pub fn display(&self) -> String {
        if self.currency.symbol_trails() {
            format!("{} {}", self.display_amount(), self.currency.symbol())
        } else {
            format!("{}{}", self.currency.symbol(), self.display_amount())
        }
    }

    /// Try to add another Money value, returning None if currencies don't match.
    ///
    /// The amount saturates instead of overflowing.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount.saturating_add(other.amount),
            self.currency,
        ))
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn times(&self, quantity: u32) -> Money {
        Money::new(
            self.amount.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
