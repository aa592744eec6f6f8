//! Dish price and its canonical formatting.
//!
//! Prices are fixed-point [`Decimal`]s. Range and precision checks compare
//! exact decimal values, so `0.1 + 0.2`-style binary float artifacts cannot
//! misclassify a price. A raw `10.005` has three fractional digits and is
//! rejected; it is never silently rounded.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationErrorKind;

/// Maximum number of fractional digits a price may carry.
pub const PRICE_SCALE: u32 = 2;

/// Smallest accepted price: 0.01.
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest accepted price: 999999.99.
pub const MAX_PRICE: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

/// A validated dish price.
///
/// Invariant: `MIN_PRICE <= amount <= MAX_PRICE` and the amount has at most
/// two significant fractional digits. Stored rescaled to exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Validate an exact decimal amount.
    ///
    /// Returns every violated rule: an amount can be both out of range and
    /// over-precise.
    pub fn try_new(amount: Decimal) -> Result<Self, Vec<ValidationErrorKind>> {
        let violations = Self::violations(amount);
        if violations.is_empty() {
            let mut amount = amount.normalize();
            amount.rescale(PRICE_SCALE);
            Ok(Self(amount))
        } else {
            Err(violations)
        }
    }

    /// Rules `amount` breaks, in reporting order.
    pub fn violations(amount: Decimal) -> Vec<ValidationErrorKind> {
        let mut out = Vec::new();
        if amount < MIN_PRICE {
            out.push(ValidationErrorKind::PriceTooLow);
        }
        if amount > MAX_PRICE {
            out.push(ValidationErrorKind::PriceTooHigh);
        }
        if amount.normalize().scale() > PRICE_SCALE {
            out.push(ValidationErrorKind::PriceTooManyDecimals);
        }
        out
    }

    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// `"15.50"`
    pub fn formatted(&self) -> String {
        format_price(self.0)
    }

    /// `"$15.50"`
    pub fn currency(&self) -> String {
        format_currency(self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl TryFrom<Decimal> for Price {
    type Error = String;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(amount).map_err(|kinds| {
            kinds
                .iter()
                .map(|k| k.message())
                .collect::<Vec<_>>()
                .join("; ")
        })
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

// ── Formatting helpers ───────────────────────────────────────────────────────

/// Render `amount` with exactly two fractional digits, rounding half away
/// from zero. No currency symbol.
pub fn format_price(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_SCALE);
    rounded.to_string()
}

/// [`format_price`] prefixed with `$`.
pub fn format_currency(amount: Decimal) -> String {
    format!("${}", format_price(amount))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn bounds_are_exact() {
        assert_eq!(MIN_PRICE, dec("0.01"));
        assert_eq!(MAX_PRICE, dec("999999.99"));
    }

    #[test]
    fn format_price_pads_to_two_digits() {
        assert_eq!(format_price(dec("8")), "8.00");
        assert_eq!(format_price(dec("15.5")), "15.50");
        assert_eq!(format_price(dec("12.75")), "12.75");
    }

    #[test]
    fn format_currency_prefixes_dollar() {
        assert_eq!(format_currency(dec("15.5")), "$15.50");
        assert_eq!(format_currency(dec("999999.99")), "$999999.99");
    }

    #[test]
    fn format_price_rounds_half_away_from_zero() {
        assert_eq!(format_price(dec("1.005")), "1.01");
        assert_eq!(format_price(dec("2.345")), "2.35");
        assert_eq!(format_price(dec("2.344")), "2.34");
    }

    #[test]
    fn format_price_is_idempotent() {
        for raw in ["0.01", "8", "9.99", "15.5", "100.10", "999999.99"] {
            let once = format_price(dec(raw));
            let twice = format_price(dec(&once));
            assert_eq!(once, twice, "not idempotent for {raw}");
        }
    }

    #[test]
    fn valid_price_is_rescaled() {
        let price = Price::try_new(dec("8")).unwrap();
        assert_eq!(price.amount().scale(), 2);
        assert_eq!(price.to_string(), "8.00");
    }

    #[test]
    fn trailing_zeros_do_not_count_as_decimals() {
        assert!(Price::try_new(dec("9.9900")).is_ok());
    }

    #[test]
    fn zero_and_negative_are_too_low() {
        assert_eq!(
            Price::try_new(Decimal::ZERO).unwrap_err(),
            vec![ValidationErrorKind::PriceTooLow]
        );
        assert_eq!(
            Price::try_new(dec("-5")).unwrap_err(),
            vec![ValidationErrorKind::PriceTooLow]
        );
    }

    #[test]
    fn above_max_is_too_high() {
        assert_eq!(
            Price::try_new(dec("1000000")).unwrap_err(),
            vec![ValidationErrorKind::PriceTooHigh]
        );
    }

    #[test]
    fn three_decimals_are_rejected() {
        assert_eq!(
            Price::try_new(dec("10.555")).unwrap_err(),
            vec![ValidationErrorKind::PriceTooManyDecimals]
        );
        assert_eq!(
            Price::try_new(dec("10.005")).unwrap_err(),
            vec![ValidationErrorKind::PriceTooManyDecimals]
        );
    }

    #[test]
    fn range_and_precision_are_both_reported() {
        assert_eq!(
            Price::try_new(dec("0.001")).unwrap_err(),
            vec![
                ValidationErrorKind::PriceTooLow,
                ValidationErrorKind::PriceTooManyDecimals
            ]
        );
    }

    #[test]
    fn price_deserializes_through_validation() {
        let price: Price = serde_json::from_str("\"12.75\"").unwrap();
        assert_eq!(price.currency(), "$12.75");
        assert!(serde_json::from_str::<Price>("\"0\"").is_err());
    }
}
