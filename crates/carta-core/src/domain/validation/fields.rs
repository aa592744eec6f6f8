//! Per-field validators.
//!
//! Each validator looks at one raw JSON value and is independent of every
//! other field. `None` means the key was absent from the input. JSON `null`
//! is treated the same as an absent key, except for the description where it
//! means "clear".
//!
//! Every validator returns `Ok(None)` for an absent optional field, `Ok(Some)`
//! with the normalized value, or `Err` with every rule the value breaks.

use rust_decimal::Decimal;
use serde_json::{Number, Value};

use crate::domain::{
    entities::common::{Description, DishName},
    price::Price,
    validation::ValidationErrorKind,
    value_objects::{Category, DishStatus},
};

/// Result of validating one field.
pub type FieldOutcome<T> = Result<Option<T>, Vec<ValidationErrorKind>>;

/// Whether a missing field is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Absent and `null` collapse to `None`.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn missing<T>(presence: Presence, kind: ValidationErrorKind) -> FieldOutcome<T> {
    match presence {
        Presence::Required => Err(vec![kind]),
        Presence::Optional => Ok(None),
    }
}

/// Name: text, trimmed, 1 to 100 characters.
///
/// A non-text value is reported as a missing name.
pub fn validate_name(value: Option<&Value>, presence: Presence) -> FieldOutcome<DishName> {
    match present(value) {
        None => missing(presence, ValidationErrorKind::NameRequired),
        Some(Value::String(raw)) => DishName::parse(raw).map(Some).map_err(|k| vec![k]),
        Some(_) => Err(vec![ValidationErrorKind::NameRequired]),
    }
}

/// Description: optional text, trimmed, at most 500 characters.
///
/// The outer `Option` is key presence; the inner one is the value, where a
/// blank string or `null` both mean "no description".
pub fn validate_description(value: Option<&Value>) -> FieldOutcome<Option<Description>> {
    match value {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::String(raw)) => Description::parse(raw).map(Some).map_err(|k| vec![k]),
        Some(_) => Err(vec![ValidationErrorKind::DescriptionInvalidType]),
    }
}

/// Price: a JSON number between 0.01 and 999999.99 with at most two
/// fractional digits.
///
/// Numeric strings are rejected as the wrong type.
pub fn validate_price(value: Option<&Value>, presence: Presence) -> FieldOutcome<Price> {
    match present(value) {
        None => missing(presence, ValidationErrorKind::PriceRequired),
        Some(Value::Number(n)) => {
            let amount = number_to_decimal(n)?;
            Price::try_new(amount).map(Some)
        }
        Some(_) => Err(vec![ValidationErrorKind::PriceInvalidType]),
    }
}

/// Category: one of the canonical labels, matched exactly.
pub fn validate_category(value: Option<&Value>, presence: Presence) -> FieldOutcome<Category> {
    match present(value) {
        None => missing(presence, ValidationErrorKind::CategoryRequired),
        Some(Value::String(raw)) => Category::from_label(raw)
            .map(Some)
            .ok_or_else(|| vec![ValidationErrorKind::CategoryInvalid]),
        Some(_) => Err(vec![ValidationErrorKind::CategoryInvalid]),
    }
}

/// Status: `"Available"` or `"SoldOut"`. Always optional.
pub fn validate_status(value: Option<&Value>) -> FieldOutcome<DishStatus> {
    match present(value) {
        None => Ok(None),
        Some(Value::String(raw)) => DishStatus::from_canonical(raw)
            .map(Some)
            .ok_or_else(|| vec![ValidationErrorKind::StatusInvalid]),
        Some(_) => Err(vec![ValidationErrorKind::StatusInvalid]),
    }
}

/// Convert a JSON number to an exact decimal from the text it was written
/// as, so `10.555` stays `10.555` and `9.999999999999999999` is not rounded
/// to `10`.
///
/// Numbers `Decimal` cannot hold exactly are classified by magnitude.
fn number_to_decimal(n: &Number) -> Result<Decimal, Vec<ValidationErrorKind>> {
    let text = n.to_string();
    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(&text)
    } else {
        Decimal::from_str_exact(trim_fraction_zeros(&text))
    };
    if let Ok(amount) = parsed {
        return Ok(amount);
    }

    // Non-finite only when the magnitude overflows f64.
    let approx = n.as_f64().unwrap_or(if text.starts_with('-') {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    });
    if approx > MAX_PRICE_F64 {
        Err(vec![ValidationErrorKind::PriceTooHigh])
    } else if approx <= -1.0 {
        Err(vec![ValidationErrorKind::PriceTooLow])
    } else if approx < MIN_PRICE_F64 {
        Err(vec![
            ValidationErrorKind::PriceTooLow,
            ValidationErrorKind::PriceTooManyDecimals,
        ])
    } else {
        Err(vec![ValidationErrorKind::PriceTooManyDecimals])
    }
}

/// `"5.000"` -> `"5"`, so zero padding past `Decimal`'s 28 digits is not
/// mistaken for precision.
fn trim_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

// Only used to classify numbers outside `Decimal`'s range.
const MIN_PRICE_F64: f64 = 0.01;
const MAX_PRICE_F64: f64 = 999_999.99;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn required_name_missing_or_null() {
        assert_eq!(
            validate_name(None, Presence::Required),
            Err(vec![ValidationErrorKind::NameRequired])
        );
        assert_eq!(
            validate_name(Some(&Value::Null), Presence::Required),
            Err(vec![ValidationErrorKind::NameRequired])
        );
        assert_eq!(validate_name(None, Presence::Optional), Ok(None));
    }

    #[test]
    fn name_of_wrong_type_is_required() {
        assert_eq!(
            validate_name(Some(&json!(42)), Presence::Optional),
            Err(vec![ValidationErrorKind::NameRequired])
        );
    }

    #[test]
    fn name_is_trimmed() {
        let name = validate_name(Some(&json!("  Pozole ")), Presence::Required)
            .unwrap()
            .unwrap();
        assert_eq!(name.as_str(), "Pozole");
    }

    #[test]
    fn description_presence_is_tracked() {
        assert_eq!(validate_description(None), Ok(None));
        assert_eq!(validate_description(Some(&Value::Null)), Ok(Some(None)));
        assert_eq!(validate_description(Some(&json!("  "))), Ok(Some(None)));
        let described = validate_description(Some(&json!(" Con queso "))).unwrap();
        assert_eq!(
            described.flatten().map(|d| d.as_str().to_string()),
            Some("Con queso".to_string())
        );
    }

    #[test]
    fn description_must_be_text() {
        assert_eq!(
            validate_description(Some(&json!(["a"]))),
            Err(vec![ValidationErrorKind::DescriptionInvalidType])
        );
    }

    #[test]
    fn price_accepts_integers_and_two_decimals() {
        let eight = validate_price(Some(&json!(8)), Presence::Required)
            .unwrap()
            .unwrap();
        assert_eq!(eight.formatted(), "8.00");

        let tacos = validate_price(Some(&json!(9.99)), Presence::Required)
            .unwrap()
            .unwrap();
        assert_eq!(tacos.formatted(), "9.99");
    }

    #[test]
    fn float_artifacts_do_not_leak_into_precision_check() {
        // 0.1 + 0.2 style values arrive as their shortest decimal text
        for raw in [json!(0.07), json!(1.15), json!(4.35), json!(999999.99)] {
            assert!(
                validate_price(Some(&raw), Presence::Required).is_ok(),
                "rejected {raw}"
            );
        }
    }

    #[test]
    fn price_string_is_wrong_type() {
        assert_eq!(
            validate_price(Some(&json!("9.99")), Presence::Required),
            Err(vec![ValidationErrorKind::PriceInvalidType])
        );
    }

    #[test]
    fn price_rules() {
        assert_eq!(
            validate_price(Some(&json!(0)), Presence::Required),
            Err(vec![ValidationErrorKind::PriceTooLow])
        );
        assert_eq!(
            validate_price(Some(&json!(-3.5)), Presence::Required),
            Err(vec![ValidationErrorKind::PriceTooLow])
        );
        assert_eq!(
            validate_price(Some(&json!(1_000_000)), Presence::Required),
            Err(vec![ValidationErrorKind::PriceTooHigh])
        );
        assert_eq!(
            validate_price(Some(&json!(10.555)), Presence::Required),
            Err(vec![ValidationErrorKind::PriceTooManyDecimals])
        );
        assert_eq!(
            validate_price(None, Presence::Required),
            Err(vec![ValidationErrorKind::PriceRequired])
        );
    }

    #[test]
    fn price_out_of_decimal_range() {
        assert_eq!(
            validate_price(Some(&json!(1e300)), Presence::Required),
            Err(vec![ValidationErrorKind::PriceTooHigh])
        );
        assert_eq!(
            validate_price(Some(&json!(-1e300)), Presence::Required),
            Err(vec![ValidationErrorKind::PriceTooLow])
        );
    }

    #[test]
    fn tiny_price_in_scientific_notation() {
        assert_eq!(
            validate_price(Some(&json!(1e-7)), Presence::Required),
            Err(vec![
                ValidationErrorKind::PriceTooLow,
                ValidationErrorKind::PriceTooManyDecimals
            ])
        );
    }

    fn price_from_text(text: &str) -> FieldOutcome<Price> {
        let raw: Value = serde_json::from_str(text).unwrap();
        validate_price(Some(&raw), Presence::Required)
    }

    #[test]
    fn precision_is_checked_on_the_written_digits() {
        for text in ["9.999999999999999999", "10.0000000000000001", "0.0100000000000000001"] {
            assert_eq!(
                price_from_text(text),
                Err(vec![ValidationErrorKind::PriceTooManyDecimals]),
                "accepted {text}"
            );
        }
    }

    #[test]
    fn written_zero_padding_is_not_precision() {
        assert_eq!(price_from_text("12.50").unwrap().unwrap().formatted(), "12.50");
        assert_eq!(price_from_text("5.000").unwrap().unwrap().formatted(), "5.00");
        assert_eq!(
            price_from_text("5.000000000000000000000000000000")
                .unwrap()
                .unwrap()
                .formatted(),
            "5.00"
        );
    }

    #[test]
    fn exponent_forms_are_exact() {
        assert_eq!(price_from_text("1.5E+2").unwrap().unwrap().formatted(), "150.00");
        assert_eq!(price_from_text("1250e-2").unwrap().unwrap().formatted(), "12.50");
        assert_eq!(
            price_from_text("1.0005e1"),
            Err(vec![ValidationErrorKind::PriceTooManyDecimals])
        );
        assert_eq!(
            price_from_text("1e400"),
            Err(vec![ValidationErrorKind::PriceTooHigh])
        );
    }

    #[test]
    fn category_is_exact_label() {
        assert_eq!(
            validate_category(Some(&json!("Platos Fuertes")), Presence::Required),
            Ok(Some(Category::PlatosFuertes))
        );
        assert_eq!(
            validate_category(Some(&json!("platos fuertes")), Presence::Required),
            Err(vec![ValidationErrorKind::CategoryInvalid])
        );
        assert_eq!(
            validate_category(None, Presence::Required),
            Err(vec![ValidationErrorKind::CategoryRequired])
        );
        assert_eq!(validate_category(None, Presence::Optional), Ok(None));
    }

    #[test]
    fn status_values() {
        assert_eq!(
            validate_status(Some(&json!("SoldOut"))),
            Ok(Some(DishStatus::SoldOut))
        );
        assert_eq!(validate_status(None), Ok(None));
        assert_eq!(
            validate_status(Some(&json!("Hidden"))),
            Err(vec![ValidationErrorKind::StatusInvalid])
        );
        assert_eq!(
            validate_status(Some(&json!(true))),
            Err(vec![ValidationErrorKind::StatusInvalid])
        );
    }
}
