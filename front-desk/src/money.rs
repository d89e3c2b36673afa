//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to `f64`
//! for storage/serialization.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed amount for a single booking or order line (€1,000,000)
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// Validate that a monetary f64 is finite, non-negative and within bounds
pub fn validate_amount(value: f64, field_name: &str) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!(
            "{} must be a finite number, got {}",
            field_name, value
        ));
    }
    if value < 0.0 {
        return Err(format!("{} must be non-negative, got {}", field_name, value));
    }
    if value > MAX_AMOUNT {
        return Err(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field_name, MAX_AMOUNT, value
        ));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a Decimal to currency precision (half-up)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `unit_price * quantity`, rounded
pub fn line_total(unit_price: f64, quantity: u32) -> Decimal {
    round_money(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Percentage tax on an amount, rounded (`rate` is 10 for 10%)
pub fn tax_on(amount: Decimal, rate_percent: f64) -> Decimal {
    round_money(amount * to_decimal(rate_percent) / Decimal::ONE_HUNDRED)
}

/// Sum monetary values with precise arithmetic
pub fn sum_amounts<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let total: Decimal = values.into_iter().map(to_decimal).sum();
    to_f64(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_sum_amounts_precision() {
        let total = sum_amounts(std::iter::repeat_n(0.01, 1000));
        assert_eq!(total, 10.0);
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(to_f64(Decimal::new(5, 3)), 0.01);
        assert_eq!(to_f64(Decimal::new(4, 3)), 0.0);
    }

    #[test]
    fn test_line_total_and_tax() {
        let subtotal = line_total(10.99, 3);
        assert_eq!(to_f64(subtotal), 32.97);
        assert_eq!(to_f64(tax_on(subtotal, 10.0)), 3.3);
    }

    #[test]
    fn test_to_decimal_nan_becomes_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0, "amount").is_ok());
        assert!(validate_amount(360.0, "amount").is_ok());
        assert!(validate_amount(-1.0, "amount").is_err());
        assert!(validate_amount(f64::NAN, "amount").is_err());
        assert!(validate_amount(MAX_AMOUNT + 1.0, "amount").is_err());
    }
}
