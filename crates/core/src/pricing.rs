//! Prices

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{
    Money, MoneyError,
    iso::{self, Currency},
};
use thiserror::Error;

/// Errors that can occur while converting or aggregating prices.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The currency code is not a known ISO 4217 currency.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A price was below zero.
    #[error("price {0} is negative")]
    Negative(Decimal),

    /// A price or total does not fit in minor units.
    #[error("price overflowed when converted to minor units")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Look up an ISO currency by its alpha code (case-insensitive).
///
/// # Errors
///
/// Returns [`PricingError::UnknownCurrency`] when the code is not an ISO 4217 currency.
pub fn currency(code: &str) -> Result<&'static Currency, PricingError> {
    let code = code.trim().to_ascii_uppercase();

    iso::find(&code).ok_or(PricingError::UnknownCurrency(code))
}

/// Convert a decimal amount (as sent by the backend) into money in the given currency.
///
/// The amount is rounded half away from zero to the currency's minor unit.
///
/// # Errors
///
/// - [`PricingError::Negative`]: the amount is below zero.
/// - [`PricingError::Overflow`]: the amount does not fit in `i64` minor units.
pub fn money_from_decimal(
    amount: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PricingError::Negative(amount));
    }

    let scale = 10_i64
        .checked_pow(currency.exponent)
        .and_then(Decimal::from_i64)
        .ok_or(PricingError::Overflow)?;

    let minor = amount
        .checked_mul(scale)
        .ok_or(PricingError::Overflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, currency))
}

/// Price of `quantity` units at `unit_price` each.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the total does not fit in minor units.
pub fn line_total<'a>(
    unit_price: Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor = unit_price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, unit_price.currency()))
}

/// Format money for display, e.g. `$12.50`, `£0.99` or `12.50 CHF`.
pub fn format_price(price: &Money<'_, Currency>) -> String {
    let currency = price.currency();
    let minor_units = price.to_minor_units();

    let exponent = currency.exponent;
    let divisor = 10_u64.checked_pow(exponent).unwrap_or(1);
    let abs_minor = minor_units.unsigned_abs();
    let major_units = abs_minor / divisor;
    let fractional = abs_minor % divisor;
    let sign = if minor_units < 0 { "-" } else { "" };

    let amount = match usize::try_from(exponent) {
        Ok(width) if width > 0 => format!("{major_units}.{fractional:0width$}"),
        _ => format!("{major_units}"),
    };

    let symbol = match currency.iso_alpha_code {
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    };

    if symbol.is_empty() {
        format!("{sign}{amount} {}", currency.iso_alpha_code)
    } else {
        format!("{sign}{symbol}{amount}")
    }
}
