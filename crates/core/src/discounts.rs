//! Discounts
//!
//! Percentage discounts applied to a single unit price.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Discount percentage outside of 0-100 percent points.
    #[error("discount of {0}% is outside the range 0-100")]
    OutOfRange(Decimal),

    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Build a fractional [`Percentage`] from percent points, e.g. `25` becomes `0.25`.
///
/// # Errors
///
/// Returns [`DiscountError::OutOfRange`] if `points` is below 0 or above 100.
pub fn percentage_from_points(points: Decimal) -> Result<Percentage, DiscountError> {
    if points < Decimal::ZERO || points > Decimal::ONE_HUNDRED {
        return Err(DiscountError::OutOfRange(points));
    }

    Ok(Percentage::from(points / Decimal::ONE_HUNDRED))
}

/// Apply a percentage discount to a unit price.
///
/// The result is `price - price * percent`, with the discount amount rounded half away from zero
/// to the currency's minor unit. A 0% discount returns the price unchanged and a 100% discount
/// returns zero.
///
/// # Errors
///
/// - [`DiscountError::OutOfRange`]: `percent` is below 0% or above 100%.
/// - [`DiscountError::PercentConversion`]: the discount amount cannot be represented in minor
///   units.
/// - [`DiscountError::Money`]: underlying money arithmetic fails.
pub fn calculate_discount<'a>(
    price: Money<'a, Currency>,
    percent: &Percentage,
) -> Result<Money<'a, Currency>, DiscountError> {
    let fraction = (*percent) * Decimal::ONE;

    if fraction < Decimal::ZERO || fraction > Decimal::ONE {
        return Err(DiscountError::OutOfRange(fraction * Decimal::ONE_HUNDRED));
    }

    let discount_minor = percent_of_minor(percent, price.to_minor_units())?;

    Ok(price.sub(Money::from_minor(discount_minor, price.currency()))?)
}

/// Calculate the discount amount in minor units based on a percentage and a minor unit amount.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the percentage calculation overflows or cannot
/// be safely represented.
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // decimal_percentage doesn't expose the underlying Decimal
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}
