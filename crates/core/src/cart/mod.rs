//! Cart
//!
//! Client-side shopping cart store. Totals are always derived from the line list.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    pricing::PricingError,
    products::{Product, ProductPriceError, ProductSlug},
};

mod line;
mod selector;

pub use line::CartLine;
pub use selector::QuantitySelector;

/// Errors raised by cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Attempted to add zero units.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// The product has no line in the cart.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductSlug),

    /// A line quantity would exceed `u32::MAX`.
    #[error("quantity for product {0} overflowed")]
    QuantityOverflow(ProductSlug),

    /// The price currency differs from the cart currency (price currency, cart currency).
    #[error("price has currency {0}, but cart has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// Product could not be priced.
    #[error(transparent)]
    ProductPrice(#[from] ProductPriceError),

    /// Totals could not be calculated.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Shopping cart
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: &'static Currency,
    selector: QuantitySelector,
    visible: bool,
}

impl Cart {
    /// Create an empty, hidden cart priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
            selector: QuantitySelector::new(),
            visible: false,
        }
    }

    /// Current value of the quantity selector.
    pub fn quantity_selector(&self) -> u32 {
        self.selector.get()
    }

    /// Increase the quantity selector by one.
    pub fn increase_quantity_selector(&mut self) {
        self.selector.increase();
    }

    /// Decrease the quantity selector by one, stopping at 1.
    pub fn decrease_quantity_selector(&mut self) {
        self.selector.decrease();
    }

    /// Set the quantity selector, floored at 1.
    pub fn set_quantity_selector(&mut self, quantity: u32) {
        self.selector.set(quantity);
    }

    /// Add `quantity` units of `product` at `final_price` each.
    ///
    /// An existing line for the same slug has its quantity increased and its final price replaced
    /// by `final_price`; otherwise a new line is appended.
    ///
    /// # Errors
    ///
    /// - [`CartError::ZeroQuantity`]: `quantity` is 0.
    /// - [`CartError::CurrencyMismatch`]: `final_price` is not in the cart currency.
    /// - [`CartError::QuantityOverflow`]: the merged quantity exceeds `u32::MAX`.
    ///
    /// The cart is unchanged when an error is returned.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        quantity: u32,
        final_price: Money<'static, Currency>,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let price_currency = final_price.currency();

        if price_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                price_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(line) = self.line_mut(&product.slug) {
            let merged = line
                .quantity()
                .checked_add(quantity)
                .ok_or_else(|| CartError::QuantityOverflow(product.slug.clone()))?;

            line.set_quantity(merged);
            line.set_final_price(final_price);

            debug!(slug = %product.slug, quantity = merged, "merged product into cart line");
        } else {
            self.lines
                .push(CartLine::new(product.clone(), quantity, final_price));

            debug!(slug = %product.slug, quantity, "added product to cart");
        }

        Ok(())
    }

    /// Add the quantity selector's value of `product` at its discounted price.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductPrice`] if the product cannot be priced, or any error from
    /// [`Cart::add_to_cart`].
    pub fn add_selected(&mut self, product: &Product) -> Result<(), CartError> {
        let final_price = product.discounted_price(self.currency)?;

        self.add_to_cart(product, self.selector.get(), final_price)
    }

    /// Remove one unit of `product`, dropping its line when the last unit goes.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if the product has no line in the cart.
    pub fn remove_from_cart(&mut self, product: &Product) -> Result<(), CartError> {
        self.remove_one(&product.slug)
    }

    /// Remove one unit of the product with `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if there is no line for `slug`.
    pub fn remove_one(&mut self, slug: &ProductSlug) -> Result<(), CartError> {
        let position = self
            .lines
            .iter()
            .position(|line| line.slug() == slug)
            .ok_or_else(|| CartError::NotInCart(slug.clone()))?;

        let remaining = self
            .lines
            .get(position)
            .map_or(0, |line| line.quantity().saturating_sub(1));

        if remaining == 0 {
            self.lines.remove(position);

            debug!(%slug, "removed cart line");
        } else if let Some(line) = self.lines.get_mut(position) {
            line.set_quantity(remaining);

            debug!(%slug, quantity = remaining, "decremented cart line");
        }

        Ok(())
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line for `slug`, if present.
    pub fn line(&self, slug: &ProductSlug) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.slug() == slug)
    }

    fn line_mut(&mut self, slug: &ProductSlug) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.slug() == slug)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line quantities.
    pub fn total_quantity(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// Sum of `quantity * final_price` over all lines.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line total or the sum overflows.
    pub fn total_price(&self) -> Result<Money<'static, Currency>, PricingError> {
        self.lines
            .iter()
            .try_fold(Money::from_minor(0, self.currency), |acc, line| {
                let total = line.total()?;

                Ok(acc.add(total)?)
            })
    }

    /// Currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Whether the cart panel is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the cart panel.
    pub fn show_cart(&mut self) {
        self.visible = true;
    }

    /// Hide the cart panel.
    pub fn hide_cart(&mut self) {
        self.visible = false;
    }

    /// Toggle the cart panel.
    pub fn toggle_cart(&mut self) {
        self.visible = !self.visible;
    }
}
