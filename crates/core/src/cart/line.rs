//! Cart line items

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{PricingError, line_total},
    products::{Product, ProductSlug},
};

/// One distinct product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Product,
    quantity: u32,
    final_price: Money<'static, Currency>,
}

impl CartLine {
    pub(super) fn new(product: Product, quantity: u32, final_price: Money<'static, Currency>) -> Self {
        Self {
            product,
            quantity,
            final_price,
        }
    }

    /// Product in this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Product slug.
    pub fn slug(&self) -> &ProductSlug {
        &self.product.slug
    }

    /// Units of the product in the cart (always at least 1).
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Discounted unit price recorded by the most recent add.
    pub fn final_price(&self) -> Money<'static, Currency> {
        self.final_price
    }

    /// `quantity * final_price`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the total does not fit in minor units.
    pub fn total(&self) -> Result<Money<'static, Currency>, PricingError> {
        line_total(self.final_price, self.quantity)
    }

    pub(super) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub(super) fn set_final_price(&mut self, final_price: Money<'static, Currency>) {
        self.final_price = final_price;
    }
}
