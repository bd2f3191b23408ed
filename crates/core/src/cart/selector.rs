//! Quantity selector

/// Pending "quantity to add" shown before a product is added to the cart.
///
/// The value never drops below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector(u32);

impl QuantitySelector {
    /// Selector starting at 1.
    pub fn new() -> Self {
        Self(1)
    }

    /// Current quantity.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Set the quantity, floored at 1.
    pub fn set(&mut self, quantity: u32) {
        self.0 = quantity.max(1);
    }

    /// Increase the quantity by one.
    pub fn increase(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Decrease the quantity by one, stopping at 1.
    pub fn decrease(&mut self) {
        self.0 = self.0.saturating_sub(1).max(1);
    }
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self::new()
    }
}
