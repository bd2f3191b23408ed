//! Cart panel

use storefront::{
    cart::{Cart, CartError},
    products::ProductSlug,
};

mod line;
mod panel;

pub(crate) use panel::CartPanel;

/// Add one more unit to an existing line at the line's stored final price.
pub(crate) fn add_one_more(cart: &mut Cart, slug: &ProductSlug) -> Result<(), CartError> {
    let (product, final_price) = cart
        .line(slug)
        .map(|line| (line.product().clone(), line.final_price()))
        .ok_or_else(|| CartError::NotInCart(slug.clone()))?;

    cart.add_to_cart(&product, 1, final_price)
}
