//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine, QuantitySelector},
    catalog::{
        CatalogApi, CatalogClient, CatalogError, HomeCatalog, ListingView, ProductListing,
    },
    config::StorefrontConfig,
    discounts::{DiscountError, calculate_discount, percentage_from_points},
    pricing::{PricingError, format_price, money_from_decimal},
    products::{Category, Product, ProductId, ProductImage, ProductSlug},
};
