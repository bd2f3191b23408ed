//! CLI errors

use std::io;

use storefront::{
    cart::CartError,
    catalog::CatalogError,
    pricing::PricingError,
    products::{ProductPriceError, ProductSlug},
};
use thiserror::Error;

/// Errors that end a CLI command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The configured currency is not an ISO 4217 code.
    #[error("invalid currency: {0}")]
    Currency(PricingError),

    /// The catalog client could not be created.
    #[error("invalid backend configuration: {0}")]
    Client(CatalogError),

    /// A backend request failed.
    #[error("{}", .0.user_message())]
    Backend(#[from] CatalogError),

    /// A cart operation named a product the catalog does not have.
    #[error("no product with slug {0}")]
    UnknownProduct(ProductSlug),

    /// A cart operation was rejected.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// A product could not be priced.
    #[error(transparent)]
    ProductPrice(#[from] ProductPriceError),

    /// Totals could not be calculated.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_show_user_message() {
        let with_detail = CliError::from(CatalogError::Backend {
            status: 404,
            detail: Some("Product not found".to_string()),
        });
        let without_detail = CliError::from(CatalogError::Backend {
            status: 502,
            detail: None,
        });

        assert_eq!(with_detail.to_string(), "Product not found");
        assert_eq!(without_detail.to_string(), "Something went wrong");
    }
}
