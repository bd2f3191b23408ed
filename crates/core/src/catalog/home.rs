//! Home page state.

use futures::join;
use tracing::warn;

use crate::{
    catalog::{client::CatalogApi, errors::CatalogError, listing::ProductListing},
    products::Category,
};

/// Category list plus product listing shown on the home page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeCatalog {
    categories: Option<Vec<Category>>,
    products: ProductListing,
}

impl HomeCatalog {
    /// Home page waiting for its fetches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch categories and products concurrently.
    pub async fn load<A: CatalogApi>(&mut self, api: &A) {
        let (categories, products) = join!(api.categories(), api.products());

        self.apply_categories(categories);
        self.products.apply_products(products);
    }

    /// Apply the result of a category fetch.
    ///
    /// A failed fetch shows a single placeholder category.
    pub fn apply_categories(&mut self, result: Result<Vec<Category>, CatalogError>) {
        let categories = result.unwrap_or_else(|error| {
            warn!(%error, "failed to load categories");

            vec![Category::error_placeholder()]
        });

        self.categories = Some(categories);
    }

    /// Record a failure that prevented both fetches.
    pub fn fail(&mut self, error: &CatalogError) {
        warn!(%error, "failed to load home page");

        self.categories = Some(vec![Category::error_placeholder()]);
        self.products.fail(error);
    }

    /// Categories, once fetched.
    pub fn categories(&self) -> Option<&[Category]> {
        self.categories.as_deref()
    }

    /// Product listing.
    pub fn products(&self) -> &ProductListing {
        &self.products
    }

    /// Whether any fetch is still pending.
    pub fn is_loading(&self) -> bool {
        self.categories.is_none() || self.products.is_loading()
    }
}
