//! Product listing page state.

use tracing::{debug, warn};

use crate::{
    catalog::{client::CatalogApi, errors::CatalogError},
    products::Product,
};

/// Shown when a listing resolved to no products and no error.
pub const NO_PRODUCTS_MESSAGE: &str = "No Products Available";

/// What a product listing should render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListingView<'a> {
    /// The first fetch has not resolved yet.
    Loading,

    /// Products to render.
    Products(&'a [Product]),

    /// Nothing to render; show this message instead.
    Message(&'a str),
}

/// Product list with free-text search.
///
/// The list fetched on load is kept aside so clearing a search restores it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListing {
    displayed: Option<Vec<Product>>,
    original: Vec<Product>,
    load_error: Option<String>,
    error_message: Option<String>,
    search_generation: u64,
}

/// A search sent to the backend whose result has not been applied yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    generation: u64,
    query: String,
}

impl PendingSearch {
    /// Trimmed query to send.
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl ProductListing {
    /// Listing waiting for its first fetch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the product list and replace the listing with it.
    pub async fn load<A: CatalogApi>(&mut self, api: &A) {
        let result = api.products().await;

        self.apply_products(result);
    }

    /// Apply the result of a product list fetch.
    pub fn apply_products(&mut self, result: Result<Vec<Product>, CatalogError>) {
        match result {
            Ok(products) => {
                self.original.clone_from(&products);
                self.displayed = Some(products);
                self.load_error = None;
                self.error_message = None;
            }
            Err(error) => self.fail(&error),
        }
    }

    /// Record a failed load: no products and the error's user-facing message.
    pub fn fail(&mut self, error: &CatalogError) {
        warn!(%error, "failed to load products");

        let message = error.user_message();

        self.original.clear();
        self.displayed = Some(Vec::new());
        self.load_error = Some(message.clone());
        self.error_message = Some(message);
    }

    /// Search the catalog and display the matches.
    ///
    /// A blank query clears the search without contacting the backend.
    pub async fn search<A: CatalogApi>(&mut self, api: &A, query: &str) {
        let Some(pending) = self.begin_search(query) else {
            return;
        };

        let result = api.search(pending.query()).await;

        self.finish_search(&pending, result);
    }

    /// Start a search, returning the request to send.
    ///
    /// Returns `None` when there is nothing to fetch: a blank query clears the
    /// search instead, and searches are ignored until the first load resolves.
    pub fn begin_search(&mut self, query: &str) -> Option<PendingSearch> {
        let query = query.trim();

        if query.is_empty() {
            self.clear_search();
            return None;
        }

        if self.is_loading() {
            debug!(query, "ignoring search before products have loaded");
            return None;
        }

        self.search_generation += 1;

        Some(PendingSearch {
            generation: self.search_generation,
            query: query.to_string(),
        })
    }

    /// Apply the result of `pending`, unless a later search or a clear superseded it.
    ///
    /// Returns whether the result was applied.
    pub fn finish_search(
        &mut self,
        pending: &PendingSearch,
        result: Result<Vec<Product>, CatalogError>,
    ) -> bool {
        if pending.generation != self.search_generation {
            debug!(query = %pending.query, "discarding superseded search result");
            return false;
        }

        self.apply_search(result);

        true
    }

    /// Apply the result of a search fetch.
    pub fn apply_search(&mut self, result: Result<Vec<Product>, CatalogError>) {
        match result {
            Ok(products) => {
                self.displayed = Some(products);
                self.error_message = None;
            }
            Err(error) => {
                warn!(%error, "product search failed");

                self.displayed = Some(Vec::new());
                self.error_message = Some(error.user_message());
            }
        }
    }

    /// Restore the list fetched on load.
    pub fn clear_search(&mut self) {
        if self.displayed.is_none() {
            return;
        }

        self.search_generation += 1;
        self.displayed = Some(self.original.clone());
        self.error_message.clone_from(&self.load_error);
    }

    /// Whether the first fetch is still pending.
    pub fn is_loading(&self) -> bool {
        self.displayed.is_none()
    }

    /// Products currently displayed.
    pub fn products(&self) -> &[Product] {
        self.displayed.as_deref().unwrap_or_default()
    }

    /// Products fetched on load.
    pub fn original(&self) -> &[Product] {
        &self.original
    }

    /// User-facing error from the most recent failed fetch.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Render state for this listing.
    pub fn view(&self) -> ListingView<'_> {
        match &self.displayed {
            None => ListingView::Loading,
            Some(products) if !products.is_empty() => ListingView::Products(products),
            Some(_) => {
                ListingView::Message(self.error_message().unwrap_or(NO_PRODUCTS_MESSAGE))
            }
        }
    }
}
