//! Catalog
//!
//! Backend client plus the page state built from its responses.

mod client;
pub mod errors;
mod home;
mod listing;

pub use client::{CatalogApi, CatalogClient, MockCatalogApi};
pub use errors::{CatalogError, FALLBACK_ERROR_MESSAGE};
pub use home::HomeCatalog;
pub use listing::{ListingView, NO_PRODUCTS_MESSAGE, PendingSearch, ProductListing};
