//! Storefront
//!
//! Client-side storefront logic: product pricing and discounts, the shopping cart store, and the
//! catalog client and page state backed by the remote storefront API.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod discounts;
pub mod pricing;
pub mod products;

pub mod prelude;
