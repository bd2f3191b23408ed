//! Storefront pages

mod home;
mod product;
mod products;

pub(crate) use home::HomePage;
pub(crate) use product::ProductPage;
pub(crate) use products::ProductsPage;
