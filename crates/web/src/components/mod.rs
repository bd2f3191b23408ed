//! Shared view components

mod product_card;
mod product_grid;
mod quantity_selector;
mod search_bar;

pub(crate) use product_card::{PriceSummary, price_labels};
pub(crate) use product_grid::ProductGrid;
pub(crate) use quantity_selector::QuantitySelector;
pub(crate) use search_bar::SearchBar;
