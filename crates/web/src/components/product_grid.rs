use leptos::prelude::*;
use storefront::catalog::{ListingView, ProductListing};

use super::product_card::ProductCard;

/// Product grid for a listing: loading text, product cards, or a message.
#[component]
pub(crate) fn ProductGrid(#[prop(into)] listing: Signal<ProductListing>) -> impl IntoView {
    move || {
        listing.with(|listing| match listing.view() {
            ListingView::Loading => view! { <p class="listing-status">"Loading"</p> }.into_any(),
            ListingView::Products(products) => view! {
                <ul class="product-grid">
                    {products
                        .iter()
                        .map(|product| view! { <ProductCard product=product.clone() /> })
                        .collect_view()}
                </ul>
            }
            .into_any(),
            ListingView::Message(message) => {
                view! { <p class="listing-status">{message.to_string()}</p> }.into_any()
            }
        })
    }
}
