use leptos::prelude::*;
use storefront::{cart::Cart, products::Product};
use tracing::warn;

use crate::{
    Notice,
    components::{PriceSummary, QuantitySelector, price_labels},
    nav::Page,
};

/// Product detail with quantity selector and add-to-cart.
#[component]
pub(crate) fn ProductPage(product: Product) -> impl IntoView {
    let cart = expect_context::<RwSignal<Cart>>();
    let page = expect_context::<RwSignal<Page>>();
    let notice = expect_context::<Notice>();

    let labels = price_labels(&product, cart.with_untracked(Cart::currency));
    let image = product.primary_image();
    let title = product.title.clone();
    let description = product.description.clone().unwrap_or_default();
    let categories = product.category_names();

    let add_to_cart = move |_| {
        let quantity = cart.with_untracked(Cart::quantity_selector);

        match cart.try_update(|cart| cart.add_selected(&product)) {
            Some(Ok(())) => notice.show(format!("Added {quantity} × {} to cart.", product.title)),
            Some(Err(error)) => {
                warn!(%error, slug = %product.slug, "failed to add product to cart");

                notice.show(format!("Could not add {} to cart: {error}", product.title));
            }
            None => {}
        }
    };

    view! {
        <article class="product-detail">
            <button type="button" class="nav-link" on:click=move |_| page.set(Page::Products)>
                "Back to products"
            </button>
            {image.map(|url| view! { <img class="product-detail-image" src=url alt=title.clone() /> })}
            <h2 class="product-detail-title">{title.clone()}</h2>
            <p class="product-categories">{categories}</p>
            <p class="product-description">{description}</p>
            <PriceSummary labels=labels />
            <QuantitySelector />
            <button type="button" class="add-to-cart" on:click=add_to_cart>
                "Add to cart"
            </button>
        </article>
    }
}
