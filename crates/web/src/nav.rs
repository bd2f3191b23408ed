//! Navigation

use leptos::prelude::*;
use storefront::{cart::Cart, products::Product};

/// View currently shown in the main area.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Page {
    /// Categories and product grid.
    Home,

    /// Searchable product grid.
    Products,

    /// Product detail, opened from a product card.
    Product(Box<Product>),
}

/// Header cart button label.
pub(crate) fn cart_button_label(total_quantity: u64) -> String {
    match total_quantity {
        0 => "Cart".to_string(),
        quantity => format!("Cart ({quantity})"),
    }
}

#[component]
fn NavLink(target: Page, label: &'static str) -> impl IntoView {
    let page = expect_context::<RwSignal<Page>>();
    let current = target.clone();

    view! {
        <button
            type="button"
            class=move || {
                if page.with(|page| *page == current) {
                    "nav-link nav-link-active"
                } else {
                    "nav-link"
                }
            }
            on:click=move |_| page.set(target.clone())
        >
            {label}
        </button>
    }
}

/// Site header with navigation and the cart toggle.
#[component]
pub(crate) fn SiteHeader() -> impl IntoView {
    let cart = expect_context::<RwSignal<Cart>>();

    view! {
        <header class="site-header">
            <h1 class="site-title">"Storefront"</h1>
            <nav class="site-nav">
                <NavLink target=Page::Home label="Home" />
                <NavLink target=Page::Products label="Products" />
            </nav>
            <button
                type="button"
                class="cart-toggle"
                aria-expanded=move || cart.with(Cart::is_visible).to_string()
                on:click=move |_| cart.update(Cart::toggle_cart)
            >
                {move || cart_button_label(cart.with(Cart::total_quantity))}
            </button>
        </header>
    }
}
