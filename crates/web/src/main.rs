//! Leptos Storefront Web Application

use leptos::prelude::*;
use storefront::{
    cart::Cart,
    catalog::CatalogClient,
    config::{DEFAULT_BACKEND_API, DEFAULT_CURRENCY, StorefrontConfig},
};

use crate::{
    cart::CartPanel,
    nav::{Page, SiteHeader},
    pages::{HomePage, ProductPage, ProductsPage},
};

mod cart;
mod components;
mod nav;
mod pages;

/// Storefront configuration baked in at compile time.
fn storefront_config() -> StorefrontConfig {
    StorefrontConfig::new(
        option_env!("STOREFRONT_BACKEND_API").unwrap_or(DEFAULT_BACKEND_API),
        option_env!("STOREFRONT_CURRENCY").unwrap_or(DEFAULT_CURRENCY),
    )
}

/// Validate configuration and build the empty cart.
fn load_app(config: &StorefrontConfig) -> Result<Cart, String> {
    let currency = config
        .currency()
        .map_err(|error| format!("Invalid storefront currency: {error}"))?;

    CatalogClient::from_config(config)
        .map_err(|error| format!("Invalid storefront backend: {error}"))?;

    Ok(Cart::new(currency))
}

/// Transient message announced to the user, e.g. after a cart change.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Notice(pub RwSignal<Option<String>>);

impl Notice {
    pub(crate) fn show(self, message: impl Into<String>) {
        self.0.set(Some(message.into()));
    }
}

/// Main storefront app shell.
#[component]
fn App() -> impl IntoView {
    let config = storefront_config();

    match load_app(&config) {
        Ok(cart) => {
            let cart = RwSignal::new(cart);
            let page = RwSignal::new(Page::Home);
            let notice = Notice(RwSignal::new(None::<String>));

            provide_context(config);
            provide_context(cart);
            provide_context(page);
            provide_context(notice);

            view! {
                <div class="storefront">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || notice.0.get().unwrap_or_default()}
                    </p>
                    <SiteHeader />
                    <CartPanel />
                    <main class="page">
                        {move || match page.get() {
                            Page::Home => view! { <HomePage /> }.into_any(),
                            Page::Products => view! { <ProductsPage /> }.into_any(),
                            Page::Product(product) => {
                                view! { <ProductPage product=*product /> }.into_any()
                            }
                        }}
                    </main>
                </div>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="page">
                <h1>"Storefront"</h1>
                <div class="error-box">
                    <p>{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Storefront entry point
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
