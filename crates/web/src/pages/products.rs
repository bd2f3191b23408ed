use leptos::{prelude::*, task};
use storefront::{
    catalog::{CatalogApi, CatalogClient, ProductListing},
    config::StorefrontConfig,
};

use crate::components::{ProductGrid, SearchBar};

/// Product grid with free-text search, fetched on mount.
#[component]
pub(crate) fn ProductsPage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let listing = RwSignal::new(ProductListing::new());

    let load_config = config.clone();

    task::spawn_local(async move {
        let result = match CatalogClient::from_config(&load_config) {
            Ok(client) => client.products().await,
            Err(error) => Err(error),
        };

        listing.update(|listing| listing.apply_products(result));
    });

    let on_search = Callback::new(move |query: String| {
        let Some(pending) = listing
            .try_update(|listing| listing.begin_search(&query))
            .flatten()
        else {
            return;
        };

        let config = config.clone();

        task::spawn_local(async move {
            let result = match CatalogClient::from_config(&config) {
                Ok(client) => client.search(pending.query()).await,
                Err(error) => Err(error),
            };

            listing.update(|listing| {
                listing.finish_search(&pending, result);
            });
        });
    });

    let on_clear = Callback::new(move |()| listing.update(ProductListing::clear_search));

    view! {
        <section class="products-page">
            <h2 class="panel-title">"Products"</h2>
            <SearchBar on_search=on_search on_clear=on_clear />
            <ProductGrid listing=listing />
        </section>
    }
}
