use leptos::{prelude::*, task};
use storefront::{
    catalog::{CatalogClient, HomeCatalog},
    config::StorefrontConfig,
};

use crate::components::ProductGrid;

/// Category strip plus product grid, fetched on mount.
#[component]
pub(crate) fn HomePage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let home = RwSignal::new(HomeCatalog::new());

    task::spawn_local(async move {
        let mut state = HomeCatalog::new();

        match CatalogClient::from_config(&config) {
            Ok(client) => state.load(&client).await,
            Err(error) => state.fail(&error),
        }

        home.set(state);
    });

    let products = Signal::derive(move || home.with(|home| home.products().clone()));

    view! {
        <section class="home-page">
            <h2 class="panel-title">"Categories"</h2>
            {move || {
                home.with(|home| match home.categories() {
                    None => view! { <p class="listing-status">"Loading"</p> }.into_any(),
                    Some(categories) => view! {
                        <ul class="category-strip">
                            {categories
                                .iter()
                                .map(|category| {
                                    view! { <li class="category-pill">{category.tag_name.clone()}</li> }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                })
            }}
            <h2 class="panel-title">"Products"</h2>
            <ProductGrid listing=products />
        </section>
    }
}
