use leptos::{ev::SubmitEvent, prelude::*};

/// Free-text search form with a clear button.
#[component]
pub(crate) fn SearchBar(on_search: Callback<String>, on_clear: Callback<()>) -> impl IntoView {
    let query = RwSignal::new(String::new());

    view! {
        <form
            class="search-bar"
            role="search"
            on:submit=move |event: SubmitEvent| {
                event.prevent_default();
                on_search.run(query.get_untracked());
            }
        >
            <input
                type="search"
                class="search-input"
                placeholder="Search products"
                aria-label="Search products"
                prop:value=move || query.get()
                on:input=move |event| query.set(event_target_value(&event))
            />
            <button type="submit" class="search-submit">
                "Search"
            </button>
            <button
                type="button"
                class="search-clear"
                on:click=move |_| {
                    query.set(String::new());
                    on_clear.run(());
                }
            >
                "Clear"
            </button>
        </form>
    }
}
