use leptos::prelude::*;
use storefront::cart::Cart;

/// Plus/minus control bound to the cart's quantity selector.
#[component]
pub(crate) fn QuantitySelector() -> impl IntoView {
    let cart = expect_context::<RwSignal<Cart>>();

    view! {
        <div class="quantity-selector">
            <button
                type="button"
                class="icon-button icon-button-secondary"
                aria-label="Decrease quantity"
                disabled=move || cart.with(Cart::quantity_selector) <= 1
                on:click=move |_| cart.update(Cart::decrease_quantity_selector)
            >
                "−"
            </button>
            <span class="quantity-value" aria-live="polite">
                {move || cart.with(Cart::quantity_selector)}
            </span>
            <button
                type="button"
                class="icon-button icon-button-primary"
                aria-label="Increase quantity"
                on:click=move |_| cart.update(Cart::increase_quantity_selector)
            >
                "+"
            </button>
        </div>
    }
}
