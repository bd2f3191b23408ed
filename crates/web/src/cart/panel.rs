use leptos::prelude::*;
use storefront::{cart::Cart, pricing::format_price};

use super::line::CartLineRow;

#[component]
fn CartSummary() -> impl IntoView {
    let cart = expect_context::<RwSignal<Cart>>();

    let total = move || {
        cart.with(|cart| {
            cart.total_price()
                .map_or_else(|_| "Unavailable".to_string(), |total| format_price(&total))
        })
    };

    view! {
        <dl class="cart-summary">
            <dt>"Items"</dt>
            <dd>{move || cart.with(Cart::total_quantity)}</dd>
            <dt class="cart-total-label">"Total"</dt>
            <dd class="cart-total">{total}</dd>
        </dl>
    }
}

/// Slide-out cart, shown while the cart is visible.
#[component]
pub(crate) fn CartPanel() -> impl IntoView {
    let cart = expect_context::<RwSignal<Cart>>();

    view! {
        <Show when=move || cart.with(Cart::is_visible)>
            <aside class="cart-panel" aria-label="Shopping cart">
                <div class="panel-header">
                    <h2 class="panel-title">"Cart"</h2>
                    <button
                        type="button"
                        class="icon-button icon-button-secondary"
                        aria-label="Close cart"
                        on:click=move |_| cart.update(Cart::hide_cart)
                    >
                        "×"
                    </button>
                </div>
                {move || {
                    cart.with(|cart| {
                        if cart.is_empty() {
                            view! { <p class="cart-empty">"Your cart is empty"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="cart-lines">
                                    {cart
                                        .lines()
                                        .iter()
                                        .map(|line| view! { <CartLineRow line=line.clone() /> })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any()
                        }
                    })
                }}
                <CartSummary />
            </aside>
        </Show>
    }
}
