use leptos::prelude::*;
use storefront::{
    cart::{Cart, CartError, CartLine},
    pricing::format_price,
};
use tracing::warn;

use crate::Notice;

use super::add_one_more;

fn report(notice: Notice, title: &str, result: Option<Result<(), CartError>>) {
    if let Some(Err(error)) = result {
        warn!(%error, "cart update failed");

        notice.show(format!("Could not update {title}: {error}"));
    }
}

#[component]
pub(super) fn CartLineRow(line: CartLine) -> impl IntoView {
    let cart = expect_context::<RwSignal<Cart>>();
    let notice = expect_context::<Notice>();

    let title = line.product().title.clone();
    let unit_price = format_price(&line.final_price());
    let line_total = line
        .total()
        .map_or_else(|_| "Unavailable".to_string(), |total| format_price(&total));

    let remove_label = format!("Remove one {title} from cart");
    let add_label = format!("Add another {title} ({unit_price}) to cart");

    let remove_product = line.product().clone();
    let remove_title = title.clone();
    let add_slug = line.slug().clone();
    let add_title = title.clone();

    view! {
        <li class="cart-line">
            <div>
                <p class="cart-line-title">{title}</p>
                <p class="cart-line-price">{format!("{} × {unit_price}", line.quantity())}</p>
            </div>
            <div class="cart-line-actions">
                <button
                    type="button"
                    aria-label=remove_label
                    class="icon-button icon-button-secondary icon-button-compact"
                    on:click=move |_| {
                        let result = cart.try_update(|cart| cart.remove_from_cart(&remove_product));

                        report(notice, &remove_title, result);
                    }
                >
                    "−"
                </button>
                <span class="cart-line-total">{line_total}</span>
                <button
                    type="button"
                    aria-label=add_label
                    class="icon-button icon-button-primary icon-button-compact"
                    on:click=move |_| {
                        let result = cart.try_update(|cart| add_one_more(cart, &add_slug));

                        report(notice, &add_title, result);
                    }
                >
                    "+"
                </button>
            </div>
        </li>
    }
}
