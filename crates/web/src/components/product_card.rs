use leptos::prelude::*;
use rusty_money::iso::Currency;
use storefront::{cart::Cart, pricing::format_price, products::Product};

use crate::nav::Page;

/// Prices shown for a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PriceLabels {
    /// Price the customer pays.
    pub final_price: String,

    /// Undiscounted price, shown struck through when a discount applies.
    pub shelf_price: Option<String>,
}

/// Price labels for `product`, or `None` when it cannot be priced.
pub(crate) fn price_labels(product: &Product, currency: &'static Currency) -> Option<PriceLabels> {
    let shelf_price = product.unit_price(currency).ok()?;
    let final_price = product.discounted_price(currency).ok()?;

    Some(PriceLabels {
        final_price: format_price(&final_price),
        shelf_price: (final_price != shelf_price).then(|| format_price(&shelf_price)),
    })
}

/// Final price with the struck-through shelf price when discounted.
#[component]
pub(crate) fn PriceSummary(labels: Option<PriceLabels>) -> impl IntoView {
    let Some(labels) = labels else {
        return view! { <span class="product-price-unavailable">"Price unavailable"</span> }
            .into_any();
    };

    view! {
        <div class="product-price-summary">
            {labels.shelf_price.map_or_else(
                || ().into_any(),
                |value| {
                    view! {
                        <span class="product-shelf-price">
                            <span class="sr-only">"Was "</span>
                            <del>{value}</del>
                        </span>
                    }
                    .into_any()
                },
            )}
            <span class="product-final-price">{labels.final_price}</span>
        </div>
    }
    .into_any()
}

/// Grid card linking to the product detail view.
#[component]
pub(crate) fn ProductCard(product: Product) -> impl IntoView {
    let page = expect_context::<RwSignal<Page>>();
    let currency = expect_context::<RwSignal<Cart>>().with_untracked(Cart::currency);

    let labels = price_labels(&product, currency);
    let image = product.primary_image();
    let title = product.title.clone();
    let categories = product.category_names();
    let open_label = format!("View {title}");

    view! {
        <li class="product-card">
            {image.map(|url| view! { <img class="product-image" src=url alt=title.clone() /> })}
            <p class="product-title">{title.clone()}</p>
            <p class="product-categories">{categories}</p>
            <PriceSummary labels=labels />
            <button
                type="button"
                class="product-open"
                aria-label=open_label
                on:click=move |_| page.set(Page::Product(Box::new(product.clone())))
            >
                "View"
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use super::*;

    fn product(price: &str, discount: u32) -> TestResult<Product> {
        Ok(serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Earl Grey",
            "price": price,
            "discount_percentage": discount,
            "slug": "earl-grey"
        }))?)
    }

    #[test]
    fn discounted_product_shows_shelf_price() -> TestResult {
        let labels = price_labels(&product("8.00", 25)?, GBP);

        assert_eq!(
            labels,
            Some(PriceLabels {
                final_price: "£6.00".to_string(),
                shelf_price: Some("£8.00".to_string()),
            })
        );

        Ok(())
    }

    #[test]
    fn full_price_product_has_no_shelf_price() -> TestResult {
        let labels = price_labels(&product("8.00", 0)?, GBP);

        assert_eq!(
            labels,
            Some(PriceLabels {
                final_price: "£8.00".to_string(),
                shelf_price: None,
            })
        );

        Ok(())
    }

    #[test]
    fn invalid_discount_cannot_be_priced() -> TestResult {
        assert_eq!(price_labels(&product("8.00", 150)?, GBP), None);

        Ok(())
    }
}
