//! Catalog to cart flow tests

use rusty_money::{Money, iso::USD};
use storefront::{
    cart::{Cart, CartLine},
    catalog::{CatalogError, HomeCatalog, ListingView, MockCatalogApi, ProductListing},
    products::{Category, Product, ProductSlug},
};
use testresult::TestResult;

const PRODUCTS_JSON: &str = include_str!("fixtures/products.json");

fn products() -> TestResult<Vec<Product>> {
    Ok(serde_json::from_str(PRODUCTS_JSON)?)
}

fn find<'a>(products: &'a [Product], slug: &str) -> TestResult<&'a Product> {
    Ok(products
        .iter()
        .find(|product| product.slug.as_str() == slug)
        .ok_or("missing product")?)
}

#[tokio::test]
async fn browse_search_and_fill_cart() -> TestResult {
    let catalog = products()?;
    let matches: Vec<Product> = catalog
        .iter()
        .filter(|product| product.category_names().contains("tea"))
        .cloned()
        .collect();

    let mut api = MockCatalogApi::new();
    let all = catalog.clone();

    api.expect_products().once().return_once(move || Ok(all));
    api.expect_search()
        .once()
        .withf(|query| query == "tea")
        .return_once(move |_| Ok(matches));

    let mut listing = ProductListing::new();
    listing.load(&api).await;
    listing.search(&api, "tea").await;

    assert_eq!(listing.products().len(), 2);

    let mut cart = Cart::new(USD);

    let rice = find(&catalog, "basmati-rice")?;
    let oolong = find(listing.products(), "oolong")?;

    cart.set_quantity_selector(2);
    cart.add_selected(rice)?;
    cart.set_quantity_selector(1);
    cart.add_selected(oolong)?;
    cart.add_selected(rice)?;

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total_quantity(), 4);
    assert_eq!(
        cart.line(&ProductSlug::from("basmati-rice"))
            .map(CartLine::quantity),
        Some(3)
    );

    // 3 x $10.00 + $6.99
    assert_eq!(cart.total_price()?, Money::from_minor(36_99, USD));

    cart.remove_from_cart(rice)?;
    cart.remove_from_cart(oolong)?;

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_price()?, Money::from_minor(20_00, USD));

    listing.clear_search();

    assert_eq!(listing.products(), catalog.as_slice());

    Ok(())
}

#[tokio::test]
async fn home_page_survives_backend_failures() -> TestResult {
    let mut api = MockCatalogApi::new();

    api.expect_categories().once().return_once(|| {
        Err(CatalogError::Backend {
            status: 502,
            detail: None,
        })
    });
    api.expect_products().once().return_once(|| {
        Err(CatalogError::Backend {
            status: 500,
            detail: Some("Catalog is being rebuilt".to_string()),
        })
    });

    let mut home = HomeCatalog::new();
    home.load(&api).await;

    assert_eq!(
        home.categories(),
        Some([Category::error_placeholder()].as_slice())
    );
    assert_eq!(
        home.products().view(),
        ListingView::Message("Catalog is being rebuilt")
    );

    Ok(())
}

#[test]
fn fixture_products_normalize_images() -> TestResult {
    let catalog = products()?;

    assert_eq!(
        find(&catalog, "basmati-rice")?.primary_image().as_deref(),
        Some("https://cdn.example.com/rice.png")
    );
    assert_eq!(
        find(&catalog, "green-tea")?.primary_image().as_deref(),
        Some("https://cdn.example.com/tea.png")
    );
    assert_eq!(find(&catalog, "oolong")?.primary_image(), None);

    Ok(())
}
