//! Catalog client tests against a local HTTP backend

use std::time::{Duration, Instant};

use serde_json::json;
use storefront::{
    catalog::{CatalogApi, CatalogClient, CatalogError, HomeCatalog, ListingView},
    products::Category,
};
use testresult::TestResult;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

const PRODUCTS_JSON: &str = include_str!("fixtures/products.json");

fn items() -> TestResult<serde_json::Value> {
    Ok(json!({ "items": serde_json::from_str::<serde_json::Value>(PRODUCTS_JSON)? }))
}

#[tokio::test]
async fn categories_are_fetched_with_json_headers() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(header("Content-Type", "application/json"))
        .and(header("Access-Control-Allow-Credentials", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "tag_name": "grocery" }, { "tag_name": "tea" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri())?;
    let categories = client.categories().await?;

    assert_eq!(categories, vec![Category::new("grocery"), Category::new("tea")]);

    Ok(())
}

#[tokio::test]
async fn products_are_unwrapped_from_items_envelope() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/product"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items()?))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&format!("{}/api/", server.uri()))?;
    let products = client.products().await?;

    let slugs: Vec<&str> = products.iter().map(|product| product.slug.as_str()).collect();

    assert_eq!(slugs, ["basmati-rice", "green-tea", "oolong"]);

    Ok(())
}

#[tokio::test]
async fn search_sends_encoded_query() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product/search/"))
        .and(query_param("q", "green tea & honey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": 2, "title": "Green Tea", "price": 4, "slug": "green-tea" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri())?;
    let products = client.search("green tea & honey").await?;

    assert_eq!(products.len(), 1);

    Ok(())
}

#[tokio::test]
async fn error_detail_is_read_from_response_body() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Nope" })))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri())?;
    let error = client.products().await.err().ok_or("request succeeded")?;

    assert!(matches!(
        &error,
        CatalogError::Backend { status: 404, detail: Some(detail) } if detail == "Nope"
    ));
    assert_eq!(error.user_message(), "Nope");

    Ok(())
}

#[tokio::test]
async fn non_json_error_falls_back_to_generic_message() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri())?;
    let error = client.categories().await.err().ok_or("request succeeded")?;

    assert!(matches!(
        error,
        CatalogError::Backend {
            status: 502,
            detail: None
        }
    ));
    assert_eq!(error.user_message(), "Something went wrong");

    Ok(())
}

#[tokio::test]
async fn home_page_fetches_run_concurrently() -> TestResult {
    let server = MockServer::start().await;
    let delay = Duration::from_millis(400);

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(delay)
                .set_body_json(json!([{ "tag_name": "tea" }])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(200).set_delay(delay).set_body_json(items()?))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri())?;
    let mut home = HomeCatalog::new();

    let started = Instant::now();
    home.load(&client).await;
    let elapsed = started.elapsed();

    assert!(elapsed < delay * 2, "home page load took {elapsed:?}");
    assert_eq!(home.categories(), Some([Category::new("tea")].as_slice()));
    assert!(matches!(home.products().view(), ListingView::Products(products) if products.len() == 3));

    Ok(())
}
