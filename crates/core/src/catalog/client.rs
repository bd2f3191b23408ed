//! Storefront backend client.

use mockall::automock;
use reqwest::{Client, Url, header::CONTENT_TYPE};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    catalog::errors::{CatalogError, error_detail},
    config::StorefrontConfig,
    products::{Category, Product},
};

const CATEGORIES_PATH: &str = "/categories";
const PRODUCTS_PATH: &str = "/product";
const SEARCH_PATH: &str = "/product/search/";

/// Read-only access to the storefront catalog.
#[automock]
pub trait CatalogApi {
    /// Fetch every product category.
    async fn categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// Fetch the product list.
    async fn products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch products matching a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError>;
}

/// Envelope for product list responses.
#[derive(Debug, Deserialize)]
struct ProductPage {
    items: Vec<Product>,
}

/// HTTP client for the storefront backend.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: Client,
}

impl CatalogClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let base_url = base_url.trim().trim_end_matches('/');

        Url::parse(base_url).map_err(|error| CatalogError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: error.to_string(),
        })?;

        Ok(Self {
            base_url: base_url.to_string(),
            http: Client::new(),
        })
    }

    /// Create a client from storefront configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if the configured backend URL is invalid.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        Self::new(config.backend_api())
    }

    /// Backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a backend path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<(&str, &str)>,
    ) -> Result<T, CatalogError> {
        let url = self.endpoint(path);

        debug!(%url, ?query, "fetching from storefront backend");

        let mut request = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header("Access-Control-Allow-Credentials", "true");

        if let Some(pair) = query {
            request = request.query(&[pair]);
        }

        #[cfg(target_arch = "wasm32")]
        {
            request = request.fetch_credentials_include();
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = error_detail(&body);

            warn!(%url, %status, ?detail, "storefront backend request failed");

            return Err(CatalogError::Backend {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json().await?)
    }
}

impl CatalogApi for CatalogClient {
    async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.get_json(CATEGORIES_PATH, None).await
    }

    async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let page: ProductPage = self.get_json(PRODUCTS_PATH, None).await?;

        Ok(page.items)
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let page: ProductPage = self.get_json(SEARCH_PATH, Some(("q", query))).await?;

        Ok(page.items)
    }
}
