//! Products
//!
//! Catalog types as served by the storefront backend.

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    discounts::{DiscountError, calculate_discount, percentage_from_points},
    pricing::{PricingError, money_from_decimal},
};

/// Name shown in place of the category list when it cannot be fetched.
pub const ERROR_CATEGORY_NAME: &str = "Error";

/// Backend product identifier. Numeric and string identifiers are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(id) => ProductId(id.to_string()),
            RawId::Text(id) => ProductId(id),
        })
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product slug; unique per product and used as the cart key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductSlug(pub String);

impl ProductSlug {
    /// Slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductSlug {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl fmt::Display for ProductSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product category (a backend tag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Tag name
    pub tag_name: String,
}

impl Category {
    /// Create a category from a tag name.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
        }
    }

    /// Placeholder category listed when the category fetch fails.
    pub fn error_placeholder() -> Self {
        Self::new(ERROR_CATEGORY_NAME)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCategory {
            Name(String),
            Tag { tag_name: String },
        }

        Ok(match RawCategory::deserialize(deserializer)? {
            RawCategory::Name(tag_name) | RawCategory::Tag { tag_name } => Category { tag_name },
        })
    }
}

/// Product image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Image location; may omit the scheme.
    pub url: String,
}

impl ProductImage {
    /// Image URL with an `https://` scheme added when none is present.
    pub fn normalized_url(&self) -> String {
        let url = self.url.trim();

        if url.starts_with("https://") || url.starts_with("http://") {
            url.to_string()
        } else {
            format!("https://{url}")
        }
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Optional long description
    #[serde(default)]
    pub description: Option<String>,

    /// Unit price before discount, in major units
    pub price: Decimal,

    /// Discount in percent points (0-100)
    #[serde(default)]
    pub discount_percentage: Decimal,

    /// Unique product slug
    pub slug: ProductSlug,

    /// Product categories
    #[serde(default)]
    pub tags: Vec<Category>,

    /// Product images, primary first
    #[serde(default)]
    pub image_url: Vec<ProductImage>,
}

impl Product {
    /// Whether a discount applies to this product.
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > Decimal::ZERO
    }

    /// The product discount as a fractional percentage.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::OutOfRange`] when the backend discount is outside 0-100.
    pub fn discount(&self) -> Result<Percentage, DiscountError> {
        percentage_from_points(self.discount_percentage)
    }

    /// Unit price before any discount.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the price is negative or does not fit in minor units.
    pub fn unit_price(
        &self,
        currency: &'static Currency,
    ) -> Result<Money<'static, Currency>, PricingError> {
        money_from_decimal(self.price, currency)
    }

    /// Unit price after the product discount.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductPriceError`] if the price cannot be converted or the discount is invalid.
    pub fn discounted_price(
        &self,
        currency: &'static Currency,
    ) -> Result<Money<'static, Currency>, ProductPriceError> {
        let unit_price = self.unit_price(currency)?;

        if !self.has_discount() {
            return Ok(unit_price);
        }

        Ok(calculate_discount(unit_price, &self.discount()?)?)
    }

    /// Primary image URL, normalized to include a scheme.
    pub fn primary_image(&self) -> Option<String> {
        self.image_url.first().map(ProductImage::normalized_url)
    }

    /// Category names joined for display.
    pub fn category_names(&self) -> String {
        self.tags
            .iter()
            .map(|tag| tag.tag_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Errors raised while pricing a product.
#[derive(Debug, thiserror::Error)]
pub enum ProductPriceError {
    /// Price conversion failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Discount could not be applied.
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "id": 7,
        "title": "Basmati Rice",
        "price": 12.5,
        "discount_percentage": 20,
        "slug": "basmati-rice",
        "tags": [{ "tag_name": "grocery" }, "rice"],
        "image_url": [{ "url": "cdn.example.com/rice.png" }]
    }"#;

    #[test]
    fn deserializes_backend_product() -> TestResult {
        let product: Product = serde_json::from_str(PRODUCT_JSON)?;

        assert_eq!(product.id, ProductId("7".to_string()));
        assert_eq!(product.title, "Basmati Rice");
        assert_eq!(product.price, Decimal::from_str("12.5")?);
        assert_eq!(product.discount_percentage, Decimal::from(20));
        assert_eq!(product.slug, ProductSlug::from("basmati-rice"));
        assert_eq!(
            product.tags,
            vec![Category::new("grocery"), Category::new("rice")]
        );
        assert_eq!(product.description, None);

        Ok(())
    }

    #[test]
    fn missing_optional_fields_use_defaults() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{ "id": "abc", "title": "Salt", "price": "1.20", "slug": "salt" }"#,
        )?;

        assert_eq!(product.id.to_string(), "abc");
        assert_eq!(product.discount_percentage, Decimal::ZERO);
        assert!(product.tags.is_empty());
        assert!(product.primary_image().is_none());
        assert!(!product.has_discount());

        Ok(())
    }

    #[test]
    fn discounted_price_applies_discount() -> TestResult {
        let product: Product = serde_json::from_str(PRODUCT_JSON)?;

        assert_eq!(product.unit_price(USD)?, Money::from_minor(1250, USD));
        assert_eq!(product.discounted_price(USD)?, Money::from_minor(1000, USD));

        Ok(())
    }

    #[test]
    fn discounted_price_without_discount_is_unit_price() -> TestResult {
        let mut product: Product = serde_json::from_str(PRODUCT_JSON)?;
        product.discount_percentage = Decimal::ZERO;

        assert_eq!(product.discounted_price(USD)?, Money::from_minor(1250, USD));

        Ok(())
    }

    #[test]
    fn discounted_price_rejects_invalid_discount() -> TestResult {
        let mut product: Product = serde_json::from_str(PRODUCT_JSON)?;
        product.discount_percentage = Decimal::from(150);

        assert!(matches!(
            product.discounted_price(USD),
            Err(ProductPriceError::Discount(DiscountError::OutOfRange(_)))
        ));

        Ok(())
    }

    #[test]
    fn primary_image_adds_missing_scheme() -> TestResult {
        let product: Product = serde_json::from_str(PRODUCT_JSON)?;

        assert_eq!(
            product.primary_image().as_deref(),
            Some("https://cdn.example.com/rice.png")
        );

        Ok(())
    }

    #[test]
    fn image_urls_with_scheme_are_kept() {
        let http = ProductImage {
            url: "http://example.com/a.png".to_string(),
        };
        let https = ProductImage {
            url: "https://example.com/b.png".to_string(),
        };

        assert_eq!(http.normalized_url(), "http://example.com/a.png");
        assert_eq!(https.normalized_url(), "https://example.com/b.png");
    }

    #[test]
    fn category_names_are_joined() -> TestResult {
        let product: Product = serde_json::from_str(PRODUCT_JSON)?;

        assert_eq!(product.category_names(), "grocery, rice");

        Ok(())
    }

    #[test]
    fn error_placeholder_category() {
        assert_eq!(Category::error_placeholder().tag_name, "Error");
    }
}
