//! Storefront configuration

use rusty_money::iso::Currency;

use crate::pricing::{PricingError, currency};

/// Backend used when none is configured.
pub const DEFAULT_BACKEND_API: &str = "http://localhost:8000";

/// Currency used when none is configured.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Settings shared by every storefront front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL of the storefront backend API, e.g. `https://api.example.com/v1`.
    pub backend_api: String,

    /// ISO 4217 code of the currency prices are quoted in.
    pub currency: String,
}

impl StorefrontConfig {
    /// Create a configuration from a backend URL and currency code.
    pub fn new(backend_api: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            backend_api: backend_api.into(),
            currency: currency.into(),
        }
    }

    /// Backend base URL without a trailing slash.
    pub fn backend_api(&self) -> &str {
        self.backend_api.trim().trim_end_matches('/')
    }

    /// Resolve the configured currency.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnknownCurrency`] if the code is not an ISO 4217 currency.
    pub fn currency(&self) -> Result<&'static Currency, PricingError> {
        currency(&self.currency)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_API, DEFAULT_CURRENCY)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::EUR;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn backend_api_trims_trailing_slashes() {
        let config = StorefrontConfig::new("https://api.example.com/v1// ", "USD");

        assert_eq!(config.backend_api(), "https://api.example.com/v1");
    }

    #[test]
    fn currency_resolves_iso_code() -> TestResult {
        let config = StorefrontConfig::new(DEFAULT_BACKEND_API, "eur");

        assert_eq!(config.currency()?, EUR);

        Ok(())
    }

    #[test]
    fn default_uses_local_backend_and_usd() {
        let config = StorefrontConfig::default();

        assert_eq!(config.backend_api(), "http://localhost:8000");
        assert_eq!(config.currency, "USD");
    }
}
