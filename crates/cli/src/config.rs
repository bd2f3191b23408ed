//! CLI configuration

use clap::{Args, Parser};
use storefront::config::{DEFAULT_BACKEND_API, DEFAULT_CURRENCY, StorefrontConfig};

use crate::commands::Command;

/// Storefront CLI configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront catalog and cart CLI", long_about = None)]
pub(crate) struct CliConfig {
    /// Backend settings.
    #[command(flatten)]
    pub backend: BackendConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from `.env`, the environment and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Storefront backend settings.
#[derive(Debug, Args)]
pub(crate) struct BackendConfig {
    /// Base URL of the storefront backend API
    #[arg(long, global = true, env = "STOREFRONT_BACKEND_API", default_value = DEFAULT_BACKEND_API)]
    pub backend_api: String,

    /// ISO 4217 currency code prices are quoted in
    #[arg(long, global = true, env = "STOREFRONT_CURRENCY", default_value = DEFAULT_CURRENCY)]
    pub currency: String,
}

impl BackendConfig {
    /// Library configuration for these settings.
    pub(crate) fn storefront_config(&self) -> StorefrontConfig {
        StorefrontConfig::new(self.backend_api.as_str(), self.currency.as_str())
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, global = true, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
