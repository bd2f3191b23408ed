//! Storefront CLI
//!
//! Browse the storefront catalog and price a cart from the terminal.

use std::{io, process};

use storefront::catalog::CatalogClient;
use tracing::error;

use crate::{config::CliConfig, errors::CliError};

mod commands;
mod config;
mod errors;
mod logging;
mod render;

/// Storefront CLI entry point
#[tokio::main]
pub async fn main() {
    let config = CliConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(init_error) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    if let Err(run_error) = run(config).await {
        error!(error = ?run_error, "command failed");

        #[expect(
            clippy::print_stderr,
            reason = "command errors are reported to the user on stderr"
        )]
        {
            eprintln!("{run_error}");
        }

        process::exit(1);
    }
}

async fn run(config: CliConfig) -> Result<(), CliError> {
    let storefront = config.backend.storefront_config();
    let currency = storefront.currency().map_err(CliError::Currency)?;
    let client = CatalogClient::from_config(&storefront).map_err(CliError::Client)?;

    config
        .command
        .run(&client, currency, io::stdout().lock())
        .await
}
