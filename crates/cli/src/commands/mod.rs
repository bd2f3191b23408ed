//! CLI commands

use std::io;

use clap::Subcommand;
use rusty_money::iso::Currency;
use storefront::catalog::CatalogApi;

use crate::errors::CliError;

mod cart;
mod categories;
mod products;

pub(crate) use cart::CartArgs;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List product categories
    Categories,

    /// List products
    Products,

    /// Search products by free text
    Search {
        /// Search text
        query: String,
    },

    /// Price a cart built from add/remove operations
    Cart(CartArgs),
}

impl Command {
    pub(crate) async fn run<A: CatalogApi>(
        self,
        api: &A,
        currency: &'static Currency,
        out: impl io::Write,
    ) -> Result<(), CliError> {
        match self {
            Command::Categories => categories::run(api, out).await,
            Command::Products => products::list(api, currency, out).await,
            Command::Search { query } => products::search(api, &query, currency, out).await,
            Command::Cart(args) => cart::run(args, api, currency, out).await,
        }
    }
}
