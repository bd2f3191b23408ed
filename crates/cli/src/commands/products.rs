use std::{io, time::Instant};

use humanize_duration::{Truncate, prelude::DurationExt};
use rusty_money::iso::Currency;
use storefront::catalog::CatalogApi;
use tracing::info;

use crate::{errors::CliError, render::write_products};

pub(crate) async fn list<A: CatalogApi>(
    api: &A,
    currency: &'static Currency,
    out: impl io::Write,
) -> Result<(), CliError> {
    let start = Instant::now();
    let products = api.products().await?;

    info!(
        count = products.len(),
        elapsed = %start.elapsed().human(Truncate::Nano),
        "fetched products"
    );

    write_products(out, &products, currency)
}

/// Search the catalog. A blank query lists every product.
pub(crate) async fn search<A: CatalogApi>(
    api: &A,
    query: &str,
    currency: &'static Currency,
    out: impl io::Write,
) -> Result<(), CliError> {
    let query = query.trim();

    if query.is_empty() {
        return list(api, currency, out).await;
    }

    let start = Instant::now();
    let products = api.search(query).await?;

    info!(
        query,
        count = products.len(),
        elapsed = %start.elapsed().human(Truncate::Nano),
        "searched products"
    );

    write_products(out, &products, currency)
}
