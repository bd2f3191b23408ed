use std::{io, time::Instant};

use humanize_duration::{Truncate, prelude::DurationExt};
use storefront::catalog::CatalogApi;
use tracing::info;

use crate::{errors::CliError, render::write_categories};

pub(crate) async fn run<A: CatalogApi>(api: &A, out: impl io::Write) -> Result<(), CliError> {
    let start = Instant::now();
    let categories = api.categories().await?;

    info!(
        count = categories.len(),
        elapsed = %start.elapsed().human(Truncate::Nano),
        "fetched categories"
    );

    write_categories(out, &categories)
}
