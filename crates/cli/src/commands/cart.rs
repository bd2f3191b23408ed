use std::{io, str::FromStr};

use clap::Args;
use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use storefront::{
    cart::Cart,
    catalog::CatalogApi,
    products::{Product, ProductSlug},
};
use thiserror::Error;
use tracing::debug;

use crate::{errors::CliError, render::write_cart};

#[derive(Debug, Args)]
pub(crate) struct CartArgs {
    /// Operations applied in order: `add:SLUG[:QTY]` or `remove:SLUG`
    #[arg(required = true, value_name = "OP")]
    ops: Vec<CartOp>,
}

/// A single cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CartOp {
    /// Add `quantity` units through the quantity selector.
    Add { slug: ProductSlug, quantity: u32 },

    /// Remove one unit.
    Remove { slug: ProductSlug },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CartOpError {
    #[error("expected add:SLUG[:QTY] or remove:SLUG, got {0:?}")]
    Malformed(String),

    #[error("quantity must be a whole number of at least 1, got {0:?}")]
    Quantity(String),
}

impl FromStr for CartOp {
    type Err = CartOpError;

    fn from_str(op: &str) -> Result<Self, Self::Err> {
        let malformed = || CartOpError::Malformed(op.to_string());

        let (kind, rest) = op.split_once(':').ok_or_else(malformed)?;

        match kind {
            "add" => {
                let (slug, quantity) = match rest.split_once(':') {
                    Some((slug, quantity)) => {
                        let quantity = quantity
                            .parse::<u32>()
                            .ok()
                            .filter(|quantity| *quantity > 0)
                            .ok_or_else(|| CartOpError::Quantity(quantity.to_string()))?;

                        (slug, quantity)
                    }
                    None => (rest, 1),
                };

                if slug.is_empty() {
                    return Err(malformed());
                }

                Ok(CartOp::Add {
                    slug: ProductSlug::from(slug),
                    quantity,
                })
            }
            "remove" if !rest.is_empty() && !rest.contains(':') => Ok(CartOp::Remove {
                slug: ProductSlug::from(rest),
            }),
            _ => Err(malformed()),
        }
    }
}

pub(crate) async fn run<A: CatalogApi>(
    args: CartArgs,
    api: &A,
    currency: &'static Currency,
    out: impl io::Write,
) -> Result<(), CliError> {
    let products = api.products().await?;
    let mut cart = Cart::new(currency);

    apply_ops(&mut cart, &products, &args.ops)?;

    write_cart(out, &cart)
}

/// Apply operations in order, stopping at the first failure.
fn apply_ops(cart: &mut Cart, products: &[Product], ops: &[CartOp]) -> Result<(), CliError> {
    let by_slug: FxHashMap<&ProductSlug, &Product> = products
        .iter()
        .map(|product| (&product.slug, product))
        .collect();

    for op in ops {
        debug!(?op, "applying cart operation");

        match op {
            CartOp::Add { slug, quantity } => {
                let product = by_slug
                    .get(slug)
                    .ok_or_else(|| CliError::UnknownProduct(slug.clone()))?;

                cart.set_quantity_selector(*quantity);
                cart.add_selected(product)?;
            }
            CartOp::Remove { slug } => cart.remove_one(slug)?,
        }
    }

    Ok(())
}
