//! Table output

use std::{io, ops::Range};

use rusty_money::iso::Currency;
use storefront::{
    cart::Cart,
    catalog::NO_PRODUCTS_MESSAGE,
    pricing::format_price,
    products::{Category, Product},
};
use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

use crate::errors::CliError;

/// Write one category name per line.
pub(crate) fn write_categories(
    mut out: impl io::Write,
    categories: &[Category],
) -> Result<(), CliError> {
    for category in categories {
        writeln!(out, "{}", category.tag_name)?;
    }

    Ok(())
}

/// Write a product table.
pub(crate) fn write_products(
    mut out: impl io::Write,
    products: &[Product],
    currency: &'static Currency,
) -> Result<(), CliError> {
    if products.is_empty() {
        writeln!(out, "{NO_PRODUCTS_MESSAGE}")?;
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Slug", "Title", "Price", "Discount", "Final Price"]);

    for product in products {
        let discount = if product.has_discount() {
            format!("{}%", product.discount_percentage.normalize())
        } else {
            String::new()
        };

        builder.push_record([
            product.slug.to_string(),
            product.title.clone(),
            format_price(&product.unit_price(currency)?),
            discount,
            format_price(&product.discounted_price(currency)?),
        ]);
    }

    let mut table = builder.build();

    style_table(&mut table, Columns::new(2..5));

    writeln!(out, "{table}")?;

    Ok(())
}

/// Write the cart lines followed by its totals.
pub(crate) fn write_cart(mut out: impl io::Write, cart: &Cart) -> Result<(), CliError> {
    if cart.is_empty() {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Qty", "Unit Price", "Line Total"]);

    for (idx, line) in cart.lines().iter().enumerate() {
        builder.push_record([
            format!("#{:<3}", idx + 1),
            line.product().title.clone(),
            line.quantity().to_string(),
            format_price(&line.final_price()),
            format_price(&line.total()?),
        ]);
    }

    let mut table = builder.build();

    style_table(&mut table, Columns::new(2..5));

    writeln!(out, "{table}")?;
    writeln!(out, " Items: {}", cart.total_quantity())?;
    writeln!(out, " Total: {}", format_price(&cart.total_price()?))?;

    Ok(())
}

fn style_table(table: &mut Table, numeric: Columns<Range<usize>>) {
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Alignment::center());
    table.modify(numeric, Alignment::right());
}
