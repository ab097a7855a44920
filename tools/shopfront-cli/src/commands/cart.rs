//! Cart commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use shopfront_commerce::cart::CheckoutSummary;
use shopfront_core::render::{render_cart_rows, render_cart_summary};
use shopfront_core::{coupon_notice, Storefront};

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::Output;

const LINE_WIDTHS: [usize; 5] = [4, 32, 10, 5, 12];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;

    match args.command.unwrap_or(CartCommand::List { html: false }) {
        CartCommand::List { html } => list(&storefront, html, ctx),
        CartCommand::Add { id, quantity } => {
            let spinner = ctx.output.spinner("Looking up product...");
            let cart = storefront.add_product_to_cart(id, quantity).await;
            spinner.finish_and_clear();
            let cart = cart?;
            ctx.output.success(&format!(
                "Added to cart ({} items in cart)",
                cart.item_count()
            ));
            Ok(())
        }
        CartCommand::Inc { line } => step(&storefront, line, 1, ctx),
        CartCommand::Dec { line } => step(&storefront, line, -1, ctx),
        CartCommand::Remove { line } => {
            let removed = storefront.remove_from_cart(line_index(line)?)?;
            ctx.output.success(&format!("Removed {}", removed.name));
            Ok(())
        }
        CartCommand::Clear { yes } => {
            if storefront.cart().is_empty() {
                ctx.output.info("Your cart is empty");
                return Ok(());
            }
            if !yes
                && !Confirm::new()
                    .with_prompt("Remove everything from the cart?")
                    .default(false)
                    .interact()?
            {
                ctx.output.info("Cancelled");
                return Ok(());
            }
            storefront.clear_cart()?;
            ctx.output.success("Cart cleared");
            Ok(())
        }
        CartCommand::Coupon { code } => {
            let saved = storefront.apply_coupon(&code)?;
            ctx.output.success(&coupon_notice(saved));
            print_summary(&ctx.output, &storefront.cart_summary());
            Ok(())
        }
    }
}

fn list(storefront: &Storefront, html: bool, ctx: &Context) -> Result<()> {
    let cart = storefront.cart();
    let summary = storefront.cart_summary();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.items(),
            "summary": summary,
        }));
        return Ok(());
    }
    if html {
        println!("{}", render_cart_rows(cart.items()));
        println!("{}", render_cart_summary(&summary));
        return Ok(());
    }

    ctx.output.header("Shopping Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }
    ctx.output
        .table_row(&["#", "Product", "Price", "Qty", "Total"], &LINE_WIDTHS);
    for (index, item) in cart.items().iter().enumerate() {
        ctx.output.table_row(
            &[
                &(index + 1).to_string(),
                &item.name,
                &item.price.display_short(),
                &item.quantity.to_string(),
                &item.line_total().display(),
            ],
            &LINE_WIDTHS,
        );
    }
    print_summary(&ctx.output, &summary);
    Ok(())
}

fn step(storefront: &Storefront, line: usize, delta: i64, ctx: &Context) -> Result<()> {
    let quantity = storefront.change_quantity(line_index(line)?, delta)?;
    ctx.output
        .success(&format!("Line {} now has {} unit(s)", line, quantity));
    Ok(())
}

pub(crate) fn print_summary(output: &Output, summary: &CheckoutSummary) {
    output.header("Order Summary");
    output.kv("Items", &summary.item_count.to_string());
    output.kv("Subtotal", &summary.subtotal.display());
    output.kv("Shipping", &summary.shipping_label());
    output.kv("Tax", &summary.tax.display());
    output.kv("Total", &summary.total.display());
}

/// Lines are numbered from 1 on screen.
fn line_index(line: usize) -> Result<usize> {
    match line.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Line numbers start at 1"),
    }
}
