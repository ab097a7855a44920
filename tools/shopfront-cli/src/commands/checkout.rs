//! Checkout command.

use anyhow::Result;
use dialoguer::{Confirm, Input};
use shopfront_commerce::checkout::{CheckoutForm, ShippingAddress};
use shopfront_core::{coupon_notice, StorefrontError, ORDER_PLACED};

use super::CheckoutArgs;
use crate::commands::cart::print_summary;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;

    if storefront.cart().is_empty() {
        return Err(StorefrontError::EmptyCart.into());
    }
    if let Some(code) = &args.coupon {
        let saved = storefront.apply_coupon(code)?;
        ctx.output.success(&coupon_notice(saved));
    }

    let profile = storefront.profile().unwrap_or_default();
    let (first, last) = profile
        .name
        .split_once(' ')
        .map(|(f, l)| (f.to_string(), l.to_string()))
        .unwrap_or_else(|| (profile.name.clone(), String::new()));

    let shipping = ShippingAddress {
        first_name: field(args.first_name, "First name", &first)?,
        last_name: field(args.last_name, "Last name", &last)?,
        email: field(args.email, "Email", &profile.email)?,
        phone: field(args.phone, "Phone", profile.phone.as_deref().unwrap_or(""))?,
        address: field(args.address, "Street address", "")?,
        address2: String::new(),
        city: field(args.city, "City", "")?,
        division: field(args.division, "Division", "Dhaka")?,
        postal_code: args.postal_code,
    };
    let form = CheckoutForm {
        shipping,
        payment_method: args.payment,
        order_notes: args.notes,
    };

    if !ctx.output.is_json() {
        print_summary(&ctx.output, &storefront.cart_summary());
        ctx.output.kv("Payment", form.payment_method.display_name());
        ctx.output.kv("Ship to", &form.shipping.one_line());
    }
    if !args.yes
        && !ctx.output.is_json()
        && !Confirm::new()
            .with_prompt("Place this order?")
            .default(true)
            .interact()?
    {
        ctx.output.info("Cancelled");
        return Ok(());
    }

    let spinner = ctx.output.spinner("Placing order...");
    let placed = storefront.checkout(form).await;
    spinner.finish_and_clear();
    let placed = placed?;

    if ctx.output.is_json() {
        ctx.output.json(&placed);
        return Ok(());
    }
    ctx.output.success(&placed.notice(ORDER_PLACED));
    ctx.output.kv("Order", placed.value.id.as_str());
    ctx.output.kv("Total", &placed.value.total.display());

    Ok(())
}

/// A flag value, or an answer typed at the prompt.
fn field(value: Option<String>, prompt: &str, default: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    let mut input = Input::<String>::new().with_prompt(prompt);
    if !default.is_empty() {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}
