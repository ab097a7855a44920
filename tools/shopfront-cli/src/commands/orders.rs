//! Order history commands.

use anyhow::{anyhow, bail, Result};
use dialoguer::Confirm;
use shopfront_commerce::checkout::{OrderFilter, OrderStatus};
use shopfront_commerce::ids::OrderId;

use super::{OrdersArgs, OrdersCommand};
use crate::context::Context;
use crate::output::status_badge;

const ORDER_WIDTHS: [usize; 5] = [16, 12, 6, 12, 10];

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    match args.command.unwrap_or(OrdersCommand::List) {
        OrdersCommand::List => {
            let filter = OrderFilter {
                status: args.status.as_deref().map(parse_status).transpose()?,
                within_days: args.days,
            };
            let orders = storefront.filter_orders(&filter);

            if ctx.output.is_json() {
                ctx.output.json(&orders);
                return Ok(());
            }
            ctx.output.header("My Orders");
            if orders.is_empty() {
                ctx.output.info("No orders yet");
                return Ok(());
            }
            ctx.output.table_row(
                &["Order", "Date", "Items", "Total", "Status"],
                &ORDER_WIDTHS,
            );
            for order in &orders {
                ctx.output.table_row(
                    &[
                        order.id.as_str(),
                        &order.date.format("%Y-%m-%d").to_string(),
                        &order.item_count().to_string(),
                        &order.total.display(),
                        &status_badge(order.status),
                    ],
                    &ORDER_WIDTHS,
                );
            }
            Ok(())
        }
        OrdersCommand::Show { id } => {
            let order = storefront
                .order(&OrderId::new(id.trim()))
                .ok_or_else(|| anyhow!("Order not found: {}", id))?;

            if ctx.output.is_json() {
                ctx.output.json(&order);
                return Ok(());
            }
            ctx.output.header(&format!("Order {}", order.id));
            ctx.output.kv("Placed", &order.date.format("%b %-d, %Y %H:%M").to_string());
            ctx.output.kv("Status", &status_badge(order.status));
            ctx.output.kv("Ship to", &order.form.shipping.one_line());
            ctx.output.kv("Payment", order.form.payment_method.display_name());
            for item in &order.items {
                ctx.output.list_item(&format!(
                    "{} x{} - {}",
                    item.name,
                    item.quantity,
                    item.line_total().display()
                ));
            }
            ctx.output.kv("Total", &order.total.display());
            Ok(())
        }
        OrdersCommand::Cancel { id, yes } => {
            let id = OrderId::new(id.trim());
            if !yes
                && !Confirm::new()
                    .with_prompt(format!("Cancel order {}?", id))
                    .default(false)
                    .interact()?
            {
                ctx.output.info("Cancelled");
                return Ok(());
            }
            let order = storefront.cancel_order(&id)?;
            ctx.output
                .success(&format!("Order {} is now {}", order.id, order.status));
            Ok(())
        }
    }
}

fn parse_status(value: &str) -> Result<OrderStatus> {
    match OrderStatus::parse(value) {
        Some(status) => Ok(status),
        None => bail!("Unknown order status: {}", value),
    }
}
