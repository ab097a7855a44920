//! Store figures for the back office.

use std::fs;

use anyhow::{bail, Context as _, Result};
use shopfront_core::admin::{
    orders_csv, revenue_chart, sales_chart, DashboardStats, REVENUE_BREAKDOWN,
};
use shopfront_core::render::render_admin_orders_table;

use super::{DashboardArgs, DashboardCommand};
use crate::context::Context;
use crate::output::status_badge;

const DASHBOARD_PAGE: &str = "/admin/dashboard.html";

const ORDER_WIDTHS: [usize; 6] = [14, 18, 12, 10, 12, 10];

/// Run the dashboard command.
pub async fn run(args: DashboardArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    let decision = storefront.guard(DASHBOARD_PAGE);
    if !decision.is_allowed() {
        bail!(
            "{}",
            decision.message().unwrap_or("Access denied")
        );
    }

    let stats = DashboardStats::from_orders(&storefront.orders());

    match args.command.unwrap_or(DashboardCommand::Stats) {
        DashboardCommand::Stats => {
            if ctx.output.is_json() {
                ctx.output.json(&stats);
                return Ok(());
            }
            ctx.output.header("Dashboard");
            for (label, value, change) in stats.cards() {
                ctx.output.kv(label, &format!("{}  ({})", value, change));
            }
        }
        DashboardCommand::Sales { period } => {
            let chart = sales_chart(period);
            if ctx.output.is_json() {
                ctx.output.json(&chart);
                return Ok(());
            }
            ctx.output.header(&format!("Sales ({:?})", period));
            for (label, value) in period.labels().iter().zip(period.data()) {
                ctx.output.kv(label, &format!("\u{09f3}{}", value));
            }
        }
        DashboardCommand::Revenue => {
            if ctx.output.is_json() {
                ctx.output.json(&revenue_chart());
                return Ok(());
            }
            ctx.output.header("Revenue by Category");
            for (category, amount) in REVENUE_BREAKDOWN {
                ctx.output.kv(category, &format!("\u{09f3}{}", amount));
            }
        }
        DashboardCommand::Orders { html } => {
            let fetched = storefront.recent_admin_orders().await?;
            ctx.output.fallback_notice(fetched.is_fallback(), "orders");
            let orders = fetched.into_inner();
            if ctx.output.is_json() {
                ctx.output.json(&orders);
                return Ok(());
            }
            if html {
                println!("{}", render_admin_orders_table(&orders));
                return Ok(());
            }
            ctx.output.header("Recent Orders");
            ctx.output.table_row(
                &["Order", "Customer", "Date", "Total", "Status", "Payment"],
                &ORDER_WIDTHS,
            );
            for order in &orders {
                ctx.output.table_row(
                    &[
                        &order.id,
                        &order.customer,
                        &order.date_label(),
                        &order.total_label(),
                        &status_badge(order.status),
                        order.payment.as_str(),
                    ],
                    &ORDER_WIDTHS,
                );
            }
        }
        DashboardCommand::OrderStats => {
            let counts = storefront.order_stats().await?;
            ctx.output.fallback_notice(counts.is_fallback(), "order counts");
            if ctx.output.is_json() {
                ctx.output.json(&counts);
                return Ok(());
            }
            let counts = counts.get();
            ctx.output.header("Orders");
            ctx.output.kv("Total", &counts.total.to_string());
            ctx.output.kv("Pending", &counts.pending.to_string());
            ctx.output.kv("Processing", &counts.processing.to_string());
            ctx.output.kv("Shipped", &counts.shipped.to_string());
            ctx.output.kv("Delivered", &counts.delivered.to_string());
            ctx.output.kv("Today", &counts.today.to_string());
        }
        DashboardCommand::Customers { search } => {
            let customers = match search.as_deref() {
                Some(query) => storefront.search_customers(query).await?,
                None => storefront.customers().await?,
            };
            ctx.output.fallback_notice(customers.is_fallback(), "customers");
            if ctx.output.is_json() {
                ctx.output.json(&customers);
                return Ok(());
            }
            ctx.output.header("Customers");
            if customers.get().is_empty() {
                ctx.output.info("No customers found");
            }
            for customer in customers.get() {
                let phone = customer.phone.as_deref().unwrap_or("-");
                ctx.output
                    .list_item(&format!("{} <{}>  {}", customer.name, customer.email, phone));
            }
        }
        DashboardCommand::Coupons => {
            let coupons = storefront.active_coupons().await?;
            ctx.output.fallback_notice(coupons.is_fallback(), "coupons");
            if ctx.output.is_json() {
                ctx.output.json(&coupons);
                return Ok(());
            }
            ctx.output.header("Active Coupons");
            for coupon in coupons.get() {
                ctx.output.list_item(&coupon.code);
            }
        }
        DashboardCommand::Export { output } => {
            let path = ctx.resolve_path(&output);
            let orders = storefront.recent_admin_orders().await?.into_inner();
            let report = format!("{}\n\n{}", stats.to_csv(), orders_csv(&orders));
            fs::write(&path, report)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            ctx.output
                .success(&format!("Report written to {}", path.display()));
        }
    }

    Ok(())
}
