//! Back-office product table.

use std::fs;

use anyhow::{anyhow, bail, Context as _, Result};
use dialoguer::Confirm;
use shopfront_commerce::catalog::{InventoryFilter, Product, ProductDraft};
use shopfront_commerce::ids::ProductId;
use shopfront_commerce::money::{Currency, Money};
use shopfront_core::{
    product_added_notice, product_duplicated_notice, Storefront, PRODUCTS_EXPORTED,
    PRODUCT_DELETED, PRODUCT_UPDATED,
};

use super::{InventoryArgs, InventoryCommand, ProductFields};
use crate::context::Context;
use crate::output::stock_badge;

const PRODUCT_WIDTHS: [usize; 7] = [11, 26, 12, 10, 6, 12, 10];

/// Run the inventory command.
pub async fn run(args: InventoryArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    match args.command.unwrap_or(InventoryCommand::Stats) {
        InventoryCommand::List {
            category,
            stock,
            search,
        } => {
            let products = storefront.managed_products().await?;
            ctx.output.fallback_notice(products.is_fallback(), "products");
            let filter = InventoryFilter {
                category,
                stock,
                search,
            };
            let shown = filter.apply(products.get());

            if ctx.output.is_json() {
                ctx.output.json(&shown);
                return Ok(());
            }
            ctx.output.header("Products");
            if shown.is_empty() {
                ctx.output.info("No products found");
                return Ok(());
            }
            ctx.output.table_row(
                &["ID", "Name", "Category", "Price", "Disc", "Stock", "SKU"],
                &PRODUCT_WIDTHS,
            );
            for product in shown {
                ctx.output.table_row(
                    &[
                        &product.id.to_string(),
                        &product.name,
                        &product.category,
                        &product.final_price().display_short(),
                        &format!("{}%", product.discount),
                        &format!("{} {}", product.stock, stock_badge(product.stock_status())),
                        product.sku.as_deref().unwrap_or("-"),
                    ],
                    &PRODUCT_WIDTHS,
                );
            }
        }
        InventoryCommand::Stats => {
            let stats = storefront.inventory_stats().await?;
            ctx.output.fallback_notice(stats.is_fallback(), "products");
            if ctx.output.is_json() {
                ctx.output.json(&stats);
                return Ok(());
            }
            let counts = stats.get();
            ctx.output.header("Inventory");
            ctx.output.kv("Total Products", &counts.total.to_string());
            ctx.output.kv("In Stock", &counts.in_stock.to_string());
            ctx.output.kv("Low Stock", &counts.low_stock.to_string());
            ctx.output.kv("Out of Stock", &counts.out_of_stock.to_string());
        }
        InventoryCommand::Add(fields) => {
            let draft = fields.fill(ProductDraft::default())?;
            let added = storefront.add_product(draft).await?;
            report(ctx, &added.value, &added.notice(&product_added_notice(added.value.id)));
        }
        InventoryCommand::Edit { id, fields } => {
            let current = find(&storefront, id).await?;
            let draft = fields.fill(ProductDraft::from(&current))?;
            let updated = storefront.update_product(id, draft).await?;
            report(ctx, &updated.value, &updated.notice(PRODUCT_UPDATED));
        }
        InventoryCommand::Duplicate { id } => {
            let copy = storefront.duplicate_product(id).await?;
            report(ctx, &copy.value, &copy.notice(&product_duplicated_notice(copy.value.id)));
        }
        InventoryCommand::Delete { id, yes } => {
            if !yes
                && !Confirm::new()
                    .with_prompt("Are you sure you want to delete this product?")
                    .default(false)
                    .interact()?
            {
                ctx.output.info("Cancelled");
                return Ok(());
            }
            let deleted = storefront.delete_product(id).await?;
            ctx.output.success(&deleted.notice(PRODUCT_DELETED));
        }
        InventoryCommand::Export { output } => {
            let path = ctx.resolve_path(&output);
            let csv = storefront.export_products_csv().await?;
            fs::write(&path, csv)
                .with_context(|| format!("Failed to write export: {}", path.display()))?;
            ctx.output
                .success(&format!("{} ({})", PRODUCTS_EXPORTED, path.display()));
        }
    }

    Ok(())
}

async fn find(storefront: &Storefront, id: ProductId) -> Result<Product> {
    storefront
        .managed_products()
        .await?
        .into_inner()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| anyhow!("Product not found: {}", id))
}

fn report(ctx: &Context, product: &Product, notice: &str) {
    if ctx.output.is_json() {
        ctx.output.json(product);
        return;
    }
    ctx.output.success(notice);
    ctx.output.kv("Name", &product.name);
    ctx.output.kv("Price", &product.final_price().display());
    ctx.output.kv("Stock", &stock_badge(product.stock_status()));
}

impl ProductFields {
    /// Overlay the given fields on `draft`.
    fn fill(self, mut draft: ProductDraft) -> Result<ProductDraft> {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(price) = self.price {
            if !price.is_finite() {
                bail!("Invalid price: {}", price);
            }
            draft.price = Money::from_decimal(price, Currency::BDT);
        }
        if let Some(discount) = self.discount {
            draft.discount = discount;
        }
        if let Some(stock) = self.stock {
            draft.stock = stock;
        }
        if self.sku.is_some() {
            draft.sku = self.sku;
        }
        if self.description.is_some() {
            draft.description = self.description;
        }
        if let Some(tags) = self.tags {
            draft.tags = ProductDraft::parse_tags(&tags);
        }
        if let Some(featured) = self.featured {
            draft.featured = featured;
        }
        if !self.image.is_empty() {
            draft.images = self.image;
        }
        Ok(draft)
    }
}
