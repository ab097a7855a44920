//! Product browsing commands.

use anyhow::Result;
use shopfront_commerce::catalog::ProductCard;
use shopfront_commerce::search::ListingFilters;
use shopfront_core::render::render_listing;

use super::{ProductArgs, ProductsArgs, SearchArgs};
use crate::context::Context;
use crate::output::{stars, Output};

const PRODUCT_WIDTHS: [usize; 5] = [5, 32, 16, 10, 8];

/// Run the products command.
pub async fn products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    let filters = ListingFilters {
        search: args.search.unwrap_or_default(),
        categories: args.category.into_iter().collect(),
        price_range: args.price,
        ratings: args.rating.into_iter().collect(),
        brands: args.brand,
        sort: args.sort,
        page: args.page.max(1),
    };

    let spinner = ctx.output.spinner("Loading products...");
    let page = storefront.listing(filters).await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }
    if args.html {
        println!("{}", render_listing(page.get()));
        return Ok(());
    }

    ctx.output.fallback_notice(page.is_fallback(), "products");
    let page = page.get();
    ctx.output.header(&format!(
        "Showing {}-{} of {} products",
        page.pagination.start_item(),
        page.pagination.end_item(),
        page.pagination.total
    ));
    print_cards(&ctx.output, &page.items);
    if page.pagination.has_next() {
        ctx.output
            .info(&format!("More on page {}", page.pagination.page + 1));
    }

    Ok(())
}

/// Run the featured command.
pub async fn featured(ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    let spinner = ctx.output.spinner("Loading home page...");
    let home = storefront.home_page().await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&home);
        return Ok(());
    }

    ctx.output.header("Featured Products");
    ctx.output
        .fallback_notice(home.featured.is_fallback(), "featured products");
    print_cards(&ctx.output, home.featured.get());

    ctx.output.header("Recommended For You");
    ctx.output
        .fallback_notice(home.recommended.is_fallback(), "recommendations");
    print_cards(&ctx.output, home.recommended.get());

    Ok(())
}

/// Run the product command.
pub async fn product(args: ProductArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    let spinner = ctx.output.spinner("Loading product...");
    let detail = storefront.product_detail(args.id).await;
    let reviews = storefront.reviews(args.id).await;
    let related = if args.related {
        Some(storefront.related_products().await)
    } else {
        None
    };
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": detail,
            "reviews": reviews,
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.fallback_notice(detail.is_fallback(), "product details");
    let detail = detail.get();
    let card = &detail.card;
    ctx.output.header(&card.name);
    ctx.output.kv("Category", &card.category);
    ctx.output.kv("Price", &price_label(card));
    ctx.output.kv(
        "Rating",
        &format!("{} ({} reviews)", stars(card.rating), card.review_count),
    );
    ctx.output.kv("Stock", &detail.stock_label());
    if !detail.sku.is_empty() {
        ctx.output.kv("SKU", &detail.sku);
    }
    if !detail.description.is_empty() {
        ctx.output.info(&detail.description);
    }
    for (name, value) in &detail.specifications {
        ctx.output.kv(name, value);
    }

    ctx.output.header("Reviews");
    if reviews.get().is_empty() {
        ctx.output.info("No reviews yet");
    }
    for review in reviews.get() {
        ctx.output.list_item(&format!(
            "{} {} - {}",
            stars(review.rating as f64),
            review.author(),
            review.comment
        ));
    }

    if let Some(related) = related {
        ctx.output.header("Related Products");
        print_cards(&ctx.output, related.get());
    }

    Ok(())
}

/// Run the search command.
pub async fn search(args: SearchArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    let Some(results) = storefront.search(&args.query).await else {
        ctx.output.warn("Type at least two characters to search");
        return Ok(());
    };

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.fallback_notice(results.is_fallback(), "search results");
    ctx.output.header(&format!("Results for \"{}\"", args.query.trim()));
    if results.get().is_empty() {
        ctx.output.info("No products found");
    } else {
        print_cards(&ctx.output, results.get());
    }

    Ok(())
}

pub(crate) fn print_cards(output: &Output, cards: &[ProductCard]) {
    output.table_row(&["ID", "Name", "Category", "Price", "Rating"], &PRODUCT_WIDTHS);
    for card in cards {
        output.table_row(
            &[
                &card.id.to_string(),
                &card.name,
                &card.category,
                &card.price.display_short(),
                &format!("{:.1}", card.rating),
            ],
            &PRODUCT_WIDTHS,
        );
    }
}

fn price_label(card: &ProductCard) -> String {
    match card.original_price {
        Some(original) if card.is_on_sale() => format!(
            "{} (was {}, -{}%)",
            card.price.display_short(),
            original.display_short(),
            card.discount
        ),
        _ => card.price.display_short(),
    }
}
