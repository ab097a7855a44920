//! Product cards and the listing grid.

use super::html_escape;
use shopfront_commerce::catalog::ProductCard;
use shopfront_commerce::search::Page;

/// Render a grid of product cards, or an empty state.
pub fn render_product_grid(products: &[ProductCard]) -> String {
    if products.is_empty() {
        return r#"<div class="col-12 text-center py-5">
    <i class="bi bi-search" style="font-size: 3rem;"></i>
    <p class="text-muted mt-3">No products found</p>
</div>"#
            .to_string();
    }
    products.iter().map(render_product_card).collect()
}

/// Render one listing page with its result count.
pub fn render_listing(page: &Page<ProductCard>) -> String {
    let pagination = &page.pagination;
    format!(
        r#"<section class="product-listing" data-section="results">
    <p class="results-count">Showing {}-{} of {} products</p>
    <div class="row g-4">
        {}
    </div>
</section>"#,
        pagination.start_item(),
        pagination.end_item(),
        pagination.total,
        render_product_grid(&page.items)
    )
}

pub fn render_product_card(product: &ProductCard) -> String {
    let badge = if product.is_on_sale() {
        format!(r#"<span class="product-badge">-{}%</span>"#, product.discount)
    } else {
        String::new()
    };
    let original = product
        .original_price
        .map(|price| format!(r#"<span class="original-price">{}</span>"#, price.display_short()))
        .unwrap_or_default();

    format!(
        r#"<div class="col-md-3 col-sm-6">
    <div class="product-card" data-product-id="{id}">
        <div class="product-image">
            <a href="product-details.html?id={id}"><img src="{image}" alt="{name}" loading="lazy"></a>
            {badge}
        </div>
        <div class="product-info">
            <div class="product-category">{category}</div>
            <h3 class="product-title">{name}</h3>
            <div class="product-rating">
                {stars}
                <span class="rating-count">({reviews})</span>
            </div>
            <div class="product-price">
                <span class="current-price">{price}</span>
                {original}
            </div>
            <button class="btn btn-primary w-100" onclick="addToCart({id})">Add to Cart</button>
        </div>
    </div>
</div>"#,
        id = product.id,
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        badge = badge,
        category = html_escape(&product.category),
        stars = render_stars(product.rating),
        reviews = product.review_count,
        price = product.price.display_short(),
        original = original,
    )
}

/// Five stars, half stars rounding up from .5.
pub fn render_stars(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = rating.fract() >= 0.5;
    let empty = 5 - full - usize::from(half);

    let mut html = String::from(r#"<span class="stars">"#);
    html.push_str(&r#"<i class="bi bi-star-fill"></i>"#.repeat(full));
    if half {
        html.push_str(r#"<i class="bi bi-star-half"></i>"#);
    }
    html.push_str(&r#"<i class="bi bi-star"></i>"#.repeat(empty));
    html.push_str("</span>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_card() {
        let card = ProductCard::demo(3, "Smart Watch <Pro>", "Electronics", 8999, "Watch")
            .was(12999, 31)
            .rated(4.5, 67);
        let html = render_product_card(&card);
        assert!(html.contains(r#"data-product-id="3""#));
        assert!(html.contains("Smart Watch &lt;Pro&gt;"));
        assert!(html.contains("-31%"));
        assert!(html.contains("\u{09f3}8999"));
        assert!(html.contains("(67)"));
    }

    #[test]
    fn test_stars() {
        let html = render_stars(3.5);
        assert_eq!(html.matches("bi-star-fill").count(), 3);
        assert_eq!(html.matches("bi-star-half").count(), 1);
        assert_eq!(html.matches(r#""bi bi-star""#).count(), 1);
        assert_eq!(render_stars(9.0).matches("bi-star-fill").count(), 5);
    }

    #[test]
    fn test_empty_grid() {
        assert!(render_product_grid(&[]).contains("No products found"));
    }

    #[test]
    fn test_listing_counts() {
        let products: Vec<ProductCard> = (1..=15)
            .map(|i| ProductCard::demo(i, "Item", "Sports", 100, "Item"))
            .collect();
        let html = render_listing(&Page::slice(products, 2, 12));
        assert!(html.contains("Showing 13-15 of 15 products"));
        assert_eq!(html.matches("product-card").count(), 3);
    }
}
