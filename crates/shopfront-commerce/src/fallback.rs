//! Built-in product data shown when the backend is unreachable.
//!
//! Each page has its own fixed set; the sizes are part of the page layout
//! (8 featured cards on the home page, 4 cart recommendations, 12 listing
//! cards, 4 related products).

use crate::catalog::{Product, ProductCard, ProductDetail, Review, PLACEHOLDER_IMAGE};
use crate::ids::ProductId;
use crate::money::Money;
use std::collections::BTreeMap;

/// Home page "featured products" grid.
pub fn featured_products() -> Vec<ProductCard> {
    vec![
        ProductCard::demo(1, "Wireless Headphones", "Electronics", 2999, "Headphones")
            .was(3999, 25)
            .rated(4.5, 128),
        ProductCard::demo(2, "Smart Watch", "Electronics", 4999, "Smart+Watch")
            .was(6999, 30)
            .rated(4.8, 256),
        ProductCard::demo(3, "Laptop Backpack", "Fashion", 1499, "Backpack").rated(4.3, 89),
        ProductCard::demo(4, "LED Desk Lamp", "Home", 899, "Desk+Lamp")
            .was(1299, 31)
            .rated(4.6, 145),
        ProductCard::demo(5, "Running Shoes", "Fashion", 3499, "Running+Shoes").rated(4.7, 203),
        ProductCard::demo(6, "Bluetooth Speaker", "Electronics", 1999, "Speaker")
            .was(2999, 33)
            .rated(4.4, 167),
        ProductCard::demo(7, "Coffee Maker", "Home", 5999, "Coffee+Maker").rated(4.5, 92),
        ProductCard::demo(8, "Yoga Mat", "Sports", 799, "Yoga+Mat")
            .was(1199, 33)
            .rated(4.2, 78),
    ]
}

/// "You may also like" strip on the cart page.
pub fn recommended_products() -> Vec<ProductCard> {
    vec![
        ProductCard::demo(1, "Wireless Headphones", "", 2999, "Headphones"),
        ProductCard::demo(2, "Smart Watch", "", 4999, "Smart+Watch"),
        ProductCard::demo(3, "Bluetooth Speaker", "", 1999, "Speaker"),
        ProductCard::demo(4, "Power Bank", "", 1499, "Power+Bank"),
    ]
}

/// Product listing page grid.
pub fn listing_products() -> Vec<ProductCard> {
    vec![
        ProductCard::demo(2601010001, "Wireless Headphones", "electronics", 2999, "Headphones")
            .was(3999, 25)
            .rated(4.5, 128),
        ProductCard::demo(2601020001, "Smart Watch", "electronics", 4999, "Smart+Watch")
            .was(6999, 30)
            .rated(4.8, 256),
        ProductCard::demo(2601030001, "Laptop Backpack", "fashion", 1499, "Backpack").rated(4.3, 89),
        ProductCard::demo(2601040001, "LED Desk Lamp", "home", 899, "Desk+Lamp")
            .was(1299, 31)
            .rated(4.6, 145),
        ProductCard::demo(2601050001, "Running Shoes", "fashion", 3499, "Running+Shoes").rated(4.7, 203),
        ProductCard::demo(2601060001, "Bluetooth Speaker", "electronics", 1999, "Speaker")
            .was(2999, 33)
            .rated(4.4, 167),
        ProductCard::demo(2601070001, "Coffee Maker", "home", 5999, "Coffee+Maker").rated(4.5, 92),
        ProductCard::demo(2601070002, "Yoga Mat", "sports", 799, "Yoga+Mat")
            .was(1199, 33)
            .rated(4.2, 78),
        ProductCard::demo(2601070003, "Gaming Mouse", "electronics", 1599, "Gaming+Mouse").rated(4.6, 156),
        ProductCard::demo(2601070004, "Water Bottle", "sports", 399, "Water+Bottle")
            .was(599, 33)
            .rated(4.3, 234),
        ProductCard::demo(2601070005, "Sunglasses", "fashion", 1299, "Sunglasses").rated(4.4, 167),
        ProductCard::demo(2601070006, "USB Charger", "electronics", 599, "USB+Charger")
            .was(899, 33)
            .rated(4.1, 98),
    ]
}

/// Related products strip on the details page.
pub fn related_products() -> Vec<ProductCard> {
    vec![
        ProductCard::demo(2, "Smart Watch", "", 4999, "Smart+Watch"),
        ProductCard::demo(3, "Laptop Backpack", "", 1499, "Backpack"),
        ProductCard::demo(6, "Bluetooth Speaker", "", 1999, "Speaker"),
        ProductCard::demo(9, "Gaming Mouse", "", 1599, "Gaming+Mouse"),
    ]
}

/// Details page for any product id.
pub fn product_detail(id: ProductId) -> ProductDetail {
    let mut card = ProductCard::demo(id.get(), "Premium Wireless Headphones", "Electronics", 2999, "Headphones")
        .was(3999, 25)
        .rated(4.5, 128);
    card.image = "https://via.placeholder.com/600x600?text=Headphones".to_string();

    let specifications = [
        ("Brand", "Premium Audio"),
        ("Model", "PA-2999"),
        ("Connectivity", "Bluetooth 5.0"),
        ("Battery Life", "30 hours"),
        ("Weight", "250g"),
        ("Color", "Black"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect::<BTreeMap<_, _>>();

    ProductDetail {
        images: vec![card.image.clone()],
        card,
        description: "Experience premium sound quality with these wireless headphones. \
                      Features include active noise cancellation, 30-hour battery life, \
                      and comfortable over-ear design."
            .to_string(),
        sku: "WH-2999".to_string(),
        stock: 50,
        specifications,
    }
}

/// Back-office product table before anything is loaded from the backend.
pub fn managed_products() -> Vec<Product> {
    #[rustfmt::skip]
    let rows: [(u64, &str, &str, i64, u32, i64, &str, &str, &str, &[&str], bool); 6] = [
        (2601010001, "Samsung Galaxy S24", "electronics", 85000, 10, 25, "ELEC-001",
         "Latest Samsung flagship smartphone with advanced AI features", "Galaxy+S24",
         &["trending", "new arrival", "bestseller"], true),
        (2601020001, "Nike Air Max Shoes", "fashion", 12000, 15, 45, "FASH-001",
         "Comfortable and stylish running shoes", "Nike+Shoes", &["sports", "trending"], false),
        (2601030001, "Leather Sofa Set", "home", 55000, 20, 8, "HOME-001",
         "Premium 5-seater leather sofa with warranty", "Sofa+Set", &["furniture", "premium"], true),
        (2601040001, "MAC Lipstick Ruby Woo", "beauty", 2500, 0, 120, "BEAUTY-001",
         "Classic red lipstick, matte finish", "MAC+Lipstick", &["cosmetics", "trending"], false),
        (2601050001, "Yoga Mat Premium", "sports", 1800, 25, 3, "SPORT-001",
         "Eco-friendly yoga mat with carry bag", "Yoga+Mat", &["fitness", "sale"], false),
        (2601060001, "Apple MacBook Pro M3", "electronics", 245000, 5, 0, "ELEC-002",
         "Latest MacBook Pro with M3 chip", "MacBook+Pro", &["laptop", "apple", "premium"], true),
    ];

    rows.into_iter()
        .map(|(id, name, category, price, discount, stock, sku, description, image, tags, featured)| {
            let id = ProductId::new(id);
            let mut product = Product::new(id, name, category, Money::taka(price));
            product.discount = discount;
            product.stock = stock;
            product.sku = Some(sku.to_string());
            product.description = Some(description.to_string());
            product.images = vec![format!("{}?text={}", PLACEHOLDER_IMAGE, image)];
            product.tags = tags.iter().map(|t| t.to_string()).collect();
            product.featured = featured;
            product.created_at = id.created_on().map(|d| d.to_string());
            product
        })
        .collect()
}

/// Sample reviews for the details page, dated today.
pub fn reviews() -> Vec<Review> {
    let today = chrono::Utc::now().date_naive().to_string();
    vec![
        Review {
            id: None,
            user_name: Some("John Doe".to_string()),
            rating: 5,
            title: Some("Excellent product!".to_string()),
            comment: "Really happy with this purchase. Quality is top-notch.".to_string(),
            verified: true,
            created_at: Some(today.clone()),
        },
        Review {
            id: None,
            user_name: Some("Jane Smith".to_string()),
            rating: 4,
            title: Some("Good value for money".to_string()),
            comment: "Works as expected. Would recommend.".to_string(),
            verified: true,
            created_at: Some(today),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_fixed_sizes() {
        assert_eq!(featured_products().len(), 8);
        assert_eq!(recommended_products().len(), 4);
        assert_eq!(listing_products().len(), 12);
        assert_eq!(related_products().len(), 4);
        assert_eq!(reviews().len(), 2);
        assert_eq!(managed_products().len(), 6);
    }

    #[test]
    fn test_managed_products() {
        let products = managed_products();
        assert_eq!(products[0].sku.as_deref(), Some("ELEC-001"));
        assert_eq!(products[0].created_at.as_deref(), Some("2026-01-01"));
        assert_eq!(products[5].stock, 0);
        assert_eq!(products[2].images[0], "https://via.placeholder.com/300x300?text=Sofa+Set");
    }

    #[test]
    fn test_featured_prices() {
        let featured = featured_products();
        assert_eq!(featured[0].price, Money::taka(2999));
        assert_eq!(featured[0].original_price, Some(Money::taka(3999)));
        assert!(!featured[2].is_on_sale());
        assert_eq!(featured[7].name, "Yoga Mat");
    }

    #[test]
    fn test_product_detail_keeps_requested_id() {
        let detail = product_detail(ProductId::new(42));
        assert_eq!(detail.card.id, ProductId::new(42));
        assert_eq!(detail.card.name, "Premium Wireless Headphones");
        assert_eq!(detail.stock_label(), "In Stock (50 available)");
        assert_eq!(detail.specifications.len(), 6);
    }
}
