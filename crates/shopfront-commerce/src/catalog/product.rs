//! Product types.

use crate::catalog::StockStatus;
use crate::ids::{ProductId, ReviewId};
use crate::money::{self, Money};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300";

/// A product as returned by the catalog API.
///
/// `price` is the list price; the price a customer pays is
/// [`final_price`](Product::final_price).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category name.
    #[serde(default, deserialize_with = "named")]
    pub category: String,
    /// Brand name.
    #[serde(default, deserialize_with = "named_opt", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// List price.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Discount percentage (0-100).
    #[serde(default, deserialize_with = "null_as_zero")]
    pub discount: u32,
    /// Units in stock.
    #[serde(default, alias = "stockQuantity")]
    pub stock: i64,
    /// Stock keeping unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Image URLs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Free-form tags; the listing page filters brands through these.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Specification table, e.g. "Battery Life" to "30 hours".
    #[serde(default, deserialize_with = "specifications")]
    pub specifications: BTreeMap<String, String>,
    /// Average rating (0-5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of reviews.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    /// Whether the product is featured on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Listed in the shop; inactive products stay in the back office only.
    #[serde(default = "listed")]
    pub active: bool,
    /// Creation time as sent by the backend (ISO-8601, zone optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(id: ProductId, name: impl Into<String>, category: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            category: category.into(),
            brand: None,
            price,
            discount: 0,
            stock: 0,
            sku: None,
            images: Vec::new(),
            tags: Vec::new(),
            specifications: BTreeMap::new(),
            rating: None,
            review_count: None,
            featured: false,
            active: true,
            created_at: None,
        }
    }

    /// Price after the percentage discount: `price × (1 − discount/100)`.
    pub fn final_price(&self) -> Money {
        let discount = self.discount.min(100) as f64;
        self.price.multiply_decimal(1.0 - discount / 100.0)
    }

    /// The undiscounted price, shown struck through when a discount applies.
    pub fn original_price(&self) -> Option<Money> {
        (self.discount > 0).then_some(self.price)
    }

    /// First image, or the placeholder.
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Check if at least one unit is available.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::of(self.stock)
    }

    /// "active" or "inactive", as exported.
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            "inactive"
        }
    }
}

/// Product as shown in a grid: prices already resolved for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Price the customer pays.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Struck-through price, when discounted.
    #[serde(
        default,
        with = "money::decimal::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Money>,
    #[serde(default)]
    pub discount: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default = "placeholder_image")]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProductCard {
    /// A card for a fixed demo product.
    pub fn demo(id: u64, name: &str, category: &str, price: i64, image_text: &str) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            price: Money::taka(price),
            original_price: None,
            discount: 0,
            rating: 0.0,
            review_count: 0,
            image: format!("{}?text={}", PLACEHOLDER_IMAGE, image_text),
            featured: false,
            tags: Vec::new(),
        }
    }

    /// Mark as discounted from `original` by `discount` percent.
    pub fn was(mut self, original: i64, discount: u32) -> Self {
        self.original_price = Some(Money::taka(original));
        self.discount = discount;
        self
    }

    /// Set rating and review count.
    pub fn rated(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Check if the card shows a discount badge.
    pub fn is_on_sale(&self) -> bool {
        self.discount > 0
    }
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.final_price(),
            original_price: product.original_price(),
            discount: product.discount,
            rating: product.rating.unwrap_or(0.0),
            review_count: product.review_count.unwrap_or(0),
            image: product.primary_image().to_string(),
            featured: product.featured,
            tags: product.tags.clone(),
        }
    }
}

/// Everything the product details page shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub card: ProductCard,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
}

impl ProductDetail {
    /// Label of the stock indicator.
    pub fn stock_label(&self) -> String {
        if self.stock > 0 {
            format!("In Stock ({} available)", self.stock)
        } else {
            "Out of Stock".to_string()
        }
    }
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            card: ProductCard::from(product),
            description: product.description.clone().unwrap_or_default(),
            sku: product.sku.clone().unwrap_or_default(),
            stock: product.stock,
            images: product.images.clone(),
            specifications: product.specifications.clone(),
        }
    }
}

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReviewId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub comment: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Review {
    /// Name shown next to the review.
    pub fn author(&self) -> &str {
        self.user_name.as_deref().unwrap_or("Anonymous")
    }
}

/// Review form payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub product_id: ProductId,
    pub rating: u8,
    pub title: String,
    pub comment: String,
}

impl NewReview {
    /// Check the form before submitting.
    pub fn validate(&self) -> Result<(), crate::CommerceError> {
        if !(1..=5).contains(&self.rating) {
            return Err(crate::CommerceError::ValidationError(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        if self.comment.trim().is_empty() {
            return Err(crate::CommerceError::ValidationError(
                "Review text is required".to_string(),
            ));
        }
        Ok(())
    }
}

fn listed() -> bool {
    true
}

fn placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// The backend sends related entities either as a plain name or as an
/// object carrying one.
#[derive(Deserialize)]
#[serde(untagged)]
enum Named {
    Name(String),
    Entity { name: String },
}

fn named<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(named_opt(deserializer)?.unwrap_or_default())
}

fn named_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Named>::deserialize(deserializer)?.map(|n| match n {
        Named::Name(name) | Named::Entity { name } => name,
    }))
}

/// Specifications arrive either as an object or as a JSON-encoded string.
fn specifications<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Specs {
        Table(BTreeMap<String, String>),
        Encoded(String),
    }

    match Option::<Specs>::deserialize(deserializer)? {
        None => Ok(BTreeMap::new()),
        Some(Specs::Table(table)) => Ok(table),
        Some(Specs::Encoded(text)) if text.trim().is_empty() => Ok(BTreeMap::new()),
        Some(Specs::Encoded(text)) => serde_json::from_str(&text).map_err(serde::de::Error::custom),
    }
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}
