//! Stock levels and the back-office product form.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{self, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Products with at most this many units are running low.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Image given to products saved without one.
pub const NO_IMAGE: &str = "https://via.placeholder.com/300x300?text=No+Image";

/// Stock bucket shown in the product table and used by its filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn of(stock: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StockStatus::InStock => "success",
            StockStatus::LowStock => "warning",
            StockStatus::OutOfStock => "danger",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StockStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in-stock" => Ok(StockStatus::InStock),
            "low-stock" => Ok(StockStatus::LowStock),
            "out-of-stock" => Ok(StockStatus::OutOfStock),
            other => Err(CommerceError::ValidationError(format!(
                "Unknown stock status: {}",
                other
            ))),
        }
    }
}

/// Stat cards above the product table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCounts {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl StockCounts {
    pub fn tally(products: &[Product]) -> Self {
        products.iter().fold(
            Self {
                total: products.len(),
                ..Self::default()
            },
            |mut counts, product| {
                match product.stock_status() {
                    StockStatus::InStock => counts.in_stock += 1,
                    StockStatus::LowStock => counts.low_stock += 1,
                    StockStatus::OutOfStock => counts.out_of_stock += 1,
                }
                counts
            },
        )
    }
}

/// Filters of the back-office product table.
///
/// The search box matches name, category and SKU, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    pub category: Option<String>,
    pub stock: Option<StockStatus>,
    pub search: String,
}

impl InventoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }
        if let Some(stock) = self.stock {
            if product.stock_status() != stock {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || product.name.to_lowercase().contains(&needle)
            || product.category.to_lowercase().contains(&needle)
            || product
                .sku
                .as_deref()
                .is_some_and(|sku| sku.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Fields of the add/edit product form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    #[serde(with = "money::decimal")]
    pub price: Money,
    #[serde(default)]
    pub discount: u32,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    /// Newly chosen images; empty keeps what the product had.
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<(), CommerceError> {
        let invalid = |msg: &str| Err(CommerceError::ValidationError(msg.to_string()));
        if self.name.trim().is_empty() {
            return invalid("Product name is required");
        }
        if self.category.trim().is_empty() {
            return invalid("Category is required");
        }
        if !self.price.is_positive() {
            return invalid("Price must be greater than zero");
        }
        if self.discount > 100 {
            return invalid("Discount must be between 0 and 100");
        }
        if self.stock < 0 {
            return invalid("Stock cannot be negative");
        }
        Ok(())
    }

    /// Split the comma separated tags field, dropping blanks.
    pub fn parse_tags(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The final price preview next to the price field.
    pub fn final_price(&self) -> Money {
        let discount = self.discount.min(100) as f64;
        self.price.multiply_decimal(1.0 - discount / 100.0)
    }

    /// A new product created on `created`.
    ///
    /// A blank SKU becomes `PROD-<millis>`.
    pub fn into_product(self, id: ProductId, created: NaiveDate) -> Product {
        let mut product = Product::new(id, "", "", self.price);
        product.images = vec![NO_IMAGE.to_string()];
        product.sku = Some(format!("PROD-{}", chrono::Utc::now().timestamp_millis()));
        product.created_at = Some(created.to_string());
        self.apply_to(&mut product);
        product
    }

    /// Overwrite the form fields of `product`.
    pub fn apply_to(self, product: &mut Product) {
        product.name = self.name.trim().to_string();
        product.category = self.category.trim().to_string();
        product.price = self.price;
        product.discount = self.discount;
        product.stock = self.stock;
        if let Some(sku) = self.sku.filter(|s| !s.trim().is_empty()) {
            product.sku = Some(sku.trim().to_string());
        }
        product.description = self.description.filter(|d| !d.trim().is_empty());
        product.tags = self.tags;
        product.featured = self.featured;
        product.active = true;
        if !self.images.is_empty() {
            product.images = self.images;
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            discount: product.discount,
            stock: product.stock,
            sku: product.sku.clone(),
            description: product.description.clone(),
            tags: product.tags.clone(),
            featured: product.featured,
            images: Vec::new(),
        }
    }
}

/// Copy of `product` under a new id: "(Copy)" appended to the name and a
/// fresh `COPY-<millis>` SKU.
pub fn duplicate_product(product: &Product, id: ProductId, created: NaiveDate) -> Product {
    Product {
        id,
        name: format!("{} (Copy)", product.name),
        sku: Some(format!("COPY-{}", chrono::Utc::now().timestamp_millis())),
        created_at: Some(created.to_string()),
        ..product.clone()
    }
}

/// CSV export of the product table.
pub fn products_csv(products: &[Product]) -> String {
    let mut lines = vec!["ID,Name,Category,Price,Discount,Stock,SKU,Status".to_string()];
    lines.extend(products.iter().map(|p| {
        format!(
            "{},\"{}\",{},{},{},{},{},{}",
            p.id,
            p.name.replace('"', "\"\""),
            p.category,
            csv_price(p.price),
            p.discount,
            p.stock,
            p.sku.as_deref().unwrap_or(""),
            p.status_label()
        )
    }));
    lines.join("\n")
}

fn csv_price(price: Money) -> String {
    if price.amount_cents % 100 == 0 {
        (price.amount_cents / 100).to_string()
    } else {
        price.display_amount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, category: &str, stock: i64, sku: &str) -> Product {
        let mut p = Product::new(ProductId::new(id), name, category, Money::taka(1800));
        p.stock = stock;
        p.sku = Some(sku.to_string());
        p
    }

    fn table() -> Vec<Product> {
        vec![
            product(2601010001, "Samsung Galaxy S24", "electronics", 25, "ELEC-001"),
            product(2601030001, "Leather Sofa Set", "home", 8, "HOME-001"),
            product(2601050001, "Yoga Mat Premium", "sports", 3, "SPORT-001"),
            product(2601060001, "Apple MacBook Pro M3", "electronics", 0, "ELEC-002"),
        ]
    }

    #[test]
    fn test_stock_buckets() {
        assert_eq!(StockStatus::of(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::of(1), StockStatus::LowStock);
        assert_eq!(StockStatus::of(10), StockStatus::LowStock);
        assert_eq!(StockStatus::of(11), StockStatus::InStock);
        assert_eq!(StockStatus::LowStock.badge_class(), "warning");
        assert_eq!("out-of-stock".parse::<StockStatus>().unwrap(), StockStatus::OutOfStock);
        assert!("sold".parse::<StockStatus>().is_err());
    }

    #[test]
    fn test_counts() {
        let counts = StockCounts::tally(&table());
        assert_eq!(
            counts,
            StockCounts {
                total: 4,
                in_stock: 1,
                low_stock: 2,
                out_of_stock: 1
            }
        );
    }

    #[test]
    fn test_filter() {
        let products = table();
        let by_sku = InventoryFilter {
            search: "elec".into(),
            ..Default::default()
        };
        assert_eq!(by_sku.apply(&products).len(), 2);

        let low_home = InventoryFilter {
            category: Some("Home".into()),
            stock: Some(StockStatus::LowStock),
            ..Default::default()
        };
        let found = low_home.apply(&products);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Leather Sofa Set");
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = ProductDraft {
            name: "Desk Lamp".into(),
            category: "home".into(),
            price: Money::taka(899),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
        draft.discount = 120;
        assert!(draft.validate().is_err());
        draft.discount = 10;
        draft.price = Money::taka(0);
        assert!(draft.validate().is_err());
        assert_eq!(
            ProductDraft::parse_tags(" new arrival, ,sale "),
            vec!["new arrival".to_string(), "sale".to_string()]
        );
    }

    #[test]
    fn test_new_product_from_draft() {
        let draft = ProductDraft {
            name: " Desk Lamp ".into(),
            category: "home".into(),
            price: Money::taka(1000),
            discount: 20,
            stock: 5,
            ..Default::default()
        };
        assert_eq!(draft.final_price(), Money::taka(800));

        let created = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let p = draft.into_product(ProductId::new(2601070001), created);
        assert_eq!(p.name, "Desk Lamp");
        assert_eq!(p.images, vec![NO_IMAGE.to_string()]);
        assert!(p.sku.as_deref().unwrap().starts_with("PROD-"));
        assert_eq!(p.created_at.as_deref(), Some("2026-01-07"));
        assert!(p.active);
    }

    #[test]
    fn test_edit_keeps_images_and_id() {
        let mut p = product(2601010001, "Samsung Galaxy S24", "electronics", 25, "ELEC-001");
        p.images = vec!["s24.jpg".into()];
        let mut draft = ProductDraft::from(&p);
        draft.stock = 30;
        draft.sku = None;
        draft.apply_to(&mut p);
        assert_eq!(p.id, ProductId::new(2601010001));
        assert_eq!(p.stock, 30);
        assert_eq!(p.images, vec!["s24.jpg".to_string()]);
        assert_eq!(p.sku.as_deref(), Some("ELEC-001"));
    }

    #[test]
    fn test_duplicate() {
        let original = product(2601010001, "Samsung Galaxy S24", "electronics", 25, "ELEC-001");
        let created = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let copy = duplicate_product(&original, ProductId::new(2601070001), created);
        assert_eq!(copy.name, "Samsung Galaxy S24 (Copy)");
        assert_eq!(copy.id, ProductId::new(2601070001));
        assert!(copy.sku.as_deref().unwrap().starts_with("COPY-"));
        assert_eq!(copy.stock, 25);
    }

    #[test]
    fn test_csv() {
        let csv = products_csv(&table());
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("ID,Name,Category,Price,Discount,Stock,SKU,Status"));
        assert_eq!(
            lines.next(),
            Some("2601010001,\"Samsung Galaxy S24\",electronics,1800,0,25,ELEC-001,active")
        );
        assert_eq!(csv.lines().count(), 5);
    }
}
