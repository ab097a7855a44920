//! Product catalog types.

mod inventory;
mod product;

pub use inventory::{
    duplicate_product, products_csv, InventoryFilter, ProductDraft, StockCounts, StockStatus,
    LOW_STOCK_THRESHOLD, NO_IMAGE,
};
pub use product::{NewReview, Product, ProductCard, ProductDetail, Review, PLACEHOLDER_IMAGE};
