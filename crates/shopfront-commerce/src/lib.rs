//! Storefront domain types and logic.
//!
//! This crate holds everything the storefront pages compute locally:
//!
//! - **Catalog**: Products, product cards, details, reviews, stock levels
//! - **Cart**: Cart lines, coupon codes, checkout pricing
//! - **Checkout**: Checkout form, addresses, orders
//! - **Search**: Listing filters, sort order, pagination
//! - **Fallback**: The fixed product sets shown when the backend is down
//!
//! # Example
//!
//! ```rust
//! use shopfront_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! let headphones = ProductCard::demo(1, "Wireless Headphones", "Electronics", 2999, "Headphones");
//! cart.add(&headphones, 2).unwrap();
//!
//! let summary = cart.summary();
//! assert_eq!(summary.subtotal, Money::taka(5998));
//! assert_eq!(summary.shipping_label(), "FREE");
//! ```

pub mod error;
pub mod fallback;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        InventoryFilter, NewReview, Product, ProductCard, ProductDetail, ProductDraft, Review,
        StockCounts, StockStatus,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem, CheckoutSummary, Coupon, CouponValidation, DiscountType};

    // Checkout
    pub use crate::checkout::{
        CheckoutForm, Order, OrderFilter, OrderRequest, OrderStatus, PaymentMethod, SavedAddress,
        ShippingAddress,
    };

    // Search
    pub use crate::search::{ListingFilters, Page, Pagination, PriceRange, SortOption};
}
