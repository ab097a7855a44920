//! The storefront as one object.
//!
//! [`Storefront`] ties the profile store, the backend client, sessions and
//! the messaging widget together and exposes the page actions: browsing,
//! cart, checkout, orders, accounts and chat. [`render`] turns its data into
//! HTML fragments.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_core::{Storefront, StorefrontConfig};
//!
//! let config = StorefrontConfig::discover(&std::env::current_dir()?).with_env_overrides();
//! let mut shop = Storefront::new(&config)?;
//!
//! let featured = shop.featured_products().await;
//! shop.add_to_cart(&featured.get()[0], 1)?;
//! println!("{}", shopfront_core::render::render_cart_summary(&shop.cart_summary()));
//! ```

pub mod admin;
pub mod config;
mod error;
pub mod preferences;
pub mod profile;
pub mod render;
mod storefront;

pub use config::{generate_default_config, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use preferences::{Language, Preferences, Theme};
pub use profile::{
    AccountBook, ProfileDashboard, WishlistItem, PASSWORD_CHANGED, PROFILE_UPDATED,
    RECENT_ORDER_COUNT,
};
pub use storefront::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Outcome, Storefront, StorefrontConfig, StorefrontError};
    pub use shopfront_auth::{GuardDecision, Registration, Role};
    pub use shopfront_commerce::prelude::*;
    pub use shopfront_data::Fetched;
}
