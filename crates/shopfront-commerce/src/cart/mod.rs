//! Shopping cart module.
//!
//! Contains the cart lines, coupon codes and checkout pricing.

mod cart;
mod coupon;
mod pricing;

pub use cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
pub use coupon::{demo_coupons, find_coupon, Coupon, CouponStatus, CouponValidation, DiscountType};
pub use pricing::{CheckoutSummary, FREE_SHIPPING_THRESHOLD, STANDARD_SHIPPING, TAX_RATE_PERCENT};
