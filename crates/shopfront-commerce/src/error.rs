//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in e-commerce operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// No cart line at the given position.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(usize),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Order status change that the storefront may not perform.
    #[error("Cannot change order status from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Unknown coupon code.
    #[error("Invalid coupon code: {0}")]
    InvalidCoupon(String),

    /// Coupon exists but does not apply to this purchase.
    #[error("Coupon {code} not applicable: {reason}")]
    CouponNotApplicable { code: String, reason: String },

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
