//! Checkout module.
//!
//! Contains the checkout form, addresses, payment methods and orders.

mod address;
mod order;

pub use address::{PaymentMethod, SavedAddress, ShippingAddress};
pub use order::{CheckoutForm, Order, OrderFilter, OrderRequest, OrderStatus};
