//! Order types.

use crate::cart::{Cart, CartItem, CheckoutSummary};
use crate::checkout::{PaymentMethod, ShippingAddress};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::{self, Money};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status.
///
/// The storefront only ever moves an order from `Pending` to `Cancelled`;
/// every other transition belongs to the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    #[serde(alias = "PENDING", alias = "pending")]
    Pending,
    /// Order being prepared.
    #[serde(alias = "PROCESSING", alias = "processing")]
    Processing,
    /// Order shipped.
    #[serde(alias = "SHIPPED", alias = "shipped")]
    Shipped,
    /// Order delivered.
    #[serde(alias = "DELIVERED", alias = "delivered")]
    Delivered,
    /// Order cancelled.
    #[serde(alias = "CANCELLED", alias = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Bootstrap colour of the status badge.
    pub fn badge_color(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "warning",
            OrderStatus::Processing => "info",
            OrderStatus::Shipped => "primary",
            OrderStatus::Delivered => "success",
            OrderStatus::Cancelled => "danger",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the customer may cancel the order.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Parse a status name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The checkout form as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[serde(flatten)]
    pub shipping: ShippingAddress,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub order_notes: String,
}

/// Body of `POST /orders`: the form plus the cart lines and total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(flatten)]
    pub form: CheckoutForm,
    pub items: Vec<CartItem>,
    #[serde(with = "money::decimal")]
    pub total: Money,
}

impl OrderRequest {
    /// Validate the form and capture the cart contents.
    pub fn new(form: CheckoutForm, cart: &Cart, summary: &CheckoutSummary) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        form.shipping.validate()?;
        Ok(Self {
            form,
            items: cart.items().to_vec(),
            total: summary.total,
        })
    }
}

/// A placed order, as kept in the local order history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub date: DateTime<Utc>,
    #[serde(with = "money::decimal")]
    pub total: Money,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(flatten)]
    pub form: CheckoutForm,
}

impl Order {
    /// Record a submitted request under `id`, placed now.
    pub fn place(id: OrderId, request: OrderRequest) -> Self {
        Self::place_at(id, request, Utc::now())
    }

    /// Record a submitted request under `id`, placed at `date`.
    pub fn place_at(id: OrderId, request: OrderRequest, date: DateTime<Utc>) -> Self {
        Self {
            id,
            date,
            total: request.total,
            status: OrderStatus::Pending,
            items: request.items,
            form: request.form,
        }
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cancel a pending order.
    pub fn cancel(&mut self) -> Result<(), CommerceError> {
        if !self.status.can_cancel() {
            return Err(CommerceError::InvalidStatusTransition {
                from: self.status.display_name().to_string(),
                to: OrderStatus::Cancelled.display_name().to_string(),
            });
        }
        self.status = OrderStatus::Cancelled;
        Ok(())
    }
}

/// Filter for the order history page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    /// Only orders placed within this many days.
    pub within_days: Option<i64>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order, now: DateTime<Utc>) -> bool {
        if self.status.is_some_and(|status| order.status != status) {
            return false;
        }
        if let Some(days) = self.within_days {
            if order.date < now - Duration::days(days) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, orders: &'a [Order], now: DateTime<Utc>) -> Vec<&'a Order> {
        orders.iter().filter(|o| self.matches(o, now)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCard;
    use chrono::TimeZone;

    fn form() -> CheckoutForm {
        CheckoutForm {
            shipping: ShippingAddress {
                first_name: "Nusrat".to_string(),
                last_name: "Jahan".to_string(),
                email: "nusrat@example.com".to_string(),
                phone: "01811000000".to_string(),
                address: "12 Lake Road".to_string(),
                city: "Chattogram".to_string(),
                division: "Chattogram".to_string(),
                ..Default::default()
            },
            payment_method: PaymentMethod::Bkash,
            order_notes: "Call before delivery".to_string(),
        }
    }

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(&ProductCard::demo(2, "Smart Watch", "Electronics", 4999, "Watch"), 1)
            .unwrap();
        cart
    }

    fn placed_at(date: DateTime<Utc>) -> Order {
        let cart = cart();
        let request = OrderRequest::new(form(), &cart, &cart.summary()).unwrap();
        Order::place_at(OrderId::from(1), request, date)
    }

    #[test]
    fn test_request_requires_items() {
        let empty = Cart::new();
        assert_eq!(
            OrderRequest::new(form(), &empty, &empty.summary()),
            Err(CommerceError::EmptyCart)
        );
    }

    #[test]
    fn test_request_validates_form() {
        let mut bad = form();
        bad.shipping.phone.clear();
        let cart = cart();
        assert!(matches!(
            OrderRequest::new(bad, &cart, &cart.summary()),
            Err(CommerceError::ValidationError(_))
        ));
    }

    #[test]
    fn test_place_uses_summary_total() {
        let order = placed_at(Utc::now());
        // 4999 + free shipping + 249.95 tax
        assert_eq!(order.total.amount_cents, 524895);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 1);
    }

    #[test]
    fn test_cancel_only_pending() {
        let mut order = placed_at(Utc::now());
        order.cancel().unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert!(order.cancel().is_err());

        let mut shipped = placed_at(Utc::now());
        shipped.status = OrderStatus::Shipped;
        assert_eq!(
            shipped.cancel(),
            Err(CommerceError::InvalidStatusTransition {
                from: "Shipped".to_string(),
                to: "Cancelled".to_string(),
            })
        );
    }

    #[test]
    fn test_stored_shape_is_flat() {
        let order = placed_at(Utc.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap());
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["status"], "Pending");
        assert_eq!(value["firstName"], "Nusrat");
        assert_eq!(value["paymentMethod"], "bkash");
        assert_eq!(value["orderNotes"], "Call before delivery");
        assert!(value["date"].as_str().unwrap().starts_with("2026-02-01T09:30:00"));

        let back: Order = serde_json::from_value(value).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_backend_status_names() {
        let status: OrderStatus = serde_json::from_str("\"SHIPPED\"").unwrap();
        assert_eq!(status, OrderStatus::Shipped);
        assert_eq!(OrderStatus::parse("delivered"), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Processing.badge_color(), "info");
    }

    #[test]
    fn test_filter() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let recent = placed_at(now - Duration::days(3));
        let mut old = placed_at(now - Duration::days(45));
        old.status = OrderStatus::Delivered;
        let orders = vec![recent, old];

        let last_week = OrderFilter { status: None, within_days: Some(7) };
        assert_eq!(last_week.apply(&orders, now).len(), 1);

        let delivered = OrderFilter { status: Some(OrderStatus::Delivered), within_days: None };
        assert_eq!(delivered.apply(&orders, now)[0].status, OrderStatus::Delivered);

        assert_eq!(OrderFilter::default().apply(&orders, now).len(), 2);
    }
}
