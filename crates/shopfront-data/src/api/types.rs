//! Payloads of the backend REST API that have no home in the domain crate.

use serde::{Deserialize, Serialize};
use shopfront_commerce::checkout::OrderStatus;
use shopfront_commerce::ids::{CustomerId, OrderId};
use shopfront_commerce::money::{self, Money};

/// A list endpoint's payload: either a bare array or a Spring page object.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Listing<T> {
    Page {
        content: Vec<T>,
        #[serde(default, rename = "totalElements")]
        total_elements: Option<u64>,
    },
    Items(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Page { content, .. } => content,
            Listing::Items(items) => items,
        }
    }
}

/// Order counters from `GET /orders/stats`.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderStats {
    pub total: u64,
    pub pending: u64,
    pub processing: u64,
    pub shipped: u64,
    pub delivered: u64,
    pub today: u64,
}

/// Reply to `POST /orders`. Only the id is used.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CreatedOrder {
    #[serde(default)]
    pub id: Option<OrderId>,
}

/// An order as the back office stores it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackendOrder {
    pub id: OrderId,
    /// Who placed it; absent for guest checkouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default, with = "money::decimal")]
    pub total_amount: Money,
    #[serde(default, with = "money::decimal")]
    pub discount_amount: Money,
    #[serde(default, with = "money::decimal::option")]
    pub final_amount: Option<Money>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl BackendOrder {
    /// Amount charged: the final amount when present, else the total.
    pub fn amount(&self) -> Money {
        self.final_amount.unwrap_or(self.total_amount)
    }
}

/// A customer record.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Reply to login and registration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    /// Role name, when the backend sends one.
    #[serde(default)]
    pub role: Option<String>,
}

/// The contact form.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    /// ISO-8601 time the form was sent.
    #[serde(default)]
    pub timestamp: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email address".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("Message is required".to_string());
        }
        Ok(())
    }
}
