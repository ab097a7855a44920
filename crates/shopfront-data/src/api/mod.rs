//! Typed access to the storefront REST backend.
//!
//! Resources mirror the backend's controllers. Every call fails with a
//! [`FetchError`]; deciding what the page shows instead is left to the caller
//! (see [`Fetched`](crate::Fetched)).
//!
//! ```rust,ignore
//! let api = ApiClient::new("http://localhost:8080/api")?;
//! let featured = api.products().featured().await?;
//! ```

mod types;

pub use types::{
    AuthResponse, BackendOrder, ContactMessage, CreatedOrder, Customer, Listing, LoginRequest,
    OrderStats, RegisterRequest,
};

use crate::{FetchClient, FetchError, Transport};
use serde::Serialize;
use shopfront_commerce::cart::{Coupon, CouponValidation};
use shopfront_commerce::catalog::{NewReview, Product, Review};
use shopfront_commerce::checkout::OrderRequest;
use shopfront_commerce::ids::{CustomerId, ProductId};
use shopfront_commerce::money::Money;
use std::sync::Arc;

/// Default backend location.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Client for the storefront backend.
#[derive(Clone)]
pub struct ApiClient {
    http: FetchClient,
}

impl ApiClient {
    /// Client over the default transport.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self::from_client(FetchClient::new()?.with_base_url(base_url)))
    }

    /// Client over a specific transport.
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self::from_client(FetchClient::with_transport(transport).with_base_url(base_url))
    }

    pub fn from_client(http: FetchClient) -> Self {
        Self { http }
    }

    /// The same client, sending `token` with every request.
    pub fn authenticated(&self, token: &str) -> Self {
        Self::from_client(self.http.clone().with_bearer_token(token))
    }

    pub fn http(&self) -> &FetchClient {
        &self.http
    }

    pub fn products(&self) -> Products<'_> {
        Products { http: &self.http }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { http: &self.http }
    }

    pub fn customers(&self) -> Customers<'_> {
        Customers { http: &self.http }
    }

    pub fn coupons(&self) -> Coupons<'_> {
        Coupons { http: &self.http }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { http: &self.http }
    }

    /// `POST /contact`.
    pub async fn contact(&self, message: &ContactMessage) -> Result<(), FetchError> {
        send_ok(self.http.post("/contact").json(message)?).await
    }

    /// `POST /newsletter/subscribe`.
    pub async fn newsletter_subscribe(&self, email: &str) -> Result<(), FetchError> {
        #[derive(Serialize)]
        struct Subscribe<'a> {
            email: &'a str,
        }
        send_ok(self.http.post("/newsletter/subscribe").json(&Subscribe { email })?).await
    }
}

async fn send_ok(request: crate::ClientRequestBuilder) -> Result<(), FetchError> {
    request.send().await?.error_for_status()?;
    Ok(())
}

/// `/products`.
pub struct Products<'a> {
    http: &'a FetchClient,
}

impl Products<'_> {
    pub async fn all(&self) -> Result<Vec<Product>, FetchError> {
        self.listing(self.http.get("/products")).await
    }

    /// First `size` products.
    pub async fn page(&self, size: usize) -> Result<Vec<Product>, FetchError> {
        let mut products = self.listing(self.http.get("/products").query("size", size)).await?;
        products.truncate(size);
        Ok(products)
    }

    pub async fn by_id(&self, id: ProductId) -> Result<Product, FetchError> {
        self.http.get_json(format!("/products/{}", id)).await
    }

    pub async fn featured(&self) -> Result<Vec<Product>, FetchError> {
        self.listing(self.http.get("/products/featured")).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Product>, FetchError> {
        self.listing(self.http.get("/products/search").query("q", query)).await
    }

    pub async fn by_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        let path = format!("/products/category/{}", urlencoding::encode(category));
        self.listing(self.http.get(path)).await
    }

    pub async fn top_rated(&self) -> Result<Vec<Product>, FetchError> {
        self.listing(self.http.get("/products/top-rated")).await
    }

    pub async fn discounted(&self) -> Result<Vec<Product>, FetchError> {
        self.listing(self.http.get("/products/discounted")).await
    }

    pub async fn create(&self, product: &Product) -> Result<Product, FetchError> {
        self.http.post_json("/products", product).await
    }

    pub async fn update(&self, id: ProductId, product: &Product) -> Result<Product, FetchError> {
        self.http
            .put(format!("/products/{}", id))
            .json(product)?
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    pub async fn delete(&self, id: ProductId) -> Result<(), FetchError> {
        send_ok(self.http.delete(format!("/products/{}", id))).await
    }

    pub async fn reviews(&self, id: ProductId) -> Result<Vec<Review>, FetchError> {
        self.listing(self.http.get(format!("/products/{}/reviews", id))).await
    }

    pub async fn submit_review(&self, review: &NewReview) -> Result<(), FetchError> {
        send_ok(
            self.http
                .post(format!("/products/{}/reviews", review.product_id))
                .json(review)?,
        )
        .await
    }

    async fn listing<T: serde::de::DeserializeOwned>(
        &self,
        request: crate::ClientRequestBuilder,
    ) -> Result<Vec<T>, FetchError> {
        let listing: Listing<T> = request.send().await?.error_for_status()?.json()?;
        Ok(listing.into_vec())
    }
}

/// `/orders`.
pub struct Orders<'a> {
    http: &'a FetchClient,
}

impl Orders<'_> {
    pub async fn all(&self) -> Result<Vec<BackendOrder>, FetchError> {
        self.http.get_json("/orders").await
    }

    pub async fn create(&self, order: &OrderRequest) -> Result<CreatedOrder, FetchError> {
        self.http.post_json("/orders", order).await
    }

    pub async fn by_customer(&self, customer: CustomerId) -> Result<Vec<BackendOrder>, FetchError> {
        self.http.get_json(format!("/orders/customer/{}", customer)).await
    }

    pub async fn recent(&self) -> Result<Vec<BackendOrder>, FetchError> {
        self.http.get_json("/orders/recent").await
    }

    pub async fn stats(&self) -> Result<OrderStats, FetchError> {
        self.http.get_json("/orders/stats").await
    }
}

/// `/customers`.
pub struct Customers<'a> {
    http: &'a FetchClient,
}

impl Customers<'_> {
    pub async fn all(&self) -> Result<Vec<Customer>, FetchError> {
        self.http.get_json("/customers").await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Customer>, FetchError> {
        self.http
            .get("/customers/search")
            .query("q", query)
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}

/// `/coupons`.
pub struct Coupons<'a> {
    http: &'a FetchClient,
}

impl Coupons<'_> {
    pub async fn active(&self) -> Result<Vec<Coupon>, FetchError> {
        self.http.get_json("/coupons/active").await
    }

    /// `POST /coupons/validate?code=..&amount=..`; an unusable code is a 400.
    pub async fn validate(&self, code: &str, amount: Money) -> Result<CouponValidation, FetchError> {
        self.http
            .post("/coupons/validate")
            .query("code", code)
            .query("amount", amount.display_amount())
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}

/// `/auth`.
pub struct Auth<'a> {
    http: &'a FetchClient,
}

impl Auth<'_> {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, FetchError> {
        self.http.post_json("/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, FetchError> {
        self.http.post_json("/auth/register", request).await
    }
}
