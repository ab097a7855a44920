//! HTTP client for the storefront backend.
//!
//! Provides a small builder API over a pluggable [`Transport`], typed
//! resources for the REST backend in [`api`], and the fallback decision
//! types [`Fetched`] and [`Submission`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_data::{ApiClient, Fetched};
//! use shopfront_commerce::fallback;
//!
//! let api = ApiClient::new("http://localhost:8080/api")?;
//!
//! // Live data when the backend answers, the built-in set otherwise
//! let featured = Fetched::resolve(
//!     api.products().featured().await.map(|p| p.iter().map(Into::into).collect()),
//!     "featured products",
//!     fallback::featured_products,
//! );
//! ```

pub mod api;
mod client;
mod error;
mod fallback;
mod request;
mod response;
mod transport;

pub use api::ApiClient;
pub use client::{ClientRequestBuilder, FetchClient};
pub use error::FetchError;
pub use fallback::{Fetched, Submission};
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use transport::{OfflineTransport, ReqwestTransport, Transport};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiClient, FetchClient, FetchError, Fetched, Method, Response, Submission};
}
