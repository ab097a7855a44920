//! Error types for the storefront controller.

use thiserror::Error;

/// Errors that reach the page.
///
/// Backend failures are mostly absorbed by the fallback decision types, so
/// what remains here is validation the shopper has to fix, local storage
/// trouble, and the few submissions that have no offline mode.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Checkout with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// A form field failed validation.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Cache(#[from] shopfront_cache::CacheError),

    #[error(transparent)]
    Commerce(#[from] shopfront_commerce::CommerceError),

    #[error(transparent)]
    Auth(#[from] shopfront_auth::AuthError),

    #[error(transparent)]
    Fetch(#[from] shopfront_data::FetchError),

    #[error(transparent)]
    Messaging(#[from] shopfront_messaging::MessagingError),

    /// Configuration could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StorefrontError {
    /// Whether the shopper can fix this by changing the form.
    pub fn is_user_error(&self) -> bool {
        match self {
            StorefrontError::EmptyCart | StorefrontError::Validation(_) => true,
            StorefrontError::Auth(e) => e.is_validation() || e.is_auth_failure(),
            StorefrontError::Commerce(e) => !matches!(
                e,
                shopfront_commerce::CommerceError::ProductNotFound(_)
                    | shopfront_commerce::CommerceError::OrderNotFound(_)
            ),
            _ => false,
        }
    }
}

impl From<std::io::Error> for StorefrontError {
    fn from(err: std::io::Error) -> Self {
        StorefrontError::Config(err.to_string())
    }
}

pub type Result<T, E = StorefrontError> = std::result::Result<T, E>;
