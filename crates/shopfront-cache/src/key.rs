//! Fixed storage keys of the browser profile.

use std::fmt;

/// A key under which the storefront persists state.
///
/// The set is closed: every page of the storefront reads and writes these
/// same names, so they double as the on-disk field names of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Cart line items (JSON array).
    Cart,
    /// Locally known orders (JSON array).
    Orders,
    /// Profile of the logged-in customer.
    User,
    /// The single active session.
    UserSession,
    /// Wishlisted products.
    Wishlist,
    /// Saved shipping addresses.
    Addresses,
    /// UI language.
    Language,
    /// UI theme.
    Theme,
    /// Contact form submissions saved while the backend was unreachable.
    ContactMessages,
    /// Guest identifier used by the chat assistant.
    UserId,
    /// Bearer token returned by a remote login.
    AuthToken,
    /// Back-office product table kept while the backend is unreachable.
    Products,
}

impl StorageKey {
    /// Every key, in declaration order.
    pub const ALL: [StorageKey; 12] = [
        StorageKey::Cart,
        StorageKey::Orders,
        StorageKey::User,
        StorageKey::UserSession,
        StorageKey::Wishlist,
        StorageKey::Addresses,
        StorageKey::Language,
        StorageKey::Theme,
        StorageKey::ContactMessages,
        StorageKey::UserId,
        StorageKey::AuthToken,
        StorageKey::Products,
    ];

    /// The key as written to the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Cart => "cart",
            StorageKey::Orders => "orders",
            StorageKey::User => "user",
            StorageKey::UserSession => "userSession",
            StorageKey::Wishlist => "wishlist",
            StorageKey::Addresses => "addresses",
            StorageKey::Language => "language",
            StorageKey::Theme => "theme",
            StorageKey::ContactMessages => "contactMessages",
            StorageKey::UserId => "userId",
            StorageKey::AuthToken => "authToken",
            StorageKey::Products => "products",
        }
    }

    /// Look up a key by its stored name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
