//! Authentication for the storefront.
//!
//! Provides roles and permissions, the demo credential table, session
//! persistence on top of the local store, and the page access guard.

mod credentials;
mod error;
mod guard;
mod role;
mod session;

pub use credentials::{validate_new_password, Account, CredentialTable, Registration, MIN_PASSWORD_LEN};
pub use error::AuthError;
pub use guard::{hidden_nav_items, login_url, normalize_path, GuardDecision, RouteGuard};
pub use role::{Permission, Role};
pub use session::{AuthState, CustomerProfile, SessionStore, UserSession};
