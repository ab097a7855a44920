//! Page access rules.

use crate::role::Role;
use crate::session::AuthState;
use serde::Serialize;

/// What to do with a page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Render the page.
    Allow,
    /// Nobody is logged in.
    RedirectToLogin { url: String },
    /// Logged in, but the role may not see this page.
    RedirectToDashboard { url: String },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    /// The redirect target, if any.
    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin { url } | GuardDecision::RedirectToDashboard { url } => {
                Some(url)
            }
        }
    }

    /// The alert the page shows before redirecting.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin { .. } => Some("Please login to access this page"),
            GuardDecision::RedirectToDashboard { .. } => {
                Some("Access Denied: You do not have permission to view this page")
            }
        }
    }
}

const STAFF: &[Role] = &[Role::Admin, Role::Salesman];
const ADMIN: &[Role] = &[Role::Admin];
const CUSTOMER: &[Role] = &[Role::Customer];

/// Pages that require a role, keyed by path relative to the site root.
const PAGE_ROLES: &[(&str, &[Role])] = &[
    ("/admin/dashboard.html", STAFF),
    ("/admin/products.html", STAFF),
    ("/admin/orders.html", STAFF),
    ("/admin/customers.html", ADMIN),
    ("/admin/coupons.html", ADMIN),
    ("/admin/analytics.html", ADMIN),
    ("/admin/settings.html", ADMIN),
    ("/customer/dashboard.html", CUSTOMER),
    ("/customer/wishlist.html", CUSTOMER),
    ("/customer/settings.html", CUSTOMER),
    ("/profile.html", CUSTOMER),
    ("/orders.html", CUSTOMER),
    ("/cart.html", CUSTOMER),
    ("/checkout.html", CUSTOMER),
];

/// Admin nav entries a salesman does not see.
const SALESMAN_HIDDEN_NAV: &[&str] = &[
    "customers.html",
    "coupons.html",
    "analytics.html",
    "settings.html",
];

/// Decides page access from the static rule table.
///
/// Paths without a rule are public.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    pub fn new() -> Self {
        Self
    }

    /// Roles allowed on a page, or `None` for a public page.
    pub fn required_roles(&self, path: &str) -> Option<&'static [Role]> {
        let key = normalize_path(path);
        PAGE_ROLES
            .iter()
            .find(|(page, _)| *page == key)
            .map(|(_, roles)| *roles)
    }

    pub fn check(&self, path: &str, state: &AuthState) -> GuardDecision {
        let Some(roles) = self.required_roles(path) else {
            return GuardDecision::Allow;
        };
        match state.session() {
            None => {
                tracing::debug!(path, "protected page requested without a session");
                GuardDecision::RedirectToLogin {
                    url: login_url(path).to_string(),
                }
            }
            Some(session) if roles.contains(&session.role) => GuardDecision::Allow,
            Some(session) => {
                tracing::debug!(path, role = %session.role, "role not allowed on page");
                GuardDecision::RedirectToDashboard {
                    url: session.role.dashboard_url().to_string(),
                }
            }
        }
    }
}

/// Strip everything up to the site root folder, if the path has one.
pub fn normalize_path(path: &str) -> &str {
    if path.contains("/frontend/") {
        path.split("/frontend").nth(1).unwrap_or(path)
    } else {
        path
    }
}

/// Login page relative to the requested page.
pub fn login_url(path: &str) -> &'static str {
    if path.contains("/admin/") {
        "../login.html"
    } else {
        "login.html"
    }
}

/// Admin nav entries to hide for a role.
pub fn hidden_nav_items(role: Role) -> &'static [&'static str] {
    match role {
        Role::Salesman => SALESMAN_HIDDEN_NAV,
        Role::Admin | Role::Customer => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserSession;
    use shopfront_commerce::ids::UserId;

    fn as_role(role: Role) -> AuthState {
        AuthState::Authenticated(UserSession::new(UserId::new(1), "u@example.com", "U", role))
    }

    #[test]
    fn test_public_pages_are_allowed() {
        let guard = RouteGuard::new();
        assert!(guard.check("/index.html", &AuthState::Anonymous).is_allowed());
        assert!(guard.check("/shop/frontend/products.html", &AuthState::Anonymous).is_allowed());
    }

    #[test]
    fn test_anonymous_redirects_to_login() {
        let guard = RouteGuard::new();
        assert_eq!(
            guard.check("/admin/orders.html", &AuthState::Anonymous),
            GuardDecision::RedirectToLogin {
                url: "../login.html".into()
            }
        );
        let decision = guard.check("/cart.html", &AuthState::Anonymous);
        assert_eq!(decision.redirect_url(), Some("login.html"));
        assert_eq!(decision.message(), Some("Please login to access this page"));
    }

    #[test]
    fn test_role_mismatch_redirects_to_dashboard() {
        let guard = RouteGuard::new();
        assert_eq!(
            guard.check("/admin/coupons.html", &as_role(Role::Salesman)),
            GuardDecision::RedirectToDashboard {
                url: "../admin/dashboard.html".into()
            }
        );
        assert_eq!(
            guard
                .check("/admin/dashboard.html", &as_role(Role::Customer))
                .redirect_url(),
            Some("../customer/dashboard.html")
        );
        assert!(guard.check("/admin/orders.html", &as_role(Role::Salesman)).is_allowed());
        assert!(guard.check("/checkout.html", &as_role(Role::Customer)).is_allowed());
        assert!(!guard.check("/checkout.html", &as_role(Role::Admin)).is_allowed());
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(normalize_path("/home/me/site/frontend/admin/orders.html"), "/admin/orders.html");
        assert_eq!(normalize_path("/admin/orders.html"), "/admin/orders.html");
        let guard = RouteGuard::new();
        assert_eq!(
            guard.required_roles("/srv/frontend/admin/analytics.html"),
            Some(ADMIN)
        );
    }

    #[test]
    fn test_hidden_nav() {
        assert_eq!(hidden_nav_items(Role::Salesman).len(), 4);
        assert!(hidden_nav_items(Role::Salesman).contains(&"coupons.html"));
        assert!(hidden_nav_items(Role::Admin).is_empty());
    }
}
