//! Roles and the permissions each one grants.

use crate::AuthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A shopper.
    #[default]
    Customer,
    /// Store staff with back-office access to products and orders.
    Salesman,
    /// Store administrator.
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Customer, Role::Salesman, Role::Admin];

    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Salesman => "salesman",
            Role::Admin => "admin",
        }
    }

    /// Label shown in the admin header.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Salesman => "Salesman",
            Role::Admin => "Administrator",
        }
    }

    /// Dashboard a user of this role lands on, relative to a page one
    /// directory below the site root.
    pub fn dashboard_url(&self) -> &'static str {
        match self {
            Role::Admin | Role::Salesman => "../admin/dashboard.html",
            Role::Customer => "../customer/dashboard.html",
        }
    }

    /// Whether the role works in the back office.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Salesman)
    }

    /// Permissions granted to this role.
    pub fn permissions(&self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Role::Admin => &[
                ViewDashboard,
                ViewAnalytics,
                ManageProducts,
                ManageOrders,
                ManageCustomers,
                ManageCoupons,
                ManageSettings,
                ViewReports,
                ExportData,
            ],
            Role::Salesman => &[ViewDashboard, ManageProducts, ManageOrders, ViewCustomers],
            Role::Customer => &[
                ViewProducts,
                PlaceOrders,
                ViewOrders,
                ManageWishlist,
                ManageProfile,
            ],
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" => Ok(Role::Customer),
            "salesman" => Ok(Role::Salesman),
            "admin" => Ok(Role::Admin),
            other => Err(AuthError::UnknownRole(other.to_string())),
        }
    }
}

/// A feature a role may be allowed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewDashboard,
    ViewAnalytics,
    ManageProducts,
    ManageOrders,
    ManageCustomers,
    ViewCustomers,
    ManageCoupons,
    ManageSettings,
    ViewReports,
    ExportData,
    ViewProducts,
    PlaceOrders,
    ViewOrders,
    ManageWishlist,
    ManageProfile,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "view_dashboard",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ManageProducts => "manage_products",
            Permission::ManageOrders => "manage_orders",
            Permission::ManageCustomers => "manage_customers",
            Permission::ViewCustomers => "view_customers",
            Permission::ManageCoupons => "manage_coupons",
            Permission::ManageSettings => "manage_settings",
            Permission::ViewReports => "view_reports",
            Permission::ExportData => "export_data",
            Permission::ViewProducts => "view_products",
            Permission::PlaceOrders => "place_orders",
            Permission::ViewOrders => "view_orders",
            Permission::ManageWishlist => "manage_wishlist",
            Permission::ManageProfile => "manage_profile",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.trim().to_string())).map_err(|_| ())
    }
}
