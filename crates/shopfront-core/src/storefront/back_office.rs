//! Back-office actions: the product table, customers, coupons and orders.
//!
//! Every action needs a logged-in staff session with the right permission.
//! Reads fall back the way the shop pages do. Product edits made while the
//! backend is down are kept in the profile's own product table, which starts
//! out as the demo catalog.

use super::{Outcome, Storefront};
use crate::admin::{demo_recent_orders, AdminOrder};
use crate::error::Result;
use chrono::{Local, NaiveDate};
use shopfront_auth::{AuthError, Permission, UserSession};
use shopfront_cache::StorageKey;
use shopfront_commerce::cart::Coupon;
use shopfront_commerce::catalog::{duplicate_product, products_csv, Product, ProductDraft, StockCounts};
use shopfront_commerce::checkout::OrderStatus;
use shopfront_commerce::fallback;
use shopfront_commerce::ids::ProductId;
use shopfront_commerce::CommerceError;
use shopfront_data::api::{Customer, OrderStats};
use shopfront_data::{Fetched, Submission};
use std::collections::BTreeMap;

pub const PRODUCT_UPDATED: &str = "Product updated successfully!";
pub const PRODUCT_DELETED: &str = "Product deleted successfully!";
pub const PRODUCTS_EXPORTED: &str = "Products exported successfully!";

/// "Product added successfully! ID: 2601070001"
pub fn product_added_notice(id: ProductId) -> String {
    format!("Product added successfully! ID: {}", id)
}

/// "Product duplicated! New ID: 2601070002"
pub fn product_duplicated_notice(id: ProductId) -> String {
    format!("Product duplicated! New ID: {}", id)
}

impl Storefront {
    /// The logged-in session, if it holds one of `permissions`.
    fn authorize(&self, permissions: &[Permission]) -> Result<UserSession> {
        let session = self.sessions.current().ok_or(AuthError::NotLoggedIn)?;
        if !permissions.iter().any(|p| session.has_permission(*p)) {
            tracing::warn!(user = %session.username, role = %session.role, "back-office action refused");
            return Err(AuthError::InsufficientPermissions.into());
        }
        Ok(session)
    }

    // ---- Products ----

    fn local_products(&self) -> Vec<Product> {
        match self.store.try_read(StorageKey::Products) {
            Ok(Some(products)) => products,
            _ => fallback::managed_products(),
        }
    }

    fn edit_local_products<T>(&self, edit: impl FnOnce(&mut Vec<Product>) -> T) -> Result<T> {
        let mut products = self.local_products();
        let edited = edit(&mut products);
        self.store.write(StorageKey::Products, &products)?;
        Ok(edited)
    }

    /// The product table: the backend catalog, or the local one.
    pub async fn managed_products(&self) -> Result<Fetched<Vec<Product>>> {
        self.authorize(&[Permission::ManageProducts])?;
        Ok(Fetched::resolve(
            self.api_for_session().products().all().await,
            "managed products",
            || self.local_products(),
        ))
    }

    async fn managed_product(&self, id: ProductId) -> Result<(Product, Vec<Product>)> {
        let products = self.managed_products().await?.into_inner();
        let product = products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        Ok((product, products))
    }

    /// Stock stat cards above the product table.
    pub async fn inventory_stats(&self) -> Result<Fetched<StockCounts>> {
        Ok(self.managed_products().await?.map(|p| StockCounts::tally(&p)))
    }

    pub async fn export_products_csv(&self) -> Result<String> {
        let products = self.managed_products().await?;
        Ok(products_csv(products.get()))
    }

    /// Create a product from the form under the next catalog id for today.
    pub async fn add_product(&self, draft: ProductDraft) -> Result<Outcome<Product>> {
        self.authorize(&[Permission::ManageProducts])?;
        draft.validate()?;
        let known = self.managed_products().await?.into_inner();
        let today = Local::now().date_naive();
        let id = next_product_id(today, &known)?;
        self.save_new_product(draft.into_product(id, today), "add product").await
    }

    /// Save a copy of a product under the next catalog id for today.
    pub async fn duplicate_product(&self, id: ProductId) -> Result<Outcome<Product>> {
        let (original, known) = self.managed_product(id).await?;
        let today = Local::now().date_naive();
        let copy = duplicate_product(&original, next_product_id(today, &known)?, today);
        self.save_new_product(copy, "duplicate product").await
    }

    async fn save_new_product(&self, product: Product, form: &str) -> Result<Outcome<Product>> {
        let submission =
            Submission::resolve(self.api_for_session().products().create(&product).await, form);
        let saved = match &submission {
            Submission::Confirmed(saved) => saved.clone(),
            Submission::DemoMode => {
                self.edit_local_products(|products| products.push(product.clone()))?;
                product
            }
        };
        tracing::info!(product = %saved.id, demo = submission.is_demo(), "product created");
        Ok(Outcome::new(saved, &submission))
    }

    /// Overwrite a product with the form. Images stay unless new ones are given.
    pub async fn update_product(&self, id: ProductId, draft: ProductDraft) -> Result<Outcome<Product>> {
        self.authorize(&[Permission::ManageProducts])?;
        draft.validate()?;
        let (mut product, _) = self.managed_product(id).await?;
        draft.apply_to(&mut product);

        let submission = Submission::resolve(
            self.api_for_session().products().update(id, &product).await,
            "update product",
        );
        let saved = match &submission {
            Submission::Confirmed(saved) => saved.clone(),
            Submission::DemoMode => {
                self.edit_local_products(|products| {
                    match products.iter_mut().find(|p| p.id == id) {
                        Some(slot) => *slot = product.clone(),
                        None => products.push(product.clone()),
                    }
                })?;
                product
            }
        };
        tracing::info!(product = %id, demo = submission.is_demo(), "product updated");
        Ok(Outcome::new(saved, &submission))
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<Outcome<()>> {
        self.authorize(&[Permission::ManageProducts])?;
        let submission = Submission::resolve(
            self.api_for_session().products().delete(id).await,
            "delete product",
        );
        if submission.is_demo() {
            let removed = self.edit_local_products(|products| {
                let before = products.len();
                products.retain(|p| p.id != id);
                before != products.len()
            })?;
            if !removed {
                return Err(CommerceError::ProductNotFound(id.to_string()).into());
            }
        }
        tracing::info!(product = %id, demo = submission.is_demo(), "product deleted");
        Ok(Outcome::new((), &submission))
    }

    // ---- Customers ----

    /// Customers known to the backend, or the ones who ordered from this
    /// profile.
    pub async fn customers(&self) -> Result<Fetched<Vec<Customer>>> {
        self.authorize(&[Permission::ViewCustomers, Permission::ManageCustomers])?;
        Ok(Fetched::resolve(
            self.api_for_session().customers().all().await,
            "customers",
            || self.local_customers(),
        ))
    }

    pub async fn search_customers(&self, query: &str) -> Result<Fetched<Vec<Customer>>> {
        self.authorize(&[Permission::ViewCustomers, Permission::ManageCustomers])?;
        let query = query.trim();
        Ok(Fetched::resolve(
            self.api_for_session().customers().search(query).await,
            "customer search",
            || {
                let needle = query.to_lowercase();
                self.local_customers()
                    .into_iter()
                    .filter(|c| {
                        c.name.to_lowercase().contains(&needle)
                            || c.email.to_lowercase().contains(&needle)
                    })
                    .collect()
            },
        ))
    }

    fn local_customers(&self) -> Vec<Customer> {
        let mut by_email = BTreeMap::new();
        for order in self.orders() {
            let shipping = order.form.shipping;
            by_email.entry(shipping.email.clone()).or_insert_with(|| Customer {
                id: None,
                name: format!("{} {}", shipping.first_name, shipping.last_name)
                    .trim()
                    .to_string(),
                email: shipping.email,
                phone: Some(shipping.phone).filter(|p| !p.is_empty()),
                address: Some(format!("{}, {}", shipping.address, shipping.city)),
            });
        }
        by_email.into_values().collect()
    }

    // ---- Coupons ----

    /// Coupons currently usable, from the backend or the built-in set.
    pub async fn active_coupons(&self) -> Result<Fetched<Vec<Coupon>>> {
        self.authorize(&[Permission::ManageCoupons])?;
        let today = Local::now().date_naive();
        Ok(Fetched::resolve(
            self.api_for_session().coupons().active().await,
            "active coupons",
            || {
                self.coupons
                    .iter()
                    .filter(|c| c.is_valid_on(today))
                    .cloned()
                    .collect()
            },
        ))
    }

    // ---- Orders ----

    /// Every order, as rows of the back-office table.
    pub async fn admin_orders(&self) -> Result<Fetched<Vec<AdminOrder>>> {
        self.authorize(&[Permission::ManageOrders])?;
        let result = self.api_for_session().orders().all().await;
        Ok(Fetched::resolve(
            result.map(|orders| orders.iter().map(AdminOrder::from).collect()),
            "orders",
            demo_recent_orders,
        ))
    }

    /// The dashboard's recent-orders table.
    pub async fn recent_admin_orders(&self) -> Result<Fetched<Vec<AdminOrder>>> {
        self.authorize(&[Permission::ViewDashboard])?;
        let result = self.api_for_session().orders().recent().await;
        Ok(Fetched::resolve(
            result.map(|orders| orders.iter().map(AdminOrder::from).collect()),
            "recent orders",
            demo_recent_orders,
        ))
    }

    /// Orders of one customer; offline, the local orders shipped to their
    /// email address.
    pub async fn customer_orders(&self, customer: &Customer) -> Result<Fetched<Vec<AdminOrder>>> {
        self.authorize(&[Permission::ManageOrders])?;
        let local = || -> Vec<AdminOrder> {
            self.orders()
                .iter()
                .filter(|o| o.form.shipping.email.eq_ignore_ascii_case(&customer.email))
                .map(AdminOrder::from)
                .collect()
        };
        let Some(id) = customer.id else {
            return Ok(Fetched::Fallback(local()));
        };
        let result = self.api_for_session().orders().by_customer(id).await;
        Ok(Fetched::resolve(
            result.map(|orders| orders.iter().map(AdminOrder::from).collect()),
            "customer orders",
            local,
        ))
    }

    /// Order counters; offline, counted from the local orders.
    pub async fn order_stats(&self) -> Result<Fetched<OrderStats>> {
        self.authorize(&[Permission::ManageOrders])?;
        Ok(Fetched::resolve(
            self.api_for_session().orders().stats().await,
            "order stats",
            || {
                let today = Local::now().date_naive();
                let orders = self.orders();
                let count = |status| orders.iter().filter(|o| o.status == status).count() as u64;
                OrderStats {
                    total: orders.len() as u64,
                    pending: count(OrderStatus::Pending),
                    processing: count(OrderStatus::Processing),
                    shipped: count(OrderStatus::Shipped),
                    delivered: count(OrderStatus::Delivered),
                    today: orders
                        .iter()
                        .filter(|o| o.date.with_timezone(&Local).date_naive() == today)
                        .count() as u64,
                }
            },
        ))
    }
}

fn next_product_id(today: NaiveDate, known: &[Product]) -> Result<ProductId> {
    ProductId::next_for_date(today, known.iter().map(|p| &p.id)).ok_or_else(|| {
        CommerceError::ValidationError(format!("No product ids left for {}", today)).into()
    })
}
