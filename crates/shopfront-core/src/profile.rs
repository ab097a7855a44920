//! The customer's account page: dashboard totals, wishlist, address book
//! and settings.

use crate::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use shopfront_auth::{validate_new_password, AuthError, CustomerProfile};
use shopfront_cache::{LocalStore, StorageKey};
use shopfront_commerce::catalog::ProductCard;
use shopfront_commerce::checkout::{Order, OrderStatus, SavedAddress};
use shopfront_commerce::ids::ProductId;
use shopfront_commerce::money::{self, Currency, Money};

/// How many orders the dashboard lists.
pub const RECENT_ORDER_COUNT: usize = 3;

pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const PASSWORD_CHANGED: &str = "Password changed successfully!";

/// A saved product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistItem {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "money::decimal")]
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&ProductCard> for WishlistItem {
    fn from(product: &ProductCard) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: Some(product.image.clone()),
        }
    }
}

/// Totals on the account overview tab.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDashboard {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub wishlist_count: usize,
    #[serde(with = "money::decimal")]
    pub total_spent: Money,
    pub recent_orders: Vec<Order>,
}

impl ProfileDashboard {
    pub fn compute(orders: &[Order], wishlist: &[WishlistItem]) -> Self {
        Self {
            total_orders: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            wishlist_count: wishlist.len(),
            total_spent: Money::sum(orders.iter().map(|o| &o.total), Currency::BDT),
            recent_orders: orders.iter().take(RECENT_ORDER_COUNT).cloned().collect(),
        }
    }

    /// "৳1234.50"
    pub fn total_spent_label(&self) -> String {
        self.total_spent.display()
    }
}

/// Account data kept in the profile.
#[derive(Debug, Clone)]
pub struct AccountBook {
    store: LocalStore,
}

impl AccountBook {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn dashboard(&self) -> ProfileDashboard {
        let orders: Vec<Order> = self.store.read(StorageKey::Orders);
        ProfileDashboard::compute(&orders, &self.wishlist())
    }

    /// Replace the contact details of the logged-in customer.
    pub fn update_profile(&self, name: &str, email: &str, phone: &str) -> Result<CustomerProfile> {
        let mut profile: CustomerProfile = self
            .store
            .read_or(StorageKey::User, None)
            .ok_or(AuthError::NotLoggedIn)?;
        if name.trim().is_empty() {
            return Err(AuthError::MissingField("Name").into());
        }
        if email.trim().is_empty() {
            return Err(AuthError::MissingField("Email").into());
        }
        profile.name = name.trim().to_string();
        profile.email = email.trim().to_string();
        profile.phone = Some(phone.trim().to_string()).filter(|p| !p.is_empty());
        self.store.write(StorageKey::User, &profile)?;
        Ok(profile)
    }

    /// Check a new password. There is no backend endpoint, so nothing is
    /// stored.
    pub fn change_password(&self, current: &str, new: &str, confirm: &str) -> Result<()> {
        if current.is_empty() {
            return Err(AuthError::MissingField("Current password").into());
        }
        validate_new_password(new, confirm)?;
        Ok(())
    }

    pub fn wishlist(&self) -> Vec<WishlistItem> {
        self.store.read(StorageKey::Wishlist)
    }

    /// Save a product; returns false when it was already saved.
    pub fn add_to_wishlist(&self, item: WishlistItem) -> Result<bool> {
        let mut added = false;
        self.store.update(StorageKey::Wishlist, |list: &mut Vec<WishlistItem>| {
            if !list.iter().any(|i| i.id == item.id) {
                list.push(item);
                added = true;
            }
        })?;
        Ok(added)
    }

    /// Drop a product; returns false when it was not saved.
    pub fn remove_from_wishlist(&self, id: ProductId) -> Result<bool> {
        let before = self.wishlist().len();
        let list = self
            .store
            .update(StorageKey::Wishlist, |list: &mut Vec<WishlistItem>| {
                list.retain(|i| i.id != id)
            })?;
        Ok(list.len() < before)
    }

    pub fn addresses(&self) -> Vec<SavedAddress> {
        self.store.read(StorageKey::Addresses)
    }

    pub fn add_address(&self, address: SavedAddress) -> Result<usize> {
        if address.label.trim().is_empty() || address.address.trim().is_empty() {
            return Err(StorefrontError::Validation(
                "Label and address are required".to_string(),
            ));
        }
        let list = self
            .store
            .update(StorageKey::Addresses, |list: &mut Vec<SavedAddress>| list.push(address))?;
        Ok(list.len() - 1)
    }

    /// Delete the address at `index` in the book.
    pub fn delete_address(&self, index: usize) -> Result<SavedAddress> {
        let mut list = self.addresses();
        if index >= list.len() {
            return Err(StorefrontError::Validation(format!("No saved address at {}", index)));
        }
        let removed = list.remove(index);
        self.store.write(StorageKey::Addresses, &list)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_commerce::cart::Cart;
    use shopfront_commerce::checkout::{CheckoutForm, OrderRequest, ShippingAddress};
    use shopfront_commerce::ids::OrderId;

    fn order(id: &str, price: i64, status: OrderStatus) -> Order {
        let mut cart = Cart::new();
        cart.add(&ProductCard::demo(1, "Yoga Mat", "Sports", price, "Mat"), 1)
            .unwrap();
        let form = CheckoutForm {
            shipping: ShippingAddress {
                first_name: "Nadia".into(),
                last_name: "Rahman".into(),
                email: "nadia@example.com".into(),
                phone: "01700000000".into(),
                address: "House 4".into(),
                city: "Dhaka".into(),
                division: "Dhaka".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let request = OrderRequest::new(form, &cart, &cart.summary()).unwrap();
        let mut order = Order::place(OrderId::new(id), request);
        order.status = status;
        order
    }

    #[test]
    fn test_dashboard_totals() {
        let store = LocalStore::in_memory();
        let orders = vec![
            order("1", 2000, OrderStatus::Pending),
            order("2", 500, OrderStatus::Delivered),
            order("3", 800, OrderStatus::Pending),
            order("4", 300, OrderStatus::Cancelled),
        ];
        store.write(StorageKey::Orders, &orders).unwrap();

        let book = AccountBook::new(store);
        book.add_to_wishlist(WishlistItem::from(&ProductCard::demo(7, "Lamp", "Home", 1200, "Lamp")))
            .unwrap();

        let dashboard = book.dashboard();
        assert_eq!(dashboard.total_orders, 4);
        assert_eq!(dashboard.pending_orders, 2);
        assert_eq!(dashboard.wishlist_count, 1);
        assert_eq!(dashboard.recent_orders.len(), RECENT_ORDER_COUNT);
        let expected = Money::sum(orders.iter().map(|o| &o.total), Currency::BDT);
        assert_eq!(dashboard.total_spent, expected);
        assert!(dashboard.total_spent_label().starts_with('\u{09f3}'));
    }

    #[test]
    fn test_wishlist_has_no_duplicates() {
        let book = AccountBook::new(LocalStore::in_memory());
        let lamp = ProductCard::demo(7, "Lamp", "Home", 1200, "Lamp");
        assert!(book.add_to_wishlist(WishlistItem::from(&lamp)).unwrap());
        assert!(!book.add_to_wishlist(WishlistItem::from(&lamp)).unwrap());
        assert!(book.remove_from_wishlist(ProductId::new(7)).unwrap());
        assert!(!book.remove_from_wishlist(ProductId::new(7)).unwrap());
        assert!(book.wishlist().is_empty());
    }

    #[test]
    fn test_address_book() {
        let book = AccountBook::new(LocalStore::in_memory());
        let home = SavedAddress {
            label: "Home".into(),
            address: "House 4, Road 2".into(),
            city: "Dhaka".into(),
            postal_code: "1205".into(),
        };
        assert_eq!(book.add_address(home.clone()).unwrap(), 0);
        assert!(book.delete_address(3).is_err());
        assert_eq!(book.delete_address(0).unwrap(), home);
        assert!(book.addresses().is_empty());
    }

    #[test]
    fn test_update_profile_requires_login() {
        let store = LocalStore::in_memory();
        let book = AccountBook::new(store.clone());
        assert!(matches!(
            book.update_profile("Nadia", "nadia@example.com", ""),
            Err(StorefrontError::Auth(AuthError::NotLoggedIn))
        ));

        store
            .write(
                StorageKey::User,
                &CustomerProfile {
                    name: "Nadia".into(),
                    email: "old@example.com".into(),
                    ..Default::default()
                },
            )
            .unwrap();
        let updated = book
            .update_profile("Nadia Rahman", "nadia@example.com", "01711111111")
            .unwrap();
        assert_eq!(updated.email, "nadia@example.com");
        assert_eq!(updated.phone.as_deref(), Some("01711111111"));
    }

    #[test]
    fn test_change_password_rules() {
        let book = AccountBook::new(LocalStore::in_memory());
        assert!(book.change_password("old", "secret1", "secret1").is_ok());
        let err = book.change_password("old", "secret1", "secret2").unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match!");
        let err = book.change_password("old", "abc", "abc").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters!");
    }
}
