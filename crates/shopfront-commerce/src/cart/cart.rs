//! Cart and line item types.

use crate::cart::CheckoutSummary;
use crate::catalog::ProductCard;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{self, Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// A line in the cart.
///
/// Older pages stored bare `{id, quantity}` pairs, so everything except the
/// product id falls back to a default when missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product this line refers to.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Product name at the time it was added.
    #[serde(default)]
    pub name: String,
    /// Unit price at the time it was added.
    #[serde(default, with = "money::decimal")]
    pub price: Money,
    /// Units, never below 1.
    #[serde(default = "one", deserialize_with = "at_least_one")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text variant description (e.g. "Size: L").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<String>,
}

impl CartItem {
    /// A line for `quantity` units of a product.
    pub fn new(product: &ProductCard, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: quantity.clamp(1, MAX_QUANTITY_PER_ITEM),
            image: Some(product.image.clone()),
            category: Some(product.category.clone()).filter(|c| !c.is_empty()),
            attributes: None,
        }
    }

    /// `price × quantity`.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity as i64
    }

    /// Category label, "General" when unknown.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("General")
    }
}

/// The shopping cart, persisted as a bare JSON array of lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing lines.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// The lines, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume and return the lines.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Add units of a product, merging with an existing line for it.
    ///
    /// Returns the index of the affected line.
    pub fn add(&mut self, product: &ProductCard, quantity: u32) -> Result<usize, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }

        if let Some(index) = self.items.iter().position(|i| i.product_id == product.id) {
            let item = &mut self.items[index];
            let new_quantity = item.quantity.saturating_add(quantity);
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::InvalidQuantity(new_quantity as i64));
            }
            item.quantity = new_quantity;
            return Ok(index);
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::InvalidQuantity(quantity as i64));
        }
        self.items.push(CartItem::new(product, quantity));
        Ok(self.items.len() - 1)
    }

    /// Step the quantity of a line by `delta`, clamping at 1.
    ///
    /// A decrement on a single unit leaves it at 1; removal is explicit.
    pub fn change_quantity(&mut self, index: usize, delta: i64) -> Result<u32, CommerceError> {
        let item = self
            .items
            .get_mut(index)
            .ok_or(CommerceError::ItemNotInCart(index))?;
        let next = (item.quantity as i64 + delta).clamp(1, MAX_QUANTITY_PER_ITEM as i64);
        item.quantity = next as u32;
        Ok(item.quantity)
    }

    /// Set the quantity of a line outright.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<(), CommerceError> {
        if quantity == 0 || quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::InvalidQuantity(quantity as i64));
        }
        let item = self
            .items
            .get_mut(index)
            .ok_or(CommerceError::ItemNotInCart(index))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove a line by position.
    pub fn remove(&mut self, index: usize) -> Result<CartItem, CommerceError> {
        if index >= self.items.len() {
            return Err(CommerceError::ItemNotInCart(index));
        }
        Ok(self.items.remove(index))
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `Σ price × quantity`.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(Currency::BDT), |acc, item| acc + item.line_total())
    }

    /// Shipping, tax and total for the current contents.
    pub fn summary(&self) -> CheckoutSummary {
        CheckoutSummary::for_subtotal(self.subtotal()).with_item_count(self.item_count())
    }
}

fn one() -> u32 {
    1
}

fn at_least_one<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Option::<i64>::deserialize(deserializer)?.unwrap_or(1);
    Ok(raw.clamp(1, MAX_QUANTITY_PER_ITEM as i64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> ProductCard {
        ProductCard::demo(1, "Wireless Headphones", "Electronics", 2999, "Headphones")
    }

    fn speaker() -> ProductCard {
        ProductCard::demo(6, "Bluetooth Speaker", "Electronics", 1999, "Speaker")
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(&headphones(), 1).unwrap(), 0);
        assert_eq!(cart.add(&speaker(), 1).unwrap(), 1);
        assert_eq!(cart.add(&headphones(), 2).unwrap(), 0);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_add_zero_rejected() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(&headphones(), 0), Err(CommerceError::InvalidQuantity(0)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_clamps_at_one() {
        let mut cart = Cart::new();
        cart.add(&headphones(), 1).unwrap();

        assert_eq!(cart.change_quantity(0, -1).unwrap(), 1);
        assert_eq!(cart.change_quantity(0, -5).unwrap(), 1);
        assert_eq!(cart.change_quantity(0, 2).unwrap(), 3);
        assert_eq!(cart.change_quantity(3, 1), Err(CommerceError::ItemNotInCart(3)));
    }

    #[test]
    fn test_remove_by_index() {
        let mut cart = Cart::new();
        cart.add(&headphones(), 1).unwrap();
        cart.add(&speaker(), 1).unwrap();

        let removed = cart.remove(0).unwrap();
        assert_eq!(removed.name, "Wireless Headphones");
        assert_eq!(cart.items()[0].name, "Bluetooth Speaker");
        assert!(cart.remove(5).is_err());
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add(&headphones(), 2).unwrap();
        cart.add(&speaker(), 1).unwrap();
        assert_eq!(cart.subtotal(), Money::taka(2999 * 2 + 1999));
    }

    #[test]
    fn test_legacy_lines() {
        // Lines written by the home page carry only id and quantity
        let cart: Cart = serde_json::from_str(r#"[{"id": 3, "quantity": 0}, {"id": 4}]"#).unwrap();
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.items()[1].quantity, 1);
        assert!(cart.subtotal().is_zero());
        assert_eq!(cart.items()[0].category_label(), "General");
    }

    #[test]
    fn test_serialized_as_array() {
        let mut cart = Cart::new();
        cart.add(&speaker(), 2).unwrap();
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], 6);
        assert_eq!(json[0]["price"], 1999);
        assert_eq!(json[0]["quantity"], 2);
    }
}
