//! Checkout pricing calculations.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money {
    amount_cents: 100_000,
    currency: Currency::BDT,
};

/// Flat shipping fee below the threshold.
pub const STANDARD_SHIPPING: Money = Money {
    amount_cents: 10_000,
    currency: Currency::BDT,
};

/// VAT applied to the subtotal, in percent.
pub const TAX_RATE_PERCENT: f64 = 5.0;

/// Pricing breakdown shown in the cart and checkout summaries.
///
/// All amounts are kept in minor units, so the total is exact to two
/// decimals: `subtotal + shipping + tax`. Coupons never enter it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    /// Sum of quantities.
    pub item_count: u32,
    /// `Σ price × quantity`.
    pub subtotal: Money,
    /// Shipping fee.
    pub shipping: Money,
    /// Tax.
    pub tax: Money,
    /// Amount charged.
    pub total: Money,
}

impl CheckoutSummary {
    /// Price a subtotal.
    pub fn for_subtotal(subtotal: Money) -> Self {
        let shipping = if subtotal.amount_cents >= FREE_SHIPPING_THRESHOLD.amount_cents {
            Money::zero(subtotal.currency)
        } else {
            Money::new(STANDARD_SHIPPING.amount_cents, subtotal.currency)
        };
        let tax = subtotal.percentage(TAX_RATE_PERCENT);

        Self {
            item_count: 0,
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Record the number of units being priced.
    pub fn with_item_count(mut self, item_count: u32) -> Self {
        self.item_count = item_count;
        self
    }

    /// Check if shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Shipping as shown to the customer: "FREE" or the amount.
    pub fn shipping_label(&self) -> String {
        if self.has_free_shipping() {
            "FREE".to_string()
        } else {
            self.shipping.display()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_pays_shipping() {
        let summary = CheckoutSummary::for_subtotal(Money::taka(900));
        assert_eq!(summary.shipping, Money::taka(100));
        assert_eq!(summary.tax, Money::taka(45));
        assert_eq!(summary.total, Money::taka(1045));
        assert_eq!(summary.shipping_label(), "\u{09f3}100.00");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let summary = CheckoutSummary::for_subtotal(Money::taka(1000));
        assert!(summary.has_free_shipping());
        assert_eq!(summary.shipping_label(), "FREE");
        assert_eq!(summary.total, Money::taka(1050));
    }

    #[test]
    fn test_fractional_tax_rounds_to_two_decimals() {
        // 999.99 -> tax 49.9995 -> 50.00, shipping 100
        let summary = CheckoutSummary::for_subtotal(Money::new(99999, Currency::BDT));
        assert_eq!(summary.tax.amount_cents, 5000);
        assert_eq!(summary.total.amount_cents, 99999 + 10000 + 5000);
    }

    #[test]
    fn test_empty_cart_summary() {
        let summary = CheckoutSummary::for_subtotal(Money::zero(Currency::BDT));
        assert_eq!(summary.total, Money::taka(100));
    }
}
