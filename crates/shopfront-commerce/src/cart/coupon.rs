//! Coupon codes.

use crate::error::CommerceError;
use crate::ids::CouponId;
use crate::money::{self, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a coupon's value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Percent of the order amount, optionally capped.
    Percentage,
    /// Fixed amount off.
    Fixed,
}

/// Lifecycle state set by the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CouponStatus {
    #[default]
    Active,
    Inactive,
    Expired,
}

/// A discount code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CouponId>,
    pub code: String,
    pub discount_type: DiscountType,
    /// Percent for [`DiscountType::Percentage`], amount for [`DiscountType::Fixed`].
    pub discount_value: f64,
    /// Orders below this amount get no discount.
    #[serde(default, with = "money::decimal")]
    pub min_purchase: Money,
    /// Cap for percentage discounts.
    #[serde(default, with = "money::decimal::option", skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: CouponStatus,
}

impl Coupon {
    /// A fixed-amount coupon with no restrictions.
    pub fn fixed(code: impl Into<String>, amount: Money) -> Self {
        Self {
            id: None,
            code: code.into(),
            discount_type: DiscountType::Fixed,
            discount_value: amount.to_decimal(),
            min_purchase: Money::default(),
            max_discount: None,
            usage_limit: None,
            used_count: 0,
            start_date: None,
            end_date: None,
            status: CouponStatus::Active,
        }
    }

    /// A percentage coupon with no restrictions.
    pub fn percentage(code: impl Into<String>, percent: f64) -> Self {
        Self {
            discount_type: DiscountType::Percentage,
            discount_value: percent,
            ..Self::fixed(code, Money::default())
        }
    }

    /// Check status, date window and usage limit on `today`.
    pub fn is_valid_on(&self, today: NaiveDate) -> bool {
        if self.status != CouponStatus::Active {
            return false;
        }
        if self.start_date.is_some_and(|start| today < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| today > end) {
            return false;
        }
        if self.usage_limit.is_some_and(|limit| self.used_count >= limit) {
            return false;
        }
        true
    }

    /// Discount for an order amount; zero when invalid or below the minimum.
    pub fn calculate_discount(&self, amount: Money, today: NaiveDate) -> Money {
        if !self.is_valid_on(today) || amount < self.min_purchase {
            return Money::zero(amount.currency);
        }
        match self.discount_type {
            DiscountType::Percentage => {
                let discount = amount.percentage(self.discount_value);
                match self.max_discount {
                    Some(cap) if discount > cap => cap,
                    _ => discount,
                }
            }
            DiscountType::Fixed => Money::from_decimal(self.discount_value, amount.currency),
        }
    }

    /// Like [`calculate_discount`](Self::calculate_discount) but explains why
    /// a coupon does not apply.
    pub fn apply(&self, amount: Money, today: NaiveDate) -> Result<Money, CommerceError> {
        if !self.is_valid_on(today) {
            return Err(CommerceError::CouponNotApplicable {
                code: self.code.clone(),
                reason: "coupon is not active".to_string(),
            });
        }
        if amount < self.min_purchase {
            return Err(CommerceError::CouponNotApplicable {
                code: self.code.clone(),
                reason: format!("minimum purchase is {}", self.min_purchase.display()),
            });
        }
        Ok(self.calculate_discount(amount, today))
    }
}

/// Codes accepted by the cart page without asking the backend.
pub fn demo_coupons() -> Vec<Coupon> {
    vec![
        Coupon::fixed("SAVE10", Money::taka(10)),
        Coupon::fixed("SAVE20", Money::taka(20)),
        Coupon::fixed("FIRST100", Money::taka(100)),
    ]
}

/// Look up a code in a coupon table. Codes match exactly.
pub fn find_coupon<'a>(coupons: &'a [Coupon], code: &str) -> Result<&'a Coupon, CommerceError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(CommerceError::ValidationError(
            "Please enter a coupon code".to_string(),
        ));
    }
    coupons
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| CommerceError::InvalidCoupon(code.to_string()))
}

/// Response of the backend's coupon validation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CouponValidation {
    pub valid: bool,
    #[serde(with = "money::decimal")]
    pub discount: Money,
    #[serde(with = "money::decimal")]
    pub final_amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_demo_coupons() {
        let coupons = demo_coupons();
        let today = day(2026, 3, 1);

        let save20 = find_coupon(&coupons, "SAVE20").unwrap();
        assert_eq!(save20.calculate_discount(Money::taka(500), today), Money::taka(20));

        let first = find_coupon(&coupons, " FIRST100 ").unwrap();
        assert_eq!(first.calculate_discount(Money::taka(500), today), Money::taka(100));
    }

    #[test]
    fn test_unknown_and_empty_codes() {
        let coupons = demo_coupons();
        assert_eq!(
            find_coupon(&coupons, "save10"),
            Err(CommerceError::InvalidCoupon("save10".to_string()))
        );
        assert!(matches!(
            find_coupon(&coupons, "  "),
            Err(CommerceError::ValidationError(_))
        ));
    }

    #[test]
    fn test_percentage_with_cap() {
        let mut coupon = Coupon::percentage("EID25", 25.0);
        coupon.max_discount = Some(Money::taka(300));
        let today = day(2026, 3, 1);

        assert_eq!(coupon.calculate_discount(Money::taka(800), today), Money::taka(200));
        assert_eq!(coupon.calculate_discount(Money::taka(2000), today), Money::taka(300));
    }

    #[test]
    fn test_min_purchase() {
        let mut coupon = Coupon::fixed("BIG", Money::taka(150));
        coupon.min_purchase = Money::taka(1000);
        let today = day(2026, 3, 1);

        assert!(coupon.calculate_discount(Money::taka(999), today).is_zero());
        assert!(coupon.apply(Money::taka(999), today).is_err());
        assert_eq!(coupon.apply(Money::taka(1000), today).unwrap(), Money::taka(150));
    }

    #[test]
    fn test_validity_window_and_usage() {
        let mut coupon = Coupon::fixed("NEWYEAR", Money::taka(50));
        coupon.start_date = Some(day(2026, 1, 1));
        coupon.end_date = Some(day(2026, 1, 31));

        assert!(!coupon.is_valid_on(day(2025, 12, 31)));
        assert!(coupon.is_valid_on(day(2026, 1, 1)));
        assert!(coupon.is_valid_on(day(2026, 1, 31)));
        assert!(!coupon.is_valid_on(day(2026, 2, 1)));

        coupon.usage_limit = Some(10);
        coupon.used_count = 10;
        assert!(!coupon.is_valid_on(day(2026, 1, 15)));

        coupon.used_count = 0;
        coupon.status = CouponStatus::Inactive;
        assert!(!coupon.is_valid_on(day(2026, 1, 15)));
    }

    #[test]
    fn test_backend_coupon_payload() {
        let json = r#"{
            "id": 4,
            "code": "WELCOME",
            "discountType": "percentage",
            "discountValue": 10,
            "minPurchase": 500,
            "maxDiscount": null,
            "usedCount": 3,
            "endDate": "2026-12-31",
            "status": "active"
        }"#;
        let coupon: Coupon = serde_json::from_str(json).unwrap();
        assert_eq!(coupon.discount_type, DiscountType::Percentage);
        assert_eq!(coupon.min_purchase, Money::taka(500));
        assert_eq!(coupon.max_discount, None);
        assert_eq!(coupon.end_date, Some(day(2026, 12, 31)));
    }
}
