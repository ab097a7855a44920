//! Newtype IDs for type-safe identifiers.
//!
//! The storefront backend hands out numeric ids, so most ids wrap a `u64` and
//! serialize as a bare JSON number. Orders are the exception: the backend
//! names them `ORD-...`, while orders placed offline get a millisecond
//! timestamp, so [`OrderId`] carries either.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Generate a new id from the current time.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            /// The raw numeric id.
            pub fn get(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(ProductId);
define_id!(CustomerId);
define_id!(CouponId);
define_id!(ReviewId);
define_id!(UserId);

/// Serial numbers available to one day of catalog ids.
const SERIALS_PER_DAY: u64 = 10_000;

impl ProductId {
    /// Next catalog id for a product created on `date`.
    ///
    /// Catalog ids read `YYMMDDNNNN`: the creation date followed by a serial
    /// that restarts at 0001 every day. The serial is one past the highest
    /// already used on `date`. `None` once a day's 9999 serials are spent.
    pub fn next_for_date<'a>(
        date: NaiveDate,
        existing: impl IntoIterator<Item = &'a ProductId>,
    ) -> Option<Self> {
        let prefix = date_prefix(date);
        let last = existing
            .into_iter()
            .filter(|id| id.day_prefix() == prefix)
            .map(ProductId::serial)
            .max()
            .unwrap_or(0);
        let next = last + 1;
        (next < SERIALS_PER_DAY).then_some(Self(prefix * SERIALS_PER_DAY + next))
    }

    /// The `YYMMDD` part of a catalog id.
    pub fn day_prefix(&self) -> u64 {
        self.0 / SERIALS_PER_DAY
    }

    /// The per-day serial of a catalog id.
    pub fn serial(&self) -> u64 {
        self.0 % SERIALS_PER_DAY
    }

    /// Creation date encoded in a catalog id, if it holds one.
    pub fn created_on(&self) -> Option<NaiveDate> {
        let prefix = self.day_prefix();
        let year = 2000 + (prefix / 10_000) as i32;
        let month = (prefix / 100 % 100) as u32;
        let day = (prefix % 100) as u32;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

fn date_prefix(date: NaiveDate) -> u64 {
    let year = date.year().rem_euclid(100) as u64;
    year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

/// Order identifier: a backend reference or a local timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a timestamp id for an order recorded locally.
    pub fn generate() -> Self {
        Self(generate_id().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as a number, for timestamp ids.
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for OrderId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

impl Serialize for OrderId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_number() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::from(n),
            Raw::Text(s) => Self(s),
        })
    }
}

/// Millisecond timestamp, bumped past the previous value so two ids generated
/// in the same millisecond still differ.
fn generate_id() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};

    static LAST: AtomicU64 = AtomicU64::new(0);

    let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let mut prev = LAST.load(Ordering::Relaxed);
    loop {
        let next = now.max(prev + 1);
        match LAST.compare_exchange_weak(prev, next, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => prev = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(2601010001);
        assert_eq!(id.get(), 2601010001);
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_catalog_id_same_day() {
        let existing = [
            ProductId::new(2601060001),
            ProductId::new(2601060003),
            ProductId::new(2601050007),
            ProductId::new(42),
        ];
        let next = ProductId::next_for_date(day(2026, 1, 6), &existing).unwrap();
        assert_eq!(next, ProductId::new(2601060004));
        assert_eq!(next.day_prefix(), 260106);
        assert_eq!(next.serial(), 4);
        assert_eq!(next.created_on(), Some(day(2026, 1, 6)));
        assert_eq!(ProductId::new(42).created_on(), None);
    }

    #[test]
    fn test_catalog_id_new_day_restarts_serial() {
        let existing = [ProductId::new(2601060001), ProductId::new(2601060002)];
        assert_eq!(
            ProductId::next_for_date(day(2026, 1, 7), &existing),
            Some(ProductId::new(2601070001))
        );
        assert_eq!(
            ProductId::next_for_date(day(2026, 12, 31), &[]),
            Some(ProductId::new(2612310001))
        );
        assert_eq!(
            ProductId::next_for_date(day(2027, 1, 1), &existing),
            Some(ProductId::new(2701010001))
        );
    }

    #[test]
    fn test_catalog_id_day_exhausted() {
        let full = [ProductId::new(2601069999)];
        assert_eq!(ProductId::next_for_date(day(2026, 1, 6), &full), None);
    }

    #[test]
    fn test_id_generation() {
        let id1 = OrderId::generate();
        let id2 = OrderId::generate();
        assert_ne!(id1, id2);
        assert!(id2.as_number().unwrap() > id1.as_number().unwrap());
    }

    #[test]
    fn test_id_from_str() {
        let id: ProductId = " 42 ".parse().unwrap();
        assert_eq!(id, ProductId::new(42));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_number() {
        let id = ProductId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn test_order_id_forms() {
        let local = OrderId::from(1704067200000);
        assert_eq!(serde_json::to_string(&local).unwrap(), "1704067200000");
        assert_eq!(format!("{}", local), "1704067200000");

        let remote: OrderId = serde_json::from_str("\"ORD-26030100001\"").unwrap();
        assert_eq!(remote.as_str(), "ORD-26030100001");
        assert_eq!(remote.as_number(), None);
        assert_eq!(serde_json::to_string(&remote).unwrap(), "\"ORD-26030100001\"");

        let parsed: OrderId = serde_json::from_str("1704067200000").unwrap();
        assert_eq!(parsed, local);
    }
}
