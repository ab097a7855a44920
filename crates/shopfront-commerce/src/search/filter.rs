//! Listing filters and sort order.

use crate::catalog::ProductCard;
use crate::error::CommerceError;
use crate::money::Money;
use crate::search::Page;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Products shown per listing page.
pub const PRODUCTS_PER_PAGE: usize = 12;

/// Sort options for the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Featured products first, then by rating.
    #[default]
    Featured,
    /// Price: low to high.
    PriceLow,
    /// Price: high to low.
    PriceHigh,
    /// Newest first. The backend already returns products in this order.
    Newest,
    /// Best rated first.
    Rating,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Newest => "newest",
            SortOption::Rating => "rating",
        }
    }

    /// The `sort` query parameter understood by the backend, if any.
    pub fn backend_param(&self) -> Option<&'static str> {
        match self {
            SortOption::Featured => None,
            SortOption::PriceLow => Some("price,asc"),
            SortOption::PriceHigh => Some("price,desc"),
            SortOption::Newest => Some("createdAt,desc"),
            SortOption::Rating => Some("rating,desc"),
        }
    }

    /// Sort products in place. The sort is stable.
    pub fn sort(&self, products: &mut [ProductCard]) {
        match self {
            SortOption::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOption::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOption::Newest => {}
            SortOption::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortOption::Featured => products.sort_by(|a, b| match (a.featured, b.featured) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => b.rating.total_cmp(&a.rating),
            }),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "featured" => Ok(SortOption::Featured),
            "price-low" => Ok(SortOption::PriceLow),
            "price-high" => Ok(SortOption::PriceHigh),
            "newest" => Ok(SortOption::Newest),
            "rating" => Ok(SortOption::Rating),
            other => Err(CommerceError::ValidationError(format!(
                "Unknown sort option: {}",
                other
            ))),
        }
    }
}

/// Inclusive price bounds in whole taka, written `"min-max"` or `"min-"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    /// `None` means unbounded.
    pub max: Option<i64>,
}

impl PriceRange {
    pub fn contains(&self, price: Money) -> bool {
        let value = price.to_decimal();
        value >= self.min as f64 && self.max.map_or(true, |max| value <= max as f64)
    }
}

impl FromStr for PriceRange {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CommerceError::ValidationError(format!("Invalid price range: {}", s));
        let (min, max) = s.split_once('-').unwrap_or((s, ""));
        let min = min.trim().parse::<i64>().map_err(|_| invalid())?;
        let max = match max.trim() {
            "" => None,
            max => Some(max.parse::<i64>().map_err(|_| invalid())?),
        };
        Ok(Self { min, max })
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}-", self.min),
        }
    }
}

/// Filter state of the listing page.
///
/// `search` and `categories` choose what is fetched from the backend; the
/// price, rating and brand filters run on the fetched list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingFilters {
    pub search: String,
    pub categories: Vec<String>,
    pub price_range: Option<PriceRange>,
    /// Ticked star ratings; the smallest one is the threshold.
    pub ratings: Vec<u8>,
    /// Brand names, matched against product tags.
    pub brands: Vec<String>,
    pub sort: SortOption,
    /// 1-indexed.
    pub page: usize,
}

impl ListingFilters {
    /// Category the backend is asked for, without the `cat-` prefix the
    /// sidebar checkboxes use.
    pub fn category(&self) -> Option<&str> {
        self.categories
            .first()
            .map(|c| c.strip_prefix("cat-").unwrap_or(c))
    }

    /// Minimum rating, if any star filter is ticked.
    pub fn min_rating(&self) -> Option<f64> {
        self.ratings.iter().min().map(|r| *r as f64)
    }

    /// Check the client-side filters against one product.
    pub fn matches(&self, product: &ProductCard) -> bool {
        if let Some(range) = self.price_range {
            if !range.contains(product.price) {
                return false;
            }
        }
        if let Some(min) = self.min_rating() {
            if product.rating < min {
                return false;
            }
        }
        if !self.brands.is_empty() {
            let wanted: Vec<String> = self.brands.iter().map(|b| b.to_lowercase()).collect();
            if !product.tags.iter().any(|tag| wanted.contains(&tag.to_lowercase())) {
                return false;
            }
        }
        true
    }

    /// Filter, sort and paginate a fetched product list.
    pub fn apply(&self, products: Vec<ProductCard>) -> Page<ProductCard> {
        let mut filtered: Vec<ProductCard> = products.into_iter().filter(|p| self.matches(p)).collect();
        self.sort.sort(&mut filtered);
        Page::slice(filtered, self.page, PRODUCTS_PER_PAGE)
    }

    /// Reset everything but the sort order.
    pub fn clear(&mut self) {
        *self = Self {
            sort: self.sort,
            ..Self::default()
        };
    }
}
