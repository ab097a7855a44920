//! Product listing module.
//!
//! Client-side filtering, sorting and pagination for the listing page.

mod filter;
mod results;

pub use filter::{ListingFilters, PriceRange, SortOption, PRODUCTS_PER_PAGE};
pub use results::{Page, Pagination};
