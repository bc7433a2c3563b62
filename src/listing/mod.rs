//! Listing query builder: turns the raw `page`/`limit`/`category`/`minPrice`/
//! `maxPrice`/`search`/`sortBy`/`order` parameters into a normalized
//! [`ListingQuery`], runs it against a [`CatalogStore`](crate::database::store::CatalogStore),
//! and pairs the page of products with pagination metadata.

pub mod filter;
pub mod page;
pub mod query;

pub use filter::ProductFilter;
pub use page::{fetch_page, ListingPage, Pagination};
pub use query::{ListingQuery, PageWindow, SortDirection, SortField, SortSpec};
