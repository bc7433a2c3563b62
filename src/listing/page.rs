use serde::Serialize;

use crate::database::models::Product;
use crate::database::store::{CatalogStore, StoreError};

use super::query::ListingQuery;

/// Position of one page window within the full matching result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_products: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    pub fn compute(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if total > 0 { (total + limit - 1) / limit } else { 0 };
        Self {
            current_page: page,
            total_pages,
            total_products: total,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }
}

/// One page of listing results plus its pagination metadata.
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// Run a listing query against the store: one bounded page fetch plus an
/// independent count over the same filter. The two reads are not required to
/// be transactionally consistent with each other.
pub async fn fetch_page(
    store: &dyn CatalogStore,
    query: &ListingQuery,
) -> Result<ListingPage, StoreError> {
    let filter = query.filter();
    let products = store
        .find_products(&filter, &query.sort, query.window())
        .await?;
    let total = store.count_products(&filter).await?;
    Ok(ListingPage {
        products,
        pagination: Pagination::compute(query.page, query.limit, total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_products_at_twelve_per_page() {
        let first = Pagination::compute(1, 12, 25);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next_page);
        assert!(!first.has_prev_page);

        let last = Pagination::compute(3, 12, 25);
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        let p = Pagination::compute(2, 12, 24);
        assert_eq!(p.total_pages, 2);
        assert!(!p.has_next_page);
        assert!(p.has_prev_page);
    }

    #[test]
    fn empty_result_set() {
        let p = Pagination::compute(1, 12, 0);
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.total_products, 0);
        assert!(!p.has_next_page);
        assert!(!p.has_prev_page);
    }

    #[test]
    fn page_past_the_end_has_prev_but_no_next() {
        let p = Pagination::compute(9, 12, 25);
        assert!(!p.has_next_page);
        assert!(p.has_prev_page);
    }
}
