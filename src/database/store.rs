use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::listing::{PageWindow, ProductFilter, SortSpec};

use super::models::{Category, Product};

/// Errors surfaced by a catalog store. Callers treat anything here as a
/// single generic fetch failure; no retries, no partial results.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Read-only capability over the product catalog. Injected through app state
/// so handlers and the listing builder stay independent of the backing
/// storage; tests swap in an in-memory implementation.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Ordered, bounded page of active products matching the filter.
    async fn find_products(
        &self,
        filter: &ProductFilter,
        sort: &SortSpec,
        window: PageWindow,
    ) -> Result<Vec<Product>, StoreError>;

    /// Total count of active products matching the filter, independent of any
    /// page window.
    async fn count_products(&self, filter: &ProductFilter) -> Result<i64, StoreError>;

    /// Single active product by id, or None.
    async fn product_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError>;

    /// All categories, ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Connectivity check for /health.
    async fn ping(&self) -> Result<(), StoreError>;
}
