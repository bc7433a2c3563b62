use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::listing::{PageWindow, ProductFilter, SortSpec};

use super::manager::DatabaseManager;
use super::models::{Category, Product};
use super::query_builder::{self, bind_value, bind_value_as};
use super::store::{CatalogStore, StoreError};

/// Postgres-backed catalog store. Connections come lazily from the shared
/// [`DatabaseManager`] pool, so the server can start before the database is
/// reachable.
#[derive(Debug, Clone, Default)]
pub struct PgCatalogStore;

impl PgCatalogStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn find_products(
        &self,
        filter: &ProductFilter,
        sort: &SortSpec,
        window: PageWindow,
    ) -> Result<Vec<Product>, StoreError> {
        let pool = DatabaseManager::pool().await?;
        let sql = query_builder::select_products_sql(filter, sort, window);

        if crate::config::CONFIG.listing.debug_logging {
            tracing::debug!(query = %sql.query, "listing select");
        }

        let mut q = sqlx::query_as::<_, Product>(&sql.query);
        for p in sql.params.iter() {
            q = bind_value_as(q, p);
        }
        let products = q.fetch_all(&pool).await?;
        Ok(products)
    }

    async fn count_products(&self, filter: &ProductFilter) -> Result<i64, StoreError> {
        let pool = DatabaseManager::pool().await?;
        let sql = query_builder::count_products_sql(filter);

        let mut q = sqlx::query(&sql.query);
        for p in sql.params.iter() {
            q = bind_value(q, p);
        }
        let row = q.fetch_one(&pool).await?;
        let count: i64 = row.try_get("count")?;
        Ok(count)
    }

    async fn product_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        let pool = DatabaseManager::pool().await?;
        let product = sqlx::query_as::<_, Product>(
            "SELECT * FROM \"products\" WHERE \"id\" = $1 AND \"is_active\" = TRUE",
        )
        .bind(id)
        .fetch_optional(&pool)
        .await?;
        Ok(product)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let pool = DatabaseManager::pool().await?;
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM \"categories\" ORDER BY \"name\" ASC")
                .fetch_all(&pool)
                .await?;
        Ok(categories)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        DatabaseManager::health_check().await
    }
}
