use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use catalog_api::database::models::{Category, Product};
use catalog_api::database::store::{CatalogStore, StoreError};
use catalog_api::listing::{PageWindow, ProductFilter, SortSpec};
use catalog_api::{app, AppState};

/// In-memory catalog store. Reuses the listing module's filter and sort
/// semantics directly, so HTTP tests exercise the same code paths the
/// Postgres store mirrors in SQL.
pub struct MemoryCatalogStore {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn find_products(
        &self,
        filter: &ProductFilter,
        sort: &SortSpec,
        window: PageWindow,
    ) -> Result<Vec<Product>, StoreError> {
        let mut matching: Vec<Product> = self
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| sort.compare(a, b));
        Ok(matching
            .into_iter()
            .skip(window.offset.max(0) as usize)
            .take(window.limit.max(0) as usize)
            .collect())
    }

    async fn count_products(&self, filter: &ProductFilter) -> Result<i64, StoreError> {
        Ok(self.products.iter().filter(|p| filter.matches(p)).count() as i64)
    }

    async fn product_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        Ok(self
            .products
            .iter()
            .find(|p| p.id == id && p.is_active)
            .cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Store whose every operation fails, for exercising the error path.
pub struct FailingStore;

#[async_trait]
impl CatalogStore for FailingStore {
    async fn find_products(
        &self,
        _filter: &ProductFilter,
        _sort: &SortSpec,
        _window: PageWindow,
    ) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn count_products(&self, _filter: &ProductFilter) -> Result<i64, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn product_by_id(&self, _id: Uuid) -> Result<Option<Product>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub fn app_with(store: impl CatalogStore + 'static) -> Router {
    app(AppState::new(Arc::new(store)))
}

pub fn category(name: &str) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: format!("{} and accessories", name),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// Product fixture; `minutes` offsets created_at so newest-first ordering is
/// observable.
pub fn product(
    name: &str,
    description: &str,
    price: &str,
    category_id: Uuid,
    is_active: bool,
    minutes: i64,
) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from_str(price).expect("fixture price"),
        category_id,
        stock: 10,
        is_active,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + Duration::minutes(minutes),
    }
}

/// 25 active products in one category, priced 10, 20, ... 250.
pub fn seed_gadgets() -> MemoryCatalogStore {
    let gadgets = category("Gadgets");
    let products = (1..=25)
        .map(|i| {
            product(
                &format!("Gadget {:02}", i),
                "an everyday gadget",
                &format!("{}", i * 10),
                gadgets.id,
                true,
                i as i64,
            )
        })
        .collect();
    MemoryCatalogStore {
        products,
        categories: vec![gadgets],
    }
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Convenience accessors for the listing response envelope.
pub fn products_of(payload: &Value) -> Vec<Value> {
    payload["data"]["products"]
        .as_array()
        .cloned()
        .unwrap_or_default()
}

pub fn pagination_of(payload: &Value) -> Value {
    payload["data"]["pagination"].clone()
}

pub fn price_of(product: &Value) -> Decimal {
    Decimal::from_str(product["price"].as_str().expect("price is a string")).expect("price parses")
}
