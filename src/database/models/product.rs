use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Catalog product. `category_id` references a `Category` row; the category is
/// never embedded. Inactive products stay in storage but are excluded from
/// every read path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: Uuid,
    pub stock: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
