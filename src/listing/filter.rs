use std::cmp::Ordering;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::database::models::Product;

use super::query::{SortDirection, SortField, SortSpec};

/// Filter criteria for one listing request. All supplied criteria combine with
/// logical AND, and `is_active = true` is always implied: soft-deleted
/// products never come back through this path.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<Uuid>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
}

impl ProductFilter {
    /// Whether a product satisfies every supplied criterion. This is the
    /// reference semantics for the filter; the Postgres store mirrors it in
    /// SQL and the in-memory store uses it directly.
    pub fn matches(&self, product: &Product) -> bool {
        if !product.is_active {
            return false;
        }
        if let Some(category_id) = self.category_id {
            if product.category_id != category_id {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }
        true
    }
}

impl SortSpec {
    /// Total order over products for this sort: requested field and direction
    /// first, then ascending `id` as the tiebreaker.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let primary = match self.field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Price => a.price.cmp(&b.price),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Stock => a.stock.cmp(&b.stock),
        };
        let primary = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}
