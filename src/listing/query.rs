use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::filter::ProductFilter;

/// Whitelisted sort fields for product listings. Anything else in `sortBy`
/// falls back to `CreatedAt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Price,
    Name,
    Stock,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Price => "price",
            SortField::Name => "name",
            SortField::Stock => "stock",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "createdAt" | "created_at" => Some(SortField::CreatedAt),
            "price" => Some(SortField::Price),
            "name" => Some(SortField::Name),
            "stock" => Some(SortField::Stock),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Requested ordering: primary field plus direction. Ties on the primary key
/// are always broken by ascending `id` so repeated queries page identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

/// Skip/take bounds for one page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

/// One "browse products" request: filter, sort, and page parameters, already
/// normalized. Built once per request from the raw query string and treated as
/// an immutable value from then on.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub page: i64,
    pub limit: i64,
    pub category: Option<Uuid>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
    pub sort: SortSpec,
}

impl ListingQuery {
    /// Build a query from the flat string map the query string arrives as.
    ///
    /// Nothing here rejects: absent or malformed values fall back to their
    /// defaults, and unrecognized keys are ignored entirely.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let listing = &crate::config::CONFIG.listing;

        let page = params
            .get("page")
            .and_then(|v| parse_positive(v))
            .unwrap_or(1);

        let limit = params
            .get("limit")
            .and_then(|v| parse_positive(v))
            .unwrap_or(listing.default_page_size)
            .min(listing.max_page_size);

        let category = params.get("category").and_then(|v| Uuid::parse_str(v).ok());

        let min_price = params.get("minPrice").and_then(|v| parse_price(v));
        let max_price = params.get("maxPrice").and_then(|v| parse_price(v));

        let search = params
            .get("search")
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string());

        let field = params
            .get("sortBy")
            .and_then(|v| SortField::parse(v))
            .unwrap_or(SortField::CreatedAt);
        let direction = match params.get("order").map(|v| v.to_ascii_lowercase()) {
            Some(ref v) if v == "asc" => SortDirection::Asc,
            _ => SortDirection::Desc,
        };

        Self {
            page,
            limit,
            category,
            min_price,
            max_price,
            search,
            sort: SortSpec { field, direction },
        }
    }

    /// Filter criteria for this request. Active-only is implied by the filter
    /// itself, not by the caller.
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            category_id: self.category,
            min_price: self.min_price,
            max_price: self.max_price,
            search: self.search.clone(),
        }
    }

    pub fn window(&self) -> PageWindow {
        // Saturate so an absurdly large page stays a valid (empty) window
        // instead of overflowing into a negative offset.
        PageWindow {
            limit: self.limit,
            offset: self.page.saturating_sub(1).saturating_mul(self.limit),
        }
    }
}

fn parse_positive(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|n| *n >= 1)
}

fn parse_price(value: &str) -> Option<Decimal> {
    Decimal::from_str(value.trim())
        .ok()
        .filter(|d| !d.is_sign_negative())
}
