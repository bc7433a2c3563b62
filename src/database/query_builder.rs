use rust_decimal::Decimal;
use sqlx::postgres::PgArguments;
use sqlx::FromRow;
use uuid::Uuid;

use crate::listing::{PageWindow, ProductFilter, SortSpec};

/// A typed parameter destined for a `$n` placeholder.
#[derive(Debug, Clone)]
pub enum BindValue {
    Uuid(Uuid),
    Decimal(Decimal),
    Text(String),
}

/// SQL text plus its positional parameters.
#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<BindValue>,
}

/// SELECT for one page of matching products, ordered by the requested field
/// with ascending `id` breaking ties.
pub fn select_products_sql(filter: &ProductFilter, sort: &SortSpec, window: PageWindow) -> SqlResult {
    let mut params = Vec::new();
    let where_clause = build_where_clause(filter, &mut params);

    let query = format!(
        "SELECT * FROM \"products\" WHERE {} ORDER BY \"{}\" {}, \"id\" ASC LIMIT {} OFFSET {}",
        where_clause,
        sort.field.column(),
        sort.direction.to_sql(),
        window.limit,
        window.offset,
    );

    SqlResult { query, params }
}

/// COUNT over the same filter as the page fetch, with no window.
pub fn count_products_sql(filter: &ProductFilter) -> SqlResult {
    let mut params = Vec::new();
    let where_clause = build_where_clause(filter, &mut params);

    let query = format!(
        "SELECT COUNT(*) as count FROM \"products\" WHERE {}",
        where_clause
    );

    SqlResult { query, params }
}

fn build_where_clause(filter: &ProductFilter, params: &mut Vec<BindValue>) -> String {
    // Active-only is a fixed predicate, never parameterized away.
    let mut conditions = vec!["\"is_active\" = TRUE".to_string()];

    if let Some(category_id) = filter.category_id {
        conditions.push(format!(
            "\"category_id\" = {}",
            param(params, BindValue::Uuid(category_id))
        ));
    }
    if let Some(min) = filter.min_price {
        conditions.push(format!(
            "\"price\" >= {}",
            param(params, BindValue::Decimal(min))
        ));
    }
    if let Some(max) = filter.max_price {
        conditions.push(format!(
            "\"price\" <= {}",
            param(params, BindValue::Decimal(max))
        ));
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", escape_like(search));
        let name_param = param(params, BindValue::Text(pattern.clone()));
        let description_param = param(params, BindValue::Text(pattern));
        conditions.push(format!(
            "(\"name\" ILIKE {} OR \"description\" ILIKE {})",
            name_param, description_param
        ));
    }

    conditions.join(" AND ")
}

fn param(params: &mut Vec<BindValue>, value: BindValue) -> String {
    params.push(value);
    format!("${}", params.len())
}

/// Escape LIKE metacharacters so the search string matches literally.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub fn bind_value<'q>(
    q: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    value: &'q BindValue,
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    match value {
        BindValue::Uuid(v) => q.bind(*v),
        BindValue::Decimal(v) => q.bind(*v),
        BindValue::Text(v) => q.bind(v),
    }
}

pub fn bind_value_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    value: &'q BindValue,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    match value {
        BindValue::Uuid(v) => q.bind(*v),
        BindValue::Decimal(v) => q.bind(*v),
        BindValue::Text(v) => q.bind(v),
    }
}
