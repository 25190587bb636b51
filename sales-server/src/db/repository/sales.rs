//! Sales Repository
//!
//! Read-only queries over the `sales` table.

use super::RepoResult;
use crate::db::filter::sales_predicate;
use shared::models::{FilterOptions, SaleRecord, SalesSummary, split_tags};
use shared::query::{SalesFilter, SalesListRequest};
use sqlx::SqlitePool;
use std::collections::BTreeSet;

const SALE_COLUMNS: &str = "transaction_id, date, customer_id, customer_name, phone_number, \
     gender, age, customer_region, customer_type, product_id, product_name, brand, \
     product_category, tags, quantity, price_per_unit, discount_percentage, total_amount, \
     final_amount, payment_method, order_status, delivery_type, store_id, store_location, \
     salesperson_id, employee_name";

/// Fetch one page of rows plus the total row count under the same predicate
pub async fn find_page(
    pool: &SqlitePool,
    request: &SalesListRequest,
) -> RepoResult<(Vec<SaleRecord>, u64)> {
    let qb = sales_predicate(&request.filter);
    let where_clause = qb.build_where_clause();

    let count_sql = format!("SELECT COUNT(*) FROM sales{where_clause}");
    let order = request.sort_order.as_sql();
    let rows_sql = format!(
        "SELECT {SALE_COLUMNS} FROM sales{where_clause} ORDER BY {} {order}, transaction_id {order} LIMIT ? OFFSET ?",
        request.sort_by.column(),
    );

    let count = qb
        .apply_bindings_scalar(sqlx::query_scalar::<_, i64>(&count_sql))
        .fetch_one(pool);
    let rows = qb
        .apply_bindings_as(sqlx::query_as::<_, SaleRecord>(&rows_sql))
        .bind(request.page.limit())
        .bind(request.page.offset())
        .fetch_all(pool);

    let (total, rows) = tokio::try_join!(count, rows)?;
    Ok((rows, total.max(0) as u64))
}

/// Aggregate the filtered set; every figure is 0 over an empty set
pub async fn summarize(pool: &SqlitePool, filter: &SalesFilter) -> RepoResult<SalesSummary> {
    let qb = sales_predicate(filter);
    let sql = format!(
        "SELECT COALESCE(SUM(quantity), 0), TOTAL(final_amount), \
         TOTAL(total_amount - final_amount), COUNT(*) FROM sales{}",
        qb.build_where_clause()
    );

    let (total_units, total_amount, total_discount, total_records): (i64, f64, f64, i64) = qb
        .apply_bindings_as(sqlx::query_as(&sql))
        .fetch_one(pool)
        .await?;

    Ok(SalesSummary {
        total_units,
        total_amount,
        total_discount,
        total_records,
    })
}

/// Distinct values and ranges over the whole table
///
/// The sub-queries are independent and run concurrently; any failure fails
/// the whole snapshot.
pub async fn filter_options(pool: &SqlitePool) -> RepoResult<FilterOptions> {
    let (regions, genders, categories, payment_methods, tags, ages, dates) = tokio::try_join!(
        distinct_values(pool, "customer_region"),
        distinct_values(pool, "gender"),
        distinct_values(pool, "product_category"),
        distinct_values(pool, "payment_method"),
        distinct_tags(pool),
        age_range(pool),
        date_range(pool),
    )?;

    Ok(FilterOptions {
        regions,
        genders,
        categories,
        payment_methods,
        tags,
        min_age: ages.0,
        max_age: ages.1,
        min_date: dates.0,
        max_date: dates.1,
    })
}

/// `column` is always one of the fixed names above, never user input
async fn distinct_values(pool: &SqlitePool, column: &'static str) -> RepoResult<Vec<String>> {
    let sql = format!(
        "SELECT DISTINCT {column} FROM sales WHERE {column} IS NOT NULL ORDER BY {column}"
    );
    let values = sqlx::query_scalar::<_, String>(&sql).fetch_all(pool).await?;
    Ok(values)
}

async fn age_range(pool: &SqlitePool) -> RepoResult<(Option<i64>, Option<i64>)> {
    let range = sqlx::query_as("SELECT MIN(age), MAX(age) FROM sales WHERE age IS NOT NULL")
        .fetch_one(pool)
        .await?;
    Ok(range)
}

async fn date_range(pool: &SqlitePool) -> RepoResult<(Option<String>, Option<String>)> {
    let range = sqlx::query_as("SELECT MIN(date), MAX(date) FROM sales WHERE date IS NOT NULL")
        .fetch_one(pool)
        .await?;
    Ok(range)
}

async fn distinct_tags(pool: &SqlitePool) -> RepoResult<Vec<String>> {
    let raw: Vec<String> = sqlx::query_scalar(
        "SELECT DISTINCT tags FROM sales WHERE tags IS NOT NULL AND tags != ''",
    )
    .fetch_all(pool)
    .await?;

    let set: BTreeSet<String> = raw
        .iter()
        .flat_map(|t| split_tags(t))
        .map(str::to_string)
        .collect();
    Ok(set.into_iter().collect())
}

/// Total number of rows
pub async fn count_all(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Insert one row, ignoring it if the key already exists
///
/// Returns whether a row was written.
pub async fn insert_ignore<'e, E>(executor: E, sale: &SaleRecord) -> RepoResult<bool>
where
    E: sqlx::SqliteExecutor<'e>,
{
    let sql = format!(
        "INSERT INTO sales ({SALE_COLUMNS}) VALUES \
         (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
         ON CONFLICT(transaction_id) DO NOTHING"
    );
    let result = sqlx::query(&sql)
        .bind(sale.transaction_id)
        .bind(&sale.date)
        .bind(&sale.customer_id)
        .bind(&sale.customer_name)
        .bind(&sale.phone_number)
        .bind(&sale.gender)
        .bind(sale.age)
        .bind(&sale.customer_region)
        .bind(&sale.customer_type)
        .bind(&sale.product_id)
        .bind(&sale.product_name)
        .bind(&sale.brand)
        .bind(&sale.product_category)
        .bind(&sale.tags)
        .bind(sale.quantity)
        .bind(sale.price_per_unit)
        .bind(sale.discount_percentage)
        .bind(sale.total_amount)
        .bind(sale.final_amount)
        .bind(&sale.payment_method)
        .bind(&sale.order_status)
        .bind(&sale.delivery_type)
        .bind(&sale.store_id)
        .bind(&sale.store_location)
        .bind(&sale.salesperson_id)
        .bind(&sale.employee_name)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Remove every row (used by a replacing import)
pub async fn delete_all<'e, E>(executor: E) -> RepoResult<u64>
where
    E: sqlx::SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM sales").execute(executor).await?;
    Ok(result.rows_affected())
}
