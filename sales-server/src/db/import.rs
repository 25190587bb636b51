//! CSV bulk import
//!
//! Loads the sales export (human-readable headers) into the `sales` table.
//! Rows are committed in batches and keyed on `transaction_id`, so running
//! the same file twice inserts nothing the second time.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::models::SaleRecord;
use sqlx::SqlitePool;
use thiserror::Error;

use super::RepoError;
use super::repository::sales;

pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// One CSV line as it appears in the export
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CsvSaleRow {
    #[serde(rename = "Transaction ID")]
    pub transaction_id: Option<String>,
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Customer ID")]
    pub customer_id: Option<String>,
    #[serde(rename = "Customer Name")]
    pub customer_name: Option<String>,
    #[serde(rename = "Phone Number")]
    pub phone_number: Option<String>,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Age")]
    pub age: Option<String>,
    #[serde(rename = "Customer Region")]
    pub customer_region: Option<String>,
    #[serde(rename = "Customer Type")]
    pub customer_type: Option<String>,
    #[serde(rename = "Product ID")]
    pub product_id: Option<String>,
    #[serde(rename = "Product Name")]
    pub product_name: Option<String>,
    #[serde(rename = "Brand")]
    pub brand: Option<String>,
    #[serde(rename = "Product Category")]
    pub product_category: Option<String>,
    #[serde(rename = "Tags")]
    pub tags: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: Option<String>,
    #[serde(rename = "Price per Unit")]
    pub price_per_unit: Option<String>,
    #[serde(rename = "Discount Percentage")]
    pub discount_percentage: Option<String>,
    #[serde(rename = "Total Amount")]
    pub total_amount: Option<String>,
    #[serde(rename = "Final Amount")]
    pub final_amount: Option<String>,
    #[serde(rename = "Payment Method")]
    pub payment_method: Option<String>,
    #[serde(rename = "Order Status")]
    pub order_status: Option<String>,
    #[serde(rename = "Delivery Type")]
    pub delivery_type: Option<String>,
    #[serde(rename = "Store ID")]
    pub store_id: Option<String>,
    #[serde(rename = "Store Location")]
    pub store_location: Option<String>,
    #[serde(rename = "Salesperson ID")]
    pub salesperson_id: Option<String>,
    #[serde(rename = "Employee Name")]
    pub employee_name: Option<String>,
}

/// Why a CSV line could not become a [`SaleRecord`]
#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("missing Transaction ID")]
    MissingKey,

    #[error("invalid {column}: {value:?}")]
    InvalidNumber { column: &'static str, value: String },
}

impl TryFrom<CsvSaleRow> for SaleRecord {
    type Error = RowError;

    fn try_from(row: CsvSaleRow) -> Result<Self, Self::Error> {
        let transaction_id =
            int_cell("Transaction ID", row.transaction_id)?.ok_or(RowError::MissingKey)?;

        Ok(SaleRecord {
            transaction_id,
            date: text_cell(row.date),
            customer_id: text_cell(row.customer_id),
            customer_name: text_cell(row.customer_name),
            phone_number: text_cell(row.phone_number),
            gender: text_cell(row.gender),
            age: int_cell("Age", row.age)?,
            customer_region: text_cell(row.customer_region),
            customer_type: text_cell(row.customer_type),
            product_id: text_cell(row.product_id),
            product_name: text_cell(row.product_name),
            brand: text_cell(row.brand),
            product_category: text_cell(row.product_category),
            tags: text_cell(row.tags),
            quantity: int_cell("Quantity", row.quantity)?,
            price_per_unit: float_cell("Price per Unit", row.price_per_unit)?,
            discount_percentage: float_cell("Discount Percentage", row.discount_percentage)?,
            total_amount: float_cell("Total Amount", row.total_amount)?,
            final_amount: float_cell("Final Amount", row.final_amount)?,
            payment_method: text_cell(row.payment_method),
            order_status: text_cell(row.order_status),
            delivery_type: text_cell(row.delivery_type),
            store_id: text_cell(row.store_id),
            store_location: text_cell(row.store_location),
            salesperson_id: text_cell(row.salesperson_id),
            employee_name: text_cell(row.employee_name),
        })
    }
}

fn text_cell(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Integer cell; `"3.0"` is accepted, `"3.5"` is not
fn int_cell(column: &'static str, cell: Option<String>) -> Result<Option<i64>, RowError> {
    let Some(raw) = text_cell(cell) else {
        return Ok(None);
    };
    if let Ok(v) = raw.parse::<i64>() {
        return Ok(Some(v));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(Some(v as i64)),
        _ => Err(RowError::InvalidNumber { column, value: raw }),
    }
}

fn float_cell(column: &'static str, cell: Option<String>) -> Result<Option<f64>, RowError> {
    let Some(raw) = text_cell(cell) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(RowError::InvalidNumber { column, value: raw }),
    }
}

/// Import settings
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Rows per transaction
    pub batch_size: usize,
    /// Clear the table before loading
    pub replace: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            replace: false,
        }
    }
}

/// Outcome of an import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Data lines read (header excluded)
    pub read: u64,
    pub inserted: u64,
    pub skipped_duplicates: u64,
    /// Lines that could not be parsed or inserted
    pub failed: u64,
}

/// Import failures that abort the whole run
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to open CSV file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<sqlx::Error> for ImportError {
    fn from(err: sqlx::Error) -> Self {
        Self::Repo(RepoError::Database(err))
    }
}

/// Import a CSV file from disk
pub async fn import_csv_file(
    pool: &SqlitePool,
    path: impl AsRef<Path>,
    options: &ImportOptions,
) -> Result<ImportReport, ImportError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    tracing::info!(path = %path.display(), "Importing sales CSV");
    import_csv(pool, file, options).await
}

/// Import CSV data from any reader
///
/// Malformed lines are logged and counted as failed; only I/O and
/// connection-level errors abort the run. Batches already committed stay
/// committed when a later batch aborts.
pub async fn import_csv<R: Read>(
    pool: &SqlitePool,
    reader: R,
    options: &ImportOptions,
) -> Result<ImportReport, ImportError> {
    let batch_size = options.batch_size.max(1);
    let mut report = ImportReport::default();

    if options.replace {
        let removed = sales::delete_all(pool).await?;
        tracing::info!(removed, "Cleared sales table before import");
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut batch: Vec<SaleRecord> = Vec::with_capacity(batch_size);

    for (index, result) in csv_reader.deserialize::<CsvSaleRow>().enumerate() {
        // header is line 1
        let line = index + 2;
        report.read += 1;

        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                tracing::warn!(line, error = %e, "Skipping unreadable CSV line");
                report.failed += 1;
                continue;
            }
        };

        match SaleRecord::try_from(row) {
            Ok(record) => batch.push(record),
            Err(e) => {
                tracing::warn!(line, error = %e, "Skipping invalid CSV line");
                report.failed += 1;
                continue;
            }
        }

        if batch.len() >= batch_size {
            flush_batch(pool, &mut batch, &mut report).await?;
        }
    }

    flush_batch(pool, &mut batch, &mut report).await?;

    tracing::info!(
        read = report.read,
        inserted = report.inserted,
        skipped_duplicates = report.skipped_duplicates,
        failed = report.failed,
        "Sales import finished"
    );
    Ok(report)
}

/// Write one batch inside a single transaction
async fn flush_batch(
    pool: &SqlitePool,
    batch: &mut Vec<SaleRecord>,
    report: &mut ImportReport,
) -> Result<(), ImportError> {
    if batch.is_empty() {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for record in batch.drain(..) {
        match sales::insert_ignore(&mut *tx, &record).await {
            Ok(true) => report.inserted += 1,
            Ok(false) => report.skipped_duplicates += 1,
            Err(e) => {
                tracing::warn!(
                    transaction_id = record.transaction_id,
                    error = %e,
                    "Failed to insert sale"
                );
                report.failed += 1;
            }
        }
    }
    tx.commit().await?;

    tracing::debug!(
        inserted = report.inserted,
        "Committed import batch"
    );
    Ok(())
}
