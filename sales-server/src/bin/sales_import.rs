//! One-off CSV bulk load into the sales database

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sales_server::DbService;
use sales_server::db::import::{DEFAULT_BATCH_SIZE, ImportOptions, import_csv_file};

#[derive(Debug, Parser)]
#[command(name = "sales-import", version, about = "Import a sales CSV export into SQLite")]
struct Args {
    /// CSV file with a header row
    #[arg(long)]
    csv: PathBuf,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:sales.db")]
    database_url: String,

    /// Rows per transaction
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Delete existing rows first
    #[arg(long)]
    replace: bool,

    /// Log filter when RUST_LOG is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    sales_server::utils::init_logger(&args.log_level, None);

    let db = DbService::new(&args.database_url, 1)
        .await
        .with_context(|| format!("failed to open {}", args.database_url))?;

    let options = ImportOptions {
        batch_size: args.batch_size,
        replace: args.replace,
    };
    let report = import_csv_file(&db.pool, &args.csv, &options)
        .await
        .with_context(|| format!("import of {} aborted", args.csv.display()))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
