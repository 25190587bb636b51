use sales_server::db::repository::sales;
use sales_server::{DbService, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, config, logging
    let config = setup_environment();

    tracing::info!(
        "Sales server starting (env: {}, db: {})",
        config.environment,
        config.database_url
    );

    // 2. Database + migrations; failure here is fatal
    let db = DbService::new(&config.database_url, config.db_max_connections)
        .await
        .inspect_err(|e| tracing::error!("Failed to initialize database: {e}"))?;

    match sales::count_all(&db.pool).await {
        Ok(0) => tracing::warn!("Sales table is empty; run sales-import to load data"),
        Ok(count) => tracing::info!("Sales table holds {count} records"),
        Err(e) => tracing::warn!("Could not count sales records: {e}"),
    }

    // 3. Serve until Ctrl-C
    let state = ServerState::new(config, db);
    if let Err(e) = Server::new(state).run().await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
