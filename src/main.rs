use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use skin_routine_api::{
    catalog::{Catalog, CsvCatalogSource},
    config::{Config, LogFormat},
    routes::{create_router, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let source = CsvCatalogSource::new(&config.catalog_path);
    let catalog = Catalog::load_from(&source).await?;
    if catalog.is_empty() {
        tracing::warn!(path = %config.catalog_path, "Catalog is empty, every routine will be general advice");
    }

    let state = Arc::new(AppState::new(catalog, config.rng_seed));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
