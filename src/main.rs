use account_backend::core::{AppState, Config, SnowflakeGenerator};
use account_backend::{create_router, repositories};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default info per il crate se RUST_LOG non è impostato
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "account_backend=info,tower_http=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.log_summary();

    // Senza un generatore valido nessun id è affidabile: il server non parte
    let ids = Arc::new(SnowflakeGenerator::new(config.node_id)?);
    info!(node_id = ids.node_id(), "Identifier generator ready");

    let app = match &config.database_url {
        Some(url) => {
            let pool = repositories::connect(
                url,
                config.max_connections,
                Duration::from_secs(config.connection_lifetime_secs),
            )
            .await?;
            info!("Database pool created, migrations applied");
            create_router(Arc::new(AppState::with_pool(pool, ids, &config)))
        }
        None => create_router(Arc::new(AppState::in_memory(ids, &config))),
    };

    let cors = if config.is_development() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };
    let app = app.layer(cors);

    // Crea il listener TCP
    let listener = TcpListener::bind((config.server_host.as_str(), config.server_port)).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    // Avvia il server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
    info!("Shutdown signal received");
}
