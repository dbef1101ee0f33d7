use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vending_machine_backend::{config::AppConfig, create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Loading configuration");
    let config = AppConfig::load()?;

    let app_state = initialize_backend(&config)?;
    let app = create_router(app_state, &config.server.allowed_origin)?;

    // Start the server
    let addr = config.server.socket_addr()?;
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
