//! Rolodex API Server binary.

use std::net::SocketAddr;

use rolodex_server::{config::Config, create_app, create_state, init_tracing};
use user_store::{MemoryUserStore, SqliteUserStore, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    init_tracing(&config.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Rolodex API Server"
    );

    // DATABASE_URL selects the SQLite store; unset means in-memory.
    match config.database_url.clone() {
        Some(database_url) => {
            let store = SqliteUserStore::connect(&database_url).await?;
            tracing::info!(database_url = %database_url, "Using SQLite user store");
            serve(config, store).await
        }
        None => {
            tracing::info!("Using in-memory user store");
            serve(config, MemoryUserStore::new()).await
        }
    }
}

/// Binds the listener and serves the API until the process is stopped.
///
/// Any startup failure propagates out of `main` so the process logs it and
/// exits non-zero instead of continuing without a server.
async fn serve<S: UserStore + 'static>(config: Config, store: S) -> anyhow::Result<()> {
    let state = create_state(config.clone(), store);
    let app = create_app(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
