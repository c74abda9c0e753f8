//! Rolodex console client binary.

use rolodex_console::{app::App, config::ConsoleConfig};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = ConsoleConfig::load();

    // Logs go to stderr so they do not interleave with the UI.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        server_url = %config.server_url,
        "Starting Rolodex console"
    );

    App::new(&config).run().await
}
