use tracing::info;
use tracing_subscriber::EnvFilter;

use ledger_editor::config::Config;
use ledger_editor::server::{self, AppState, store::InMemoryDb};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().map_err(|e| format!("Configuration error: {}", e))?;

    let app_state = AppState::new(InMemoryDb::seeded());
    let cors = server::cors_layer(&config.frontend_origin)?;
    let app = server::router(app_state).layer(cors);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", bind_address, e))?;

    info!(address = %bind_address, origin = %config.frontend_origin, "ledger API listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
