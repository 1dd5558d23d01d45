use dotenvy::dotenv;

mod api;
mod config;
mod setup;
mod ui;

use config::{app_config::AppConfig, gemini_config::GeminiConfig};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Web UI Entry Point
///
/// Serves a one-box page that forwards the typed text to Gemini and shows the reply.
///
/// - config/: Application configuration (server, CORS, Gemini, page)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
/// - ui/: The HTML page
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration; a missing API key stops here
    let config = AppConfig::from_env();
    let gemini_config = GeminiConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(gemini_config);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
