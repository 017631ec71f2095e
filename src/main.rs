use number_finder::api::server::{build_router, serve};
use number_finder::config::Config;
use number_finder::finder::engine::{NumberFinder, SearchEngine};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, dotenv_found) = Config::load()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level.as_tracing_level())
        .init();

    if !dotenv_found {
        tracing::info!("No .env file found, using process environment");
    }
    tracing::info!(
        "Config: port={} log_level={} data_path={}",
        config.port,
        config.log_level,
        config.data_path.display()
    );

    // 1. Engine (refuse to serve without it):
    let engine = match SearchEngine::from_path(&config.data_path) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("Failed to initialize finder service: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded {} numbers from {}",
        engine.len(),
        config.data_path.display()
    );
    let finder: Arc<dyn NumberFinder> = Arc::new(engine);

    // 2. HTTP Router:
    let app = build_router(finder);

    // 3. Start HTTP server:
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Press Ctrl+C to shutdown");

    serve(listener, app).await?;

    tracing::info!("Server exited gracefully");
    Ok(())
}
