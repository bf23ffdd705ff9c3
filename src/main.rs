use std::sync::Arc;

use dash_tour::catalog::StepCatalog;
use dash_tour::config::TourConfig;
use dash_tour::store::{CompletionStore, LibSqlStore};
use dash_tour::tour::{TourCoordinator, tour_routes};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = TourConfig::from_env()?;

    eprintln!("🧭 Dash Tour v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Demo type: {}", config.demo_type);
    eprintln!("   Tour WS: ws://0.0.0.0:{}/ws", config.http_port);
    eprintln!(
        "   Tour API: http://0.0.0.0:{}/api/tour/status",
        config.http_port
    );
    eprintln!(
        "   Checklist API: http://0.0.0.0:{}/api/checklist",
        config.http_port
    );

    // ── Database ─────────────────────────────────────────────────────────
    let db_path = std::path::Path::new(&config.db_path);
    let store: Arc<dyn CompletionStore> =
        Arc::new(LibSqlStore::new_local(db_path).await.unwrap_or_else(|e| {
            eprintln!("Error: Failed to open database at {}: {}", config.db_path, e);
            std::process::exit(1);
        }));
    eprintln!("   Database: {}", config.db_path);

    // ── Tour coordinator ─────────────────────────────────────────────────
    let catalog = Arc::new(StepCatalog::dashboard());
    let coordinator = TourCoordinator::new(Arc::clone(&catalog), store, config.demo_type).await;

    let app = tour_routes(coordinator, catalog);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port)).await?;
    tracing::info!(port = config.http_port, "Tour server started");
    axum::serve(listener, app).await?;

    Ok(())
}
