// API Server Binary Entry Point
//
// Usage: cargo run --features api --bin api_server

use match_scorer_rust::overrides::OverrideTable;
use match_scorer_rust::{create_router, AppState, MatchScorer, ScoringConfig};
use std::net::SocketAddr;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // Default log level: info for our crate, warn for others
                "match_scorer_rust=info,tower_http=debug,axum=debug,warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let config = match std::env::var("SCORING_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading scoring config from {}", path);
            ScoringConfig::load(Path::new(&path))?
        }
        Err(_) => ScoringConfig::default(),
    };

    let overrides = match std::env::var("OVERRIDES_FILE") {
        Ok(path) => {
            tracing::info!("Loading score overrides from {}", path);
            let table = OverrideTable::load(Path::new(&path))?;
            tracing::info!("Loaded {} override entries", table.len());
            table
        }
        Err(_) => OverrideTable::new(),
    };

    let scorer = MatchScorer::with_config(config).with_overrides(overrides);
    let state = AppState::new(scorer);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
