mod auth;
mod error;
mod handlers;
mod models;
mod rate_limit;
mod router;
mod state;

use leaderboard_engine::registry::ParticipantRegistry;
use leaderboard_engine::store::MemoryScoreStore;
use leaderboard_engine::{EngineConfig, SubmissionCoordinator};
use router::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting leaderboard gateway service");

    // Assemble the engine. The in-memory store stands in for the durable
    // store collaborator; swap in another ScoreStore impl to persist.
    let engine = Arc::new(SubmissionCoordinator::new(
        Arc::new(MemoryScoreStore::new()),
        Arc::new(ParticipantRegistry::new()),
        EngineConfig::default(),
    ));
    let state = AppState::new(engine);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
