use crate::handlers::{admin, leaderboard, score, ws};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/scores", post(score::submit_score))
        .route("/leaderboard", get(leaderboard::get_leaderboard))
        .route("/ws", get(ws::ws_handler))
        .route("/admin/reset", post(admin::reset_scores))
        .route("/admin/stats", get(admin::get_stats));

    Router::new()
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
