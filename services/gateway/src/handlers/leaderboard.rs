use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use types::rank::RankSnapshot;

/// Initial fetch for a leaderboard view; live updates come over `/v1/ws`.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<RankSnapshot>, AppError> {
    state
        .rate_limiter
        .check(&format!("{}:leaderboard", user.participant_id), 30, 10.0)?;

    Ok(Json(state.engine.current_snapshot().await))
}
