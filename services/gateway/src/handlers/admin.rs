use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use leaderboard_engine::coordinator::EngineStats;

/// Bulk reset of all scores. The engine enforces the role claim and takes
/// its global write barrier, so no in-flight submission races the clear.
pub async fn reset_scores(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<StatusCode, AppError> {
    state
        .rate_limiter
        .check(&format!("{}:admin_reset", user.participant_id), 5, 0.5)?;

    state.engine.reset(user.role).await?;
    Ok(StatusCode::OK)
}

pub async fn get_stats(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<EngineStats>, AppError> {
    if !user.role.is_admin() {
        return Err(AppError::Forbidden("Administrator role required".into()));
    }

    let stats = state.engine.stats().await?;
    Ok(Json(stats))
}
