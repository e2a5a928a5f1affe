use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::{SubmitScoreRequest, SubmitScoreResponse};
use crate::state::AppState;
use axum::{extract::State, Json};
use types::ids::GameId;

pub async fn submit_score(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<Json<SubmitScoreResponse>, AppError> {
    // 1. Rate limiting: one completed game session per call, so a tight
    // bucket is enough
    state
        .rate_limiter
        .check(&format!("{}:scores", user.participant_id), 10, 1.0)?;

    // 2. Identity validation
    if user.participant_id != payload.participant_id {
        return Err(AppError::Forbidden(
            "Cannot submit a score for another participant".into(),
        ));
    }

    let game_id = GameId::try_new(payload.game_id.as_str())
        .ok_or_else(|| AppError::BadRequest("game_id must be a lowercase slug".into()))?;

    // 3. Keep the engine's registry in sync with the auth claims
    state.engine.registry().register(user.profile());

    let outcome = state
        .engine
        .submit(payload.participant_id, game_id, payload.score, payload.elapsed_time)
        .await?;

    Ok(Json(SubmitScoreResponse {
        accepted: outcome.accepted,
        rank: outcome.rank,
    }))
}
