use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::stream::StreamExt;
use tracing::debug;

/// Live leaderboard stream. On connect the viewer immediately receives the
/// current snapshot, then every subsequent rank change (bursts coalesce to
/// the latest snapshot).
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Response, AppError> {
    state
        .rate_limiter
        .check(&format!("{}:ws_connections", user.participant_id), 10, 1.0)?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, user)))
}

async fn handle_socket(mut socket: WebSocket, state: AppState, user: AuthenticatedUser) {
    let mut subscription = state.engine.subscribe();
    debug!(participant_id = %user.participant_id, "Leaderboard viewer connected");

    loop {
        tokio::select! {
            snapshot = subscription.recv() => {
                let Some(snapshot) = snapshot else { break };
                let payload = match serde_json::to_string(&snapshot) {
                    Ok(payload) => payload,
                    Err(_) => break,
                };
                if socket.send(Message::Text(payload.into())).await.is_err() {
                    // Viewer gone; dropping the subscription prunes it
                    break;
                }
            }
            incoming = socket.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // Viewers only listen on this stream
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    debug!(participant_id = %user.participant_id, "Leaderboard viewer disconnected");
}
