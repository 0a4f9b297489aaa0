use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{instrument, warn};

/// `POST /command` with a `{command, ...args}` JSON body.
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that malformed envelopes are ignored with `204` instead of rejected.
#[instrument(skip_all, name = "api_handle_command")]
pub async fn handle_command(State(state): State<AppState>, body: Bytes) -> Response {
    let envelope: Value = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(error = %e, "Ignoring undecodable command envelope");
            return StatusCode::NO_CONTENT.into_response();
        }
    };

    match state.handle_command.execute(&envelope).await {
        Some(reply) => Json(reply.to_json()).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
