use crate::{dto::StatsResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_stats")]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.get_statistics.execute();
    debug!(
        total_queries = stats.total_queries,
        queries_blocked = stats.queries_blocked,
        "Statistics retrieved"
    );
    Json(StatsResponse::from(stats))
}
