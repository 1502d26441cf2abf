use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Ping the game store and report whether it answered.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.game_store().health_check().await {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthResponse::degraded()
        }
    }
}
