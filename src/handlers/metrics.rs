// Metrics endpoint

use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::metrics::collector::MetricsSnapshot;
use crate::models::admin::ApiKeyQuery;
use crate::utils::auth::api_key_matches;
use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::warn;

/// Request counters and uptime as JSON. Requires the admin API key.
pub async fn metrics_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiKeyQuery>,
) -> Result<Json<MetricsSnapshot>, ApiError> {
    if !api_key_matches(&params.api_key, &state.config.auth.api_key) {
        state.metrics.increment_unauthorized();
        warn!("Unauthorized metrics access attempt");
        return Err(ApiError::InvalidApiKey);
    }

    Ok(Json(state.metrics.get_snapshot()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{memory_state, TEST_API_KEY};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_metrics_handler_success() {
        let state = memory_state();
        state.metrics.increment_state_lookups();

        let Json(snapshot) = metrics_handler(
            State(state),
            Query(ApiKeyQuery { api_key: TEST_API_KEY.to_string() }),
        )
        .await
        .unwrap();

        assert_eq!(snapshot.state_lookups, 1);
        assert_eq!(snapshot.failed_state_lookups, 0);
        assert!(snapshot.uptime_seconds >= 0);
    }

    #[tokio::test]
    async fn test_metrics_handler_invalid_api_key() {
        let state = memory_state();

        let result = metrics_handler(
            State(state),
            Query(ApiKeyQuery { api_key: "wrong-key".to_string() }),
        )
        .await;
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
