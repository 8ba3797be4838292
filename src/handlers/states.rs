use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::state::StateRecord;
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{debug, error};

/// List every row of the state lookup table
///
/// GET /state
pub async fn list_states_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StateRecord>>, ApiError> {
    state.metrics.increment_state_lookups();

    match state.state_service.get_all_state().await {
        Ok(states) => {
            debug!(count = states.len(), "State lookup served");
            Ok(Json(states))
        }
        Err(e) => {
            state.metrics.increment_failed_lookups();
            error!(error = %e, "State lookup failed");
            Err(e.into())
        }
    }
}
