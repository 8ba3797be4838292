use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::admin::{ApiKeyQuery, CreatedResponse, StateAddBody, UserAddBody};
use crate::utils::auth::api_key_matches;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

fn authorize(state: &AppState, api_key: &str, action: &str) -> Result<(), ApiError> {
    if api_key_matches(api_key, &state.config.auth.api_key) {
        return Ok(());
    }
    state.metrics.increment_unauthorized();
    warn!(action, "Unauthorized admin request");
    Err(ApiError::InvalidApiKey)
}

/// Add a row to the state table
///
/// POST /state/add?api_key=<key>  body: {"name": "..."}
pub async fn state_add_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiKeyQuery>,
    Json(body): Json<StateAddBody>,
) -> Result<Response, ApiError> {
    authorize(&state, &params.api_key, "state add")?;

    let name = body.name.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidParameter("name must not be empty".to_string()));
    }

    let record = state.state_repository.insert(name).await?;

    info!(state_id = record.id, name = %record.name, "State added");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            id: record.id,
        }),
    )
        .into_response())
}

/// Add a user record
///
/// POST /user/add?api_key=<key>  body: {"type_user": 1}
pub async fn user_add_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiKeyQuery>,
    Json(body): Json<UserAddBody>,
) -> Result<Response, ApiError> {
    authorize(&state, &params.api_key, "user add")?;

    let user = state.user_repository.insert(body.type_user).await?;
    // Stores always assign an id on insert.
    let id = user.id.unwrap_or_default();

    info!(user_id = id, type_user = ?user.type_user, "User added");

    Ok((StatusCode::CREATED, Json(CreatedResponse { success: true, id })).into_response())
}
