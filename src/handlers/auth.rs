use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::admin::PayloadQuery;
use crate::models::login_payload::LoginPayload;
use crate::utils::auth::api_key_matches;
use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Build the login payload for a stored user
///
/// GET /auth/payload?api_key=<key>&user_id=<id>
pub async fn login_payload_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PayloadQuery>,
) -> Result<Json<LoginPayload>, ApiError> {
    if !api_key_matches(&params.api_key, &state.config.auth.api_key) {
        state.metrics.increment_unauthorized();
        warn!("Unauthorized login payload request");
        return Err(ApiError::InvalidApiKey);
    }

    let user = state
        .user_repository
        .find_by_id(params.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("user {}", params.user_id)))?;

    let payload = LoginPayload::from(&user);
    state.metrics.increment_login_payloads();

    info!(user_id = params.user_id, type_user = ?payload.type_user, "Login payload issued");

    Ok(Json(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{memory_state, sqlite_state, test_config, TEST_API_KEY};
    use crate::models::user::UserRecord;
    use crate::stores::memory::{MemoryStateRepository, MemoryUserRepository};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn query(api_key: &str, user_id: i64) -> Query<PayloadQuery> {
        Query(PayloadQuery {
            api_key: api_key.to_string(),
            user_id,
        })
    }

    #[tokio::test]
    async fn test_payload_for_stored_user() {
        let (state, _pool, _dir) = sqlite_state().await;
        let user = state.user_repository.insert(Some(2)).await.unwrap();
        let id = user.id.unwrap();

        let Json(payload) = login_payload_handler(State(state), query(TEST_API_KEY, id))
            .await
            .unwrap();

        assert_eq!(payload, LoginPayload { id: Some(id), type_user: Some(2) });
    }

    #[tokio::test]
    async fn test_payload_carries_absent_fields() {
        let users = Arc::new(MemoryUserRepository::new());
        users.put(5, UserRecord { id: None, type_user: None });
        let state = AppState::new(test_config(), Arc::new(MemoryStateRepository::new()), users);

        let Json(payload) = login_payload_handler(State(Arc::new(state)), query(TEST_API_KEY, 5))
            .await
            .unwrap();

        assert_eq!(payload, LoginPayload { id: None, type_user: None });
        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let state = memory_state();

        let err = login_payload_handler(State(state), query(TEST_API_KEY, 404))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_api_key() {
        let state = memory_state();

        let err = login_payload_handler(State(state.clone()), query("wrong-key", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidApiKey));
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(state.metrics.get_snapshot().unauthorized_requests, 1);
    }
}
