// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Public endpoints
        .route("/health", get(crate::handlers::health::health_handler))
        .route("/state", get(crate::handlers::states::list_states_handler))

        // Require API key
        .route("/auth/payload", get(crate::handlers::auth::login_payload_handler))
        .route("/metrics", get(crate::handlers::metrics::metrics_handler))
        .route("/state/add", post(crate::handlers::admin::state_add_handler))
        .route("/user/add", post(crate::handlers::admin::user_add_handler))

        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
