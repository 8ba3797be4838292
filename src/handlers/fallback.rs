use crate::core::error::ApiError;
use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};

pub async fn fallback_handler(uri: Uri) -> Response {
    ApiError::NotFound(format!(
        "no route for {}. Valid endpoints: /health, /state, /auth/payload, /metrics, /state/add, /user/add",
        uri.path()
    ))
    .into_response()
}
