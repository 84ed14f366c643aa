use axum::extract::OriginalUri;
use axum::http::Method;

use crate::response::ApiError;

/// Answers any path no route matches.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::not_found(format!("Path not found: {}", uri.path()))
}

/// Answers a verb the matched path does not support.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::method_not_allowed(format!("{method} not allowed for {}", uri.path()))
}
