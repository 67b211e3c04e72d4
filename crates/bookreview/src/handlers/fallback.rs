use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Any unmatched path or method.
pub async fn route_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}
