pub mod analyze_image_controller;
pub mod chat_controller;

pub use analyze_image_controller::analyze_image;
pub use chat_controller::chat;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub(crate) const INVALID_JSON: &str = "Invalid JSON in request body";
pub(crate) const MISSING_CREDENTIAL: &str = "OpenAI API key not configured";

/// Every failure leaves the endpoint boundary as `{error: string}` JSON.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
