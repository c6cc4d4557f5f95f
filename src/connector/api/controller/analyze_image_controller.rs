use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::connector::api::schema;
use crate::connector::api::Container;
use crate::domain::{DomainError, UpstreamError};

use super::{error_response, INVALID_JSON, MISSING_CREDENTIAL};

const QUOTA_EXCEEDED: &str = "OpenAI API quota exceeded";
const RATE_LIMITED: &str = "Rate limit exceeded, please try again later";
const INVALID_API_KEY: &str = "Invalid OpenAI API key";
const MODEL_NOT_AVAILABLE: &str =
    "Please make sure you have access to GPT-4 Vision Preview in your OpenAI account";
const GENERIC_FAILURE: &str = "Error analyzing image";

/// `POST /api/analyze-image` — body `{image: string}` → `{analysis: string}`
/// or `{error: string}`.
///
/// Not called by the chat flow; an independent alternate path.
pub async fn analyze_image(State(container): State<Arc<Container>>, body: Bytes) -> Response {
    let value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Analysis request with malformed JSON body: {e}");
            return error_response(StatusCode::BAD_REQUEST, INVALID_JSON);
        }
    };

    let request = match schema::validate_analyze_request(value) {
        Ok(request) => request,
        Err(reason) => return error_response(StatusCode::BAD_REQUEST, &reason),
    };

    let use_case = container.analyze_use_case();
    match use_case.execute(request.image).await {
        Ok(analysis) => (StatusCode::OK, Json(json!({ "analysis": analysis }))).into_response(),
        Err(err) => map_error(err),
    }
}

fn map_error(err: DomainError) -> Response {
    let (status, message) = match err {
        DomainError::InvalidRequest(reason) => (StatusCode::BAD_REQUEST, reason),
        DomainError::MissingCredential => {
            (StatusCode::INTERNAL_SERVER_ERROR, MISSING_CREDENTIAL.into())
        }
        DomainError::Upstream(UpstreamError::QuotaExceeded) => {
            (StatusCode::INTERNAL_SERVER_ERROR, QUOTA_EXCEEDED.into())
        }
        DomainError::Upstream(UpstreamError::RateLimited) => {
            (StatusCode::INTERNAL_SERVER_ERROR, RATE_LIMITED.into())
        }
        DomainError::Upstream(UpstreamError::InvalidApiKey) => {
            (StatusCode::INTERNAL_SERVER_ERROR, INVALID_API_KEY.into())
        }
        DomainError::Upstream(UpstreamError::ModelNotAvailable) => {
            (StatusCode::INTERNAL_SERVER_ERROR, MODEL_NOT_AVAILABLE.into())
        }
        DomainError::Upstream(other) => {
            warn!("Analysis request failed upstream: {}", other.code());
            (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.into())
        }
        DomainError::Internal(reason) => {
            warn!("Analysis request failed: {reason}");
            (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.into())
        }
    };

    error_response(status, &message)
}
