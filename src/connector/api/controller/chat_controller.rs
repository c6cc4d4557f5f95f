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

const MODEL_NOT_AVAILABLE: &str =
    "The GPT-4o-mini model is not available or you do not have access to it";
const INVALID_API_KEY: &str = "Invalid OpenAI API key";
const GENERIC_FAILURE: &str = "An error occurred while processing your request";

/// `POST /api/chat` — body `{messages: Message[], image?: string}` →
/// `{message: string}` or `{error: string}`.
pub async fn chat(State(container): State<Arc<Container>>, body: Bytes) -> Response {
    let value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Chat request with malformed JSON body: {e}");
            return error_response(StatusCode::BAD_REQUEST, INVALID_JSON);
        }
    };

    let request = match schema::validate_chat_request(value) {
        Ok(request) => request,
        Err(reason) => return error_response(StatusCode::BAD_REQUEST, &reason),
    };

    let use_case = container.chat_use_case();
    match use_case.execute(request.conversation, request.image).await {
        Ok(message) => (StatusCode::OK, Json(json!({ "message": message }))).into_response(),
        Err(err) => map_error(err),
    }
}

fn map_error(err: DomainError) -> Response {
    let (status, message) = match err {
        DomainError::InvalidRequest(reason) => (StatusCode::BAD_REQUEST, reason),
        DomainError::MissingCredential => {
            (StatusCode::INTERNAL_SERVER_ERROR, MISSING_CREDENTIAL.into())
        }
        DomainError::Upstream(UpstreamError::ModelNotAvailable) => {
            (StatusCode::INTERNAL_SERVER_ERROR, MODEL_NOT_AVAILABLE.into())
        }
        DomainError::Upstream(UpstreamError::InvalidApiKey) => {
            (StatusCode::INTERNAL_SERVER_ERROR, INVALID_API_KEY.into())
        }
        DomainError::Upstream(other) => {
            warn!("Chat request failed upstream: {}", other.code());
            (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.into())
        }
        DomainError::Internal(reason) => {
            warn!("Chat request failed: {reason}");
            (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.into())
        }
    };

    error_response(status, &message)
}
