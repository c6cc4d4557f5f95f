use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::CompletionClient;
use crate::domain::{CompletionRequest, DomainError, Message, UpstreamError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Environment variable holding the upstream credential. Read per request, not
/// at construction: the process may run without a key until first use, and a
/// key exported later is picked up without a restart.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_tokens: u32,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the OpenAI chat-completions API (and compatible endpoints).
///
/// Implements [`CompletionClient`] so the use cases stay decoupled from
/// transport and serialization details. Non-2xx responses are classified
/// through [`UpstreamError::from_code`] using the vendor error code in the
/// response body.
///
/// Override the endpoint via `OPENAI_BASE_URL` to target any compatible
/// server. The credential comes from `OPENAI_API_KEY` at request time; its
/// absence is a recoverable per-request error, never a startup failure.
pub struct OpenAiClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            url,
        }
    }

    /// Construct from the environment:
    /// - `OPENAI_BASE_URL` — optional; defaults to `https://api.openai.com`
    pub fn from_env() -> Self {
        let base =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    fn api_key() -> Result<String, DomainError> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(DomainError::MissingCredential),
        }
    }

    /// Turn a non-2xx response body into a classified upstream error.
    fn classify_failure(status: reqwest::StatusCode, body: &str) -> DomainError {
        if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) {
            let code = parsed.error.code.unwrap_or_default();
            warn!(
                "OpenAiClient: API returned {status} (code: {code}): {}",
                parsed.error.message.unwrap_or_default()
            );
            return DomainError::Upstream(UpstreamError::from_code(&code));
        }

        warn!("OpenAiClient: API returned {status} with unparseable body");
        DomainError::Upstream(UpstreamError::Other(format!("http_{}", status.as_u16())))
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, DomainError> {
        let api_key = Self::api_key()?;

        let payload = ApiRequest {
            model: request.model(),
            messages: request.messages(),
            temperature: request.temperature(),
            max_tokens: request.max_tokens(),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::internal(format!("OpenAiClient: request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_failure(status, &body));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::internal(format!("OpenAiClient: failed to parse response: {e}"))
        })?;

        Ok(api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }
}
