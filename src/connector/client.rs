use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{Conversation, Message, StagedImage};

/// Client side of the proxy endpoints, used by the `chat` and `analyze` CLI
/// commands. Failures carry the server's `error` string verbatim so the REPL
/// can surface it unchanged.
pub struct ProxyClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
}

#[derive(Serialize)]
struct AnalyzePayload<'a> {
    image: &'a str,
}

#[derive(Deserialize)]
struct ChatEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct AnalysisEnvelope {
    #[serde(default)]
    analysis: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    pub async fn chat(
        &self,
        conversation: &Conversation,
        image: Option<&StagedImage>,
    ) -> Result<String> {
        let payload = ChatPayload {
            messages: conversation.messages(),
            image: image.map(|i| i.as_base64()),
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let envelope: ChatEnvelope = response.json().await?;

        if let Some(error) = envelope.error {
            return Err(anyhow!(error));
        }
        if !status.is_success() {
            return Err(anyhow!("Error: {status}"));
        }

        Ok(envelope.message.unwrap_or_default())
    }

    pub async fn analyze(&self, image: &StagedImage) -> Result<String> {
        let payload = AnalyzePayload {
            image: image.as_base64(),
        };

        let response = self
            .client
            .post(format!("{}/api/analyze-image", self.base_url))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let envelope: AnalysisEnvelope = response.json().await?;

        if let Some(error) = envelope.error {
            return Err(anyhow!(error));
        }
        if !status.is_success() {
            return Err(anyhow!("Error: {status}"));
        }

        envelope
            .analysis
            .ok_or_else(|| anyhow!("Server returned no analysis"))
    }
}
