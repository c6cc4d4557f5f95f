use std::sync::Arc;

use tracing::debug;

use crate::application::{AnalyzeImageUseCase, ChatUseCase, CompletionClient};
use crate::connector::adapter::{MockCompletion, OpenAiClient};

pub struct ContainerConfig {
    /// Override for the upstream endpoint. `None` reads `OPENAI_BASE_URL`
    /// from the environment, falling back to the hosted API.
    pub base_url: Option<String>,
    /// Swap in the canned mock client (offline runs, demos).
    pub mock_completion: bool,
}

/// Wires the completion client into the use cases.
///
/// The client is constructed once and shared; it holds no per-request mutable
/// state, so concurrent requests reuse it freely. The upstream credential is
/// not touched here: it is read per request inside the client.
pub struct Container {
    completion_client: Arc<dyn CompletionClient>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let completion_client: Arc<dyn CompletionClient> = if config.mock_completion {
            debug!("Using mock completion client");
            Arc::new(MockCompletion::new())
        } else {
            match config.base_url {
                Some(base_url) => Arc::new(OpenAiClient::new(base_url)),
                None => Arc::new(OpenAiClient::from_env()),
            }
        };

        Self { completion_client }
    }

    /// Build a container around an injected client (tests).
    pub fn with_client(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            completion_client: client,
        }
    }

    pub fn chat_use_case(&self) -> ChatUseCase {
        ChatUseCase::new(self.completion_client.clone())
    }

    pub fn analyze_use_case(&self) -> AnalyzeImageUseCase {
        AnalyzeImageUseCase::new(self.completion_client.clone())
    }
}
