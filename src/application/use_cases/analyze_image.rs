use std::sync::Arc;

use tracing::{debug, info};

use crate::application::CompletionClient;
use crate::domain::{
    CompletionRequest, ContentPart, DomainError, Message, MessageContent, Role, StagedImage,
};

pub const VISION_MODEL: &str = "gpt-4-vision-preview";

const ANALYSIS_PROMPT: &str =
    "What do you see in this image? Please provide a detailed description.";

const MAX_ANALYSIS_TOKENS: u32 = 500;

/// Sends a single image with a fixed prompt to a vision-capable model and
/// returns the free-text description.
///
/// Not wired into the chat path: an independent alternate route, exercised by
/// the `analyze` CLI command and directly testable on its own.
pub struct AnalyzeImageUseCase {
    client: Arc<dyn CompletionClient>,
}

impl AnalyzeImageUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, image: StagedImage) -> Result<String, DomainError> {
        info!("Analyzing image ({} base64 chars)", image.as_base64().len());

        let message = Message::new(
            Role::User,
            MessageContent::Parts(vec![
                ContentPart::text(ANALYSIS_PROMPT),
                ContentPart::image_base64(image.as_base64()),
            ]),
        );

        let request =
            CompletionRequest::new(VISION_MODEL, vec![message]).with_max_tokens(MAX_ANALYSIS_TOKENS);

        let analysis = self.client.complete(request).await?;

        // An upstream reply with no content is an internal failure, not a
        // client input error.
        if analysis.is_empty() {
            return Err(DomainError::internal("No analysis generated"));
        }

        debug!("Analysis: {} chars", analysis.len());
        Ok(analysis)
    }
}
