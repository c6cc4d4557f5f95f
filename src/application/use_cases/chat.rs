use std::sync::Arc;

use tracing::{debug, info};

use crate::application::CompletionClient;
use crate::domain::{CompletionRequest, Conversation, DomainError, Message, StagedImage};

pub const CHAT_MODEL: &str = "gpt-4o-mini";

/// Injected once, first, by the server. Never supplied by the client.
const SYSTEM_PROMPT: &str = "You are a helpful AI assistant that can analyze images \
and answer questions about them.";

const TEMPERATURE: f32 = 0.7;
const MAX_REPLY_TOKENS: u32 = 1000;

/// Forwards a conversation (plus an optionally staged image) to the completion
/// API and returns the assistant's reply. One upstream call per execution; no
/// retries, no streaming.
pub struct ChatUseCase {
    client: Arc<dyn CompletionClient>,
}

impl ChatUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Build the upstream message list: the system prompt, then a single user
    /// message holding only the image (when one is staged), then the client's
    /// messages in their original order.
    pub fn assemble_messages(
        conversation: &Conversation,
        image: Option<&StagedImage>,
    ) -> Vec<Message> {
        let mut messages = Vec::with_capacity(conversation.len() + 2);
        messages.push(Message::system(SYSTEM_PROMPT));

        if let Some(image) = image {
            messages.push(Message::user_image(image.as_base64()));
        }

        messages.extend(conversation.messages().iter().cloned());
        messages
    }

    pub async fn execute(
        &self,
        conversation: Conversation,
        image: Option<StagedImage>,
    ) -> Result<String, DomainError> {
        info!(
            "Chat request: {} client messages (image: {})",
            conversation.len(),
            image.is_some()
        );

        let messages = Self::assemble_messages(&conversation, image.as_ref());

        let request = CompletionRequest::new(CHAT_MODEL, messages)
            .with_temperature(TEMPERATURE)
            .with_max_tokens(MAX_REPLY_TOKENS);

        let reply = self.client.complete(request).await?;
        debug!("Chat reply: {} chars", reply.len());

        Ok(reply)
    }
}
