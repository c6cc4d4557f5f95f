use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::CompletionClient;
use crate::domain::{CompletionRequest, DomainError, UpstreamError};

/// What the mock should do on the next `complete` call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Reply(String),
    MissingCredential,
    Upstream(UpstreamError),
    Internal(String),
}

/// Deterministic [`CompletionClient`] for tests and offline runs
/// (`--mock-completion`).
///
/// Records the last request it received so tests can assert on the assembled
/// message list.
pub struct MockCompletion {
    behavior: MockBehavior,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::replying("This is a canned reply.")
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(reply.into()))
    }

    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            last_request: Mutex::new(None),
        }
    }

    /// The most recent request passed to `complete`, if any.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request
            .lock()
            .expect("mock lock poisoned")
            .clone()
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<String, DomainError> {
        *self.last_request.lock().expect("mock lock poisoned") = Some(request);

        match &self.behavior {
            MockBehavior::Reply(reply) => Ok(reply.clone()),
            MockBehavior::MissingCredential => Err(DomainError::MissingCredential),
            MockBehavior::Upstream(err) => Err(DomainError::Upstream(err.clone())),
            MockBehavior::Internal(msg) => Err(DomainError::internal(msg.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Message;

    #[tokio::test]
    async fn records_the_last_request() {
        let mock = MockCompletion::replying("ok");
        let request = CompletionRequest::new("gpt-4o-mini", vec![Message::user("hi")]);

        let reply = mock.complete(request).await.unwrap();
        assert_eq!(reply, "ok");

        let seen = mock.last_request().expect("request was recorded");
        assert_eq!(seen.model(), "gpt-4o-mini");
        assert_eq!(seen.messages().len(), 1);
    }

    #[tokio::test]
    async fn propagates_configured_failures() {
        let mock =
            MockCompletion::with_behavior(MockBehavior::Upstream(UpstreamError::RateLimited));
        let request = CompletionRequest::new("gpt-4o-mini", vec![]);

        let err = mock.complete(request).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Upstream(UpstreamError::RateLimited)
        ));
    }
}
