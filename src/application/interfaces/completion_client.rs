use async_trait::async_trait;

use crate::domain::{CompletionRequest, DomainError};

/// An interface for sending a buffered message list to a completion API and
/// receiving the assistant's reply text.
///
/// Implementors encapsulate transport, serialization, credential lookup, and
/// vendor-specific error classification. Consumers (the chat and analysis use
/// cases) remain decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue one completion call and return the assistant's text.
    ///
    /// Returns an empty string when the upstream reply carries no content;
    /// callers decide whether that is acceptable. A missing credential is
    /// reported as [`DomainError::MissingCredential`], a vendor-classified
    /// failure as [`DomainError::Upstream`].
    async fn complete(&self, request: CompletionRequest) -> Result<String, DomainError>;
}
