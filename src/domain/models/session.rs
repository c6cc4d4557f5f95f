use uuid::Uuid;

use crate::domain::DomainError;

use super::{Conversation, Message, StagedImage};

/// Token for the single request a session may have in flight.
///
/// Not `Clone`: handed out by [`ChatSession::begin_request`] and consumed by
/// `complete_request` / `fail_request`, so a finished request cannot be
/// settled twice.
#[derive(Debug, PartialEq, Eq)]
pub struct RequestToken(Uuid);

/// Client-side conversation store: the ordered message history, the staged
/// (not yet sent) image, and at most one outstanding request token.
///
/// Purely in-memory; dropped with the session. The token enforces one
/// in-flight chat request per session on the client side only — the server
/// deliberately does not mirror it, so two sessions (or two processes) can
/// still hit the endpoints concurrently.
#[derive(Debug, Default)]
pub struct ChatSession {
    conversation: Conversation,
    staged_image: Option<StagedImage>,
    pending: Option<Uuid>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn staged_image(&self) -> Option<&StagedImage> {
        self.staged_image.as_ref()
    }

    pub fn has_pending_request(&self) -> bool {
        self.pending.is_some()
    }

    pub fn stage_image(&mut self, image: StagedImage) {
        self.staged_image = Some(image);
    }

    pub fn clear_image(&mut self) -> Option<StagedImage> {
        self.staged_image.take()
    }

    /// Append the user's text and claim the in-flight slot.
    ///
    /// Fails while a previous request is still outstanding; the text is not
    /// appended in that case.
    pub fn begin_request(&mut self, text: impl Into<String>) -> Result<RequestToken, DomainError> {
        if self.pending.is_some() {
            return Err(DomainError::invalid_request(
                "a reply is still outstanding for this session",
            ));
        }

        self.conversation.push(Message::user(text.into()));
        let id = Uuid::new_v4();
        self.pending = Some(id);
        Ok(RequestToken(id))
    }

    /// Record the assistant's reply, release the token, and clear the staged
    /// image (it was attached to the request that just succeeded).
    pub fn complete_request(
        &mut self,
        token: RequestToken,
        reply: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.settle(token)?;
        self.conversation.push(Message::assistant(reply.into()));
        self.staged_image = None;
        Ok(())
    }

    /// Release the token after a failed request. The user's message and the
    /// staged image are kept so the user can retry.
    pub fn fail_request(&mut self, token: RequestToken) -> Result<(), DomainError> {
        self.settle(token)
    }

    fn settle(&mut self, token: RequestToken) -> Result<(), DomainError> {
        match self.pending {
            Some(id) if id == token.0 => {
                self.pending = None;
                Ok(())
            }
            _ => Err(DomainError::internal(
                "request token does not match the outstanding request",
            )),
        }
    }
}
