//! Explicit request-body validation for the HTTP endpoints.
//!
//! Bodies arrive as untyped JSON; each validator either produces the typed
//! request or the exact user-facing rejection string the endpoint returns
//! with HTTP 400.

use serde_json::Value;

use crate::domain::{Conversation, Message, StagedImage};

pub const MESSAGES_NOT_ARRAY: &str = "Invalid request: messages must be an array";
pub const IMAGE_NOT_STRING: &str = "Invalid request: image must be a base64 string";
pub const NO_IMAGE_PROVIDED: &str = "No image provided";

/// Validated body of `POST /api/chat`.
#[derive(Debug)]
pub struct ChatRequestBody {
    pub conversation: Conversation,
    pub image: Option<StagedImage>,
}

/// Validated body of `POST /api/analyze-image`.
#[derive(Debug)]
pub struct AnalyzeRequestBody {
    pub image: StagedImage,
}

/// Accepts `{messages: Message[], image?: string}`.
///
/// `messages` must be present, an array, and deserializable as chat messages;
/// the whole class of shape failures maps to one rejection string. A missing,
/// null, or empty `image` means no image is staged.
pub fn validate_chat_request(body: Value) -> Result<ChatRequestBody, String> {
    let messages = match body.get("messages") {
        Some(value @ Value::Array(_)) => value.clone(),
        _ => return Err(MESSAGES_NOT_ARRAY.to_string()),
    };

    let messages: Vec<Message> =
        serde_json::from_value(messages).map_err(|_| MESSAGES_NOT_ARRAY.to_string())?;

    let image = match body.get("image") {
        None | Some(Value::Null) => None,
        Some(Value::String(b64)) if b64.is_empty() => None,
        Some(Value::String(b64)) => Some(StagedImage::new(b64.clone())),
        Some(_) => return Err(IMAGE_NOT_STRING.to_string()),
    };

    Ok(ChatRequestBody {
        conversation: Conversation::from_messages(messages),
        image,
    })
}

/// Accepts `{image: string}`; the image is required and must be a non-empty
/// string.
pub fn validate_analyze_request(body: Value) -> Result<AnalyzeRequestBody, String> {
    match body.get("image") {
        Some(Value::String(b64)) if !b64.is_empty() => Ok(AnalyzeRequestBody {
            image: StagedImage::new(b64.clone()),
        }),
        _ => Err(NO_IMAGE_PROVIDED.to_string()),
    }
}
