//! Endpoint-level tests for `POST /api/chat`: JSON parsing, schema
//! validation, upstream message assembly, and error mapping.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};

use imagechat::connector::api::controller::chat;
use imagechat::{
    Container, ContentPart, MessageContent, MockBehavior, MockCompletion, Role, UpstreamError,
    CHAT_MODEL,
};

async fn post_chat(mock: Arc<MockCompletion>, body: &str) -> (StatusCode, Value) {
    let container = Arc::new(Container::with_client(mock));
    let response = chat(State(container), Bytes::from(body.to_owned())).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    (status, serde_json::from_slice(&bytes).expect("JSON body"))
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let mock = Arc::new(MockCompletion::new());
    let (status, body) = post_chat(mock.clone(), "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid JSON in request body"}));
    assert!(mock.last_request().is_none(), "nothing went upstream");
}

#[tokio::test]
async fn missing_messages_field_returns_400() {
    let mock = Arc::new(MockCompletion::new());
    let (status, body) = post_chat(mock, r#"{"image": "QUJD"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Invalid request: messages must be an array"})
    );
}

#[tokio::test]
async fn non_array_messages_returns_400() {
    let mock = Arc::new(MockCompletion::new());
    let (status, body) = post_chat(mock, r#"{"messages": "hello"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Invalid request: messages must be an array"})
    );
}

#[tokio::test]
async fn reply_is_wrapped_in_a_message_field() {
    let mock = Arc::new(MockCompletion::replying("hello back"));
    let (status, body) = post_chat(
        mock,
        r#"{"messages": [{"role": "user", "content": "hello"}]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "hello back"}));
}

#[tokio::test]
async fn empty_conversation_sends_only_the_system_prompt() {
    let mock = Arc::new(MockCompletion::new());
    let (status, _) = post_chat(mock.clone(), r#"{"messages": []}"#).await;
    assert_eq!(status, StatusCode::OK);

    let request = mock.last_request().expect("upstream call was made");
    assert_eq!(request.model(), CHAT_MODEL);
    assert_eq!(request.temperature(), Some(0.7));
    assert_eq!(request.max_tokens(), 1000);
    assert_eq!(request.messages().len(), 1);
    assert_eq!(request.messages()[0].role(), Role::System);
}

#[tokio::test]
async fn staged_image_becomes_a_user_message_after_the_system_prompt() {
    let mock = Arc::new(MockCompletion::new());
    let (status, _) = post_chat(
        mock.clone(),
        r#"{"messages": [{"role": "user", "content": "what is this?"}], "image": "QUJD"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let request = mock.last_request().expect("upstream call was made");
    let messages = request.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].role(), Role::System);
    assert_eq!(messages[1].role(), Role::User);
    match messages[1].content() {
        MessageContent::Parts(parts) => {
            assert_eq!(parts.len(), 1);
            assert_eq!(parts[0], ContentPart::image_base64("QUJD"));
        }
        MessageContent::Text(_) => panic!("image message should be part content"),
    }
    assert_eq!(messages[2].text(), Some("what is this?"));
}

#[tokio::test]
async fn missing_credential_returns_500_with_fixed_message() {
    let mock = Arc::new(MockCompletion::with_behavior(
        MockBehavior::MissingCredential,
    ));
    let (status, body) = post_chat(mock, r#"{"messages": []}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "OpenAI API key not configured"}));
}

#[tokio::test]
async fn model_not_found_gets_its_own_message() {
    let mock = Arc::new(MockCompletion::with_behavior(MockBehavior::Upstream(
        UpstreamError::ModelNotAvailable,
    )));
    let (status, body) = post_chat(mock, r#"{"messages": []}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "The GPT-4o-mini model is not available or you do not have access to it"})
    );
}

#[tokio::test]
async fn invalid_api_key_gets_its_own_message() {
    let mock = Arc::new(MockCompletion::with_behavior(MockBehavior::Upstream(
        UpstreamError::InvalidApiKey,
    )));
    let (status, body) = post_chat(mock, r#"{"messages": []}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Invalid OpenAI API key"}));
}

#[tokio::test]
async fn other_upstream_failures_map_to_the_generic_message() {
    for behavior in [
        MockBehavior::Upstream(UpstreamError::RateLimited),
        MockBehavior::Upstream(UpstreamError::QuotaExceeded),
        MockBehavior::Upstream(UpstreamError::Other("context_length_exceeded".into())),
        MockBehavior::Internal("connection reset".into()),
    ] {
        let mock = Arc::new(MockCompletion::with_behavior(behavior));
        let (status, body) = post_chat(mock, r#"{"messages": []}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": "An error occurred while processing your request"})
        );
    }
}
