pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AnalyzeImageUseCase, ChatUseCase, CompletionClient, EncodeImageUseCase, ImageSource,
    CHAT_MODEL, MAX_IMAGE_BYTES, VISION_MODEL,
};

pub use cli::Commands;

pub use connector::{
    router, serve, Container, ContainerConfig, FsImageFile, MockBehavior, MockCompletion,
    OpenAiClient, ProxyClient,
};

pub use domain::{
    ChatSession, CompletionRequest, ContentPart, Conversation, DomainError, EncodeError, Message,
    MessageContent, RequestToken, Role, StagedImage, UpstreamError,
};
