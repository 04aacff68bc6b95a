pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, HealthUseCase, RelayChatUseCase};

pub use cli::Commands;

pub use connector::{
    build_router, serve, AnthropicClient, ApiError, ChatSuccessBody, Container, ContainerConfig,
    ErrorBody, HealthBody, MockChatClient, ServerOptions, CHAT_PATH, DEFAULT_BASE_URL,
    HEALTH_PATH,
};

pub use domain::{
    ChatReply, ChatRequest, CompletionRequest, ConversationTurn, DomainError, HealthStatus,
    RelayConfig, Role, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SERVICE_NAME,
    DEFAULT_SYSTEM_PROMPT,
};
