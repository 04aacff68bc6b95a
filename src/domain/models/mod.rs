mod chat_reply;
mod chat_request;
mod completion;
mod conversation;
mod health;
mod relay_config;
mod system_prompt;

pub use chat_reply::*;
pub use chat_request::*;
pub use completion::*;
pub use conversation::*;
pub use health::*;
pub use relay_config::*;
pub use system_prompt::*;
