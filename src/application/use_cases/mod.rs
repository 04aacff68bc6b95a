mod health;
mod relay_chat;

pub use health::*;
pub use relay_chat::*;
