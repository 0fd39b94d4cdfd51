//! Chat-completion integration and demo-mode fallbacks

pub mod client;
pub mod prompts;

pub use client::{user_facing_message, ChatCompletionClient};
