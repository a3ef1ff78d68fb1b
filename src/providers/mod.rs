//! Upstream chat-completion providers

pub mod openai;

pub use openai::OpenAiClient;
