//! Single-shot OpenAI chat-completion action.
//!
//! Takes a prompt, a model from a fixed allow-list and an API key,
//! sends one user message upstream and returns the reply as
//! `{"Response": <text or null>}`. No conversation history is kept;
//! callers that need context must include it in the prompt.

pub mod error;
pub mod secret;
pub mod config;
pub mod providers;
pub mod request;
pub mod client;

pub use client::{invoke, CompletionInvoker};
pub use config::ActionConfig;
pub use error::Error;
pub use request::
{   ActionInput
  , CompletionResult
  , ALLOWED_MODELS
  , DEFAULT_MODEL
};
pub use secret::Secret;
