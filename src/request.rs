//! Request and response types for the completion action

use serde::{Deserialize, Serialize};
use crate::secret::Secret;

/// Models the action will submit upstream
pub const ALLOWED_MODELS: [&str; 3]
  = ["o1-mini", "o1-preview", "gpt-4o"];

/// Model used when the caller does not name one
pub const DEFAULT_MODEL: &str = "o1-mini";

pub fn is_allowed_model(model: &str) -> bool
{   ALLOWED_MODELS.contains(&model)
}

/// Action input as supplied by the caller.
/// `None` fields fall back to configured defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionInput
{   /// Prompt text, passed through as-is
    pub prompt: String
  , /// Model identifier
    #[serde(default)]
    pub model: Option<String>
  , /// API key
    #[serde(default)]
    pub api_key: Option<Secret>
}

impl ActionInput
{   pub fn new(prompt: impl Into<String>) -> Self
    {   ActionInput
        {   prompt: prompt.into()
          , model: None
          , api_key: None
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self
    {   self.model = Some(model.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<Secret>) -> Self
    {   self.api_key = Some(key.into());
        self
    }

    /// Fill missing fields from `config`.
    /// Explicit values, even empty ones, are kept.
    pub fn resolve(
      self
    , config: &crate::config::ActionConfig
    ) -> (String, String, Secret)
    {   let model = self.model
          .unwrap_or_else(|| config.default_model.clone());
        let api_key = self.api_key
          .unwrap_or_else(|| config.api_key.clone());
        (self.prompt, model, api_key)
    }
}

/// Result mapping returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult
{   /// Reply text of the first choice; `None` when the model
    /// returned no content
    #[serde(rename = "Response")]
    pub response: Option<String>
}
