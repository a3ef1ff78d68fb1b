//! Configuration supplied to the action at process start

use serde::Deserialize;
use log::debug;
use crate::secret::Secret;

pub const OPENAI_API_BASE: &str
  = "https://api.openai.com/v1";

/// Defaults injected into the action.
/// Loaded once by the host; the action itself never reads
/// the environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActionConfig
{   /// API key used when the caller supplies none
    pub api_key: Secret
  , /// Model used when the caller supplies none
    pub default_model: String
  , /// Chat-completion API base URL
    pub api_base: String
}

impl Default for ActionConfig
{   fn default() -> Self
    {   ActionConfig
        {   api_key: Secret::default()
          , default_model: crate::request::DEFAULT_MODEL.to_string()
          , api_base: OPENAI_API_BASE.to_string()
        }
    }
}

impl ActionConfig
{   /// Load from `OPENAI_API_KEY`, `OPENAI_MODEL` and
    /// `OPENAI_BASE_URL`
    pub fn from_env() -> Self
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String>
    {   let mut config = ActionConfig::default();

        if let Some(key) = lookup("OPENAI_API_KEY")
        {   config.api_key = Secret::new(key);
        }
        if let Some(model) = lookup("OPENAI_MODEL")
          .filter(|m| !m.is_empty())
        {   config.default_model = model;
        }
        if let Some(base) = lookup("OPENAI_BASE_URL")
          .filter(|b| !b.is_empty())
        {   config.api_base = base;
        }

        debug!(
          "Loaded config: model={}, api_base={}, api_key set={}",
          config.default_model,
          config.api_base,
          !config.api_key.is_empty()
        );
        config
    }
}
