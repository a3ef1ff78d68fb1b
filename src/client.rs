use log::{debug, error, info};
use crate::config::{ActionConfig, OPENAI_API_BASE};
use crate::error::Error;
use crate::providers::openai::OpenAiClient;
use crate::request::{is_allowed_model, ActionInput, CompletionResult};
use crate::secret::Secret;

/// Completion action: validates inputs, issues one
/// chat-completion request and reshapes the reply.
#[derive(Debug, Clone)]
pub struct CompletionInvoker
{   api_base: String
}

impl Default for CompletionInvoker
{   fn default() -> Self
    {   CompletionInvoker::with_api_base(OPENAI_API_BASE)
    }
}

impl CompletionInvoker
{   pub fn with_api_base(api_base: impl Into<String>) -> Self
    {   CompletionInvoker
        {   api_base: api_base.into()
        }
    }

    /// Run the action.
    ///
    /// Fails with [`Error::Configuration`] when the key or model is
    /// empty, and with [`Error::InvalidModel`] when the model is not
    /// allowed; neither touches the network. Anything failing after
    /// that is reported as [`Error::Upstream`].
    pub async fn invoke(
      &self
    , prompt: &str
    , model: &str
    , api_key: &Secret
    ) -> Result<CompletionResult, Error>
    {   if api_key.is_empty() || model.is_empty()
        {   error!("API key or model missing");
            return Err(Error::Configuration);
        }

        if !is_allowed_model(model)
        {   error!("Rejected model: {}", model);
            return Err(Error::InvalidModel);
        }

        debug!("Invoking completion for model: {}", model);
        let response = self.call_upstream(prompt, model, api_key)
          .await
          .map_err(|e| match e
          {   Error::Upstream(_) => e
            , other => Error::upstream(other)
          })?;

        info!("Completion received from {}", model);
        Ok(CompletionResult { response })
    }

    /// Resolve defaults from `config`, then run the action
    pub async fn invoke_input(
      &self
    , input: ActionInput
    , config: &ActionConfig
    ) -> Result<CompletionResult, Error>
    {   let (prompt, model, api_key) = input.resolve(config);
        self.invoke(&prompt, &model, &api_key).await
    }

    async fn call_upstream(
      &self
    , prompt: &str
    , model: &str
    , api_key: &Secret
    ) -> Result<Option<String>, Error>
    {   let client = OpenAiClient::new(api_key, &self.api_base)?;
        client.create_chat_completion(model, prompt).await
    }
}

/// Run the action against the public OpenAI endpoint
pub async fn invoke(
  prompt: &str
, model: &str
, api_key: &Secret
) -> Result<CompletionResult, Error>
{   CompletionInvoker::default()
      .invoke(prompt, model, api_key)
      .await
}
