use serde::{Deserialize, Serialize};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use log::{debug, trace, error};
use crate::error::Error;
use crate::secret::Secret;

// ===== Message Types =====

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenAiChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ReplyMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

/// Assistant message; `content` may be null
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyMessage
{   #[serde(default)]
    pub role: Option<String>
  , #[serde(default)]
    pub content: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorEnvelope
{   error: ApiErrorBody
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody
{   message: String
}

// ===== OpenAI Client =====

/// Chat-completion client bound to one API key
pub struct OpenAiClient
{   api_base: String
  , http_client: reqwest::Client
}

impl OpenAiClient
{   /// Build a client that sends `api_key` as a bearer token
    pub fn new(api_key: &Secret, api_base: &str)
      -> Result<Self, Error>
    {   debug!("Creating OpenAiClient for {}", api_base);

        let mut auth = HeaderValue::from_str(
          &format!("Bearer {}", api_key.expose())
        ).map_err(|e| {
          error!("API key is not a valid header value");
          Error::upstream(e)
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http_client = reqwest::Client::builder()
          .default_headers(headers)
          .build()?;

        Ok(OpenAiClient
        {   api_base: api_base.trim_end_matches('/').to_string()
          , http_client
        })
    }

    /// Submit `prompt` as a single user message to `model`.
    /// Returns the first choice's content.
    pub async fn create_chat_completion(
      &self
    , model: &str
    , prompt: &str
    ) -> Result<Option<String>, Error>
    {   let request = OpenAiChatRequest
        {   model: model.to_string()
          , messages: vec![
              ChatMessage
              {   role: "user".to_string()
                , content: prompt.to_string()
              }
            ]
        };

        debug!(
          "Sending chat completion: model={}, prompt.len={}",
          model, prompt.len()
        );

        let response = self.http_client
          .post(format!("{}/chat/completions", self.api_base))
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::upstream(e)
          })?;

        let status = response.status();
        trace!("OpenAI response status: {}", status);

        if !status.is_success()
        {   let body = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            let detail = serde_json::from_str::<ApiErrorEnvelope>(&body)
              .map(|env| env.error.message)
              .unwrap_or(body);
            error!("OpenAI API error ({}): {}", status, detail);
            return Err(Error::Upstream(
              format!("{}: {}", status, detail)
            ));
        }

        let chat_response: OpenAiChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            Error::upstream(e)
          })?;

        let choice = chat_response.choices
          .into_iter()
          .next()
          .ok_or_else(|| {
            error!("No choices in response");
            Error::upstream("response contained no choices")
          })?;

        trace!("finish_reason: {:?}", choice.finish_reason);
        Ok(choice.message.content)
    }
}
