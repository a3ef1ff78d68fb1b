use std::fmt;

/// Error type raised by the completion action.
/// Every failure reaches the caller as one of these,
/// carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key or model was not supplied
    Configuration
  , /// Model is not on the allow-list
    InvalidModel
  , /// Client construction or the upstream call failed
    Upstream(String)
}

impl Error
{   /// Wrap any failure description as an upstream error
    pub fn upstream(msg: impl fmt::Display) -> Self
    {   Error::Upstream(msg.to_string())
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::Configuration => {
              write!(f, "OpenAI API key or model missing.")
            }
          , Error::InvalidModel => {
              write!(f,
                "Invalid model. Must be 'o1-mini', \
                 'o1-preview' or 'gpt-4o'."
              )
            }
          , Error::Upstream(msg) => {
              write!(f, "Failed to get response: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   Error::upstream(e)
    }
}
