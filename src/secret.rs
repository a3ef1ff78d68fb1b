//! Opaque credential wrapper

use serde::Deserialize;
use std::fmt;

/// A sensitive string, such as an API key.
///
/// The value never shows up in `Debug` or `Display` output and can
/// only be read through [`Secret::expose`].
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret
{   pub fn new(value: impl Into<String>) -> Self
    {   Secret(value.into())
    }

    /// Borrow the raw value
    pub fn expose(&self) -> &str
    {   &self.0
    }

    pub fn is_empty(&self) -> bool
    {   self.0.is_empty()
    }
}

impl fmt::Debug for Secret
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   write!(f, "Secret(****)")
    }
}

impl fmt::Display for Secret
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   write!(f, "****")
    }
}

impl From<String> for Secret
{   fn from(s: String) -> Self
    {   Secret(s)
    }
}

impl From<&str> for Secret
{   fn from(s: &str) -> Self
    {   Secret(s.to_string())
    }
}
