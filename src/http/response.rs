//! Normalized responses
//!
//! Every call produces an [`ApiResponse`]: the transport status code paired
//! with the body, parsed as JSON when possible and kept as text otherwise.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Response body, either parsed JSON or the raw text when parsing failed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Body that parsed as JSON
    Json(Value),
    /// Body that was not valid JSON, unchanged
    Text(String),
}

impl ResponseBody {
    /// Parse `text` as JSON, falling back to the text itself
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Status code and normalized body of one call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// HTTP status code as received
    pub status: u16,
    /// Parsed-or-raw body
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Build a response from a status code and the body text
    pub fn from_parts(status: u16, text: String) -> Self {
        Self {
            status,
            body: ResponseBody::from_text(text),
        }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a JSON body into `T`
    ///
    /// The status code is not checked; a JSON error payload decodes like any
    /// other body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.body {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value.clone())?),
            ResponseBody::Text(_) => Err(Error::UnexpectedBody {
                status: self.status,
            }),
        }
    }

    pub fn into_body(self) -> ResponseBody {
        self.body
    }
}
