//! Credential headers
//!
//! The service identifies callers by up to two tokens: the application id
//! (which client is calling) and the user's API key (on whose behalf).

use crate::error::{Error, Result};
use reqwest::header::HeaderValue;
use reqwest::RequestBuilder;

/// Header carrying the application token
pub const APPLICATION_ID_HEADER: &str = "x-application-id";

/// Header carrying the user token
pub const API_KEY_HEADER: &str = "x-api-key";

/// Application and user tokens, at least one of which is present
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    application_token: Option<String>,
    user_token: Option<String>,
}

impl Credentials {
    /// Create credentials from optional tokens.
    ///
    /// Empty strings are treated as absent. Fails with
    /// [`Error::MissingCredentials`] when neither token remains, and with a
    /// config error when a token cannot be sent as a header value.
    pub fn new(application_token: Option<String>, user_token: Option<String>) -> Result<Self> {
        let application_token = application_token.filter(|t| !t.is_empty());
        let user_token = user_token.filter(|t| !t.is_empty());

        if application_token.is_none() && user_token.is_none() {
            return Err(Error::MissingCredentials);
        }

        check_header_value(APPLICATION_ID_HEADER, application_token.as_deref())?;
        check_header_value(API_KEY_HEADER, user_token.as_deref())?;

        Ok(Self {
            application_token,
            user_token,
        })
    }

    /// Credentials with only an application token
    pub fn application(token: impl Into<String>) -> Result<Self> {
        Self::new(Some(token.into()), None)
    }

    /// Credentials with only a user token
    pub fn user(token: impl Into<String>) -> Result<Self> {
        Self::new(None, Some(token.into()))
    }

    pub fn application_token(&self) -> Option<&str> {
        self.application_token.as_deref()
    }

    pub fn user_token(&self) -> Option<&str> {
        self.user_token.as_deref()
    }

    /// Attach the configured identity headers to a request
    pub fn apply(&self, mut req: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.application_token {
            req = req.header(APPLICATION_ID_HEADER, token.as_str());
        }
        if let Some(token) = &self.user_token {
            req = req.header(API_KEY_HEADER, token.as_str());
        }
        req
    }
}

/// Reject tokens with characters not allowed in a header (e.g. newlines)
fn check_header_value(header: &str, token: Option<&str>) -> Result<()> {
    match token {
        Some(token) if HeaderValue::from_str(token).is_err() => Err(Error::config(format!(
            "{header} token contains characters not allowed in an HTTP header"
        ))),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("application_token", &self.application_token.as_ref().map(|_| "***"))
            .field("user_token", &self.user_token.as_ref().map(|_| "***"))
            .finish()
    }
}
