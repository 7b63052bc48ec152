//! Type definitions and helpers for the Slack API.

use crate::config::{self, ConfigError};
use serde::Deserialize;
use std::fmt;
use url::Url;

/// The base URL of the Slack API.
pub const API_BASE: &str = "https://slack.com/api";

/// A newtype wrapper around Slack access tokens.
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct SlackAccessToken(pub String);

/// Tokens are secrets; keep them out of logs.
impl fmt::Debug for SlackAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SlackAccessToken(..)")
    }
}

/// Convert a Slack access token to a `Bearer` `Authorization` header value.
///
/// ```
/// use courier::slack::api::{to_auth_header_val, SlackAccessToken};
///
/// let token = SlackAccessToken("xoxb-foo".into());
/// assert_eq!(to_auth_header_val(&token), "Bearer xoxb-foo");
/// ```
pub fn to_auth_header_val(t: &SlackAccessToken) -> String {
    format!("Bearer {}", t.0)
}

/// A reusable client that holds a connection pool internally, as per
/// [reqwest::Client]. Cloning is cheap.
#[derive(Clone)]
pub struct SlackClient {
    base: String,
    token: SlackAccessToken,
    http: reqwest::Client,
}

impl SlackClient {
    pub fn new(base: String, token: SlackAccessToken) -> Self {
        SlackClient {
            base,
            token,
            http: reqwest::Client::new(),
        }
    }

    /// Build a client from `$SLACK_TOKEN`, and optionally `$SLACK_API_BASE`,
    /// honouring a `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(config::env_var)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let token = lookup("SLACK_TOKEN").ok_or(ConfigError::Missing("SLACK_TOKEN"))?;
        let base = lookup("SLACK_API_BASE").unwrap_or_else(|| API_BASE.to_owned());

        Ok(Self::new(base, SlackAccessToken(token)))
    }

    /// Create a POST request to any Slack API endpoint, handling authentication.
    pub(super) fn post<T: ToString>(&self, path: T) -> reqwest::RequestBuilder {
        self.http
            .post(self.base.to_owned() + &path.to_string())
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(&self.token))
    }

    /// Create a POST request to an absolute URL Slack gave us, such as a
    /// `response_url`. These are pre-authorised, so no token is attached.
    pub(super) fn post_to(&self, url: Url) -> reqwest::RequestBuilder {
        self.http.post(url)
    }
}

/// Slack's API returns a common "untagged" response, representing whether a
/// request was successful.
///
/// ```json
/// {
///     "ok": true,
///     "channel": "C1H9RESGL",
///     "ts": "1503435956.000247"
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error": "too_many_attachments"
/// }
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
pub enum APIResult<T> {
    Ok(T),
    Err(ErrorResponse),
}

/// The universal response in case of an unsuccessful request.
// The `ok` field is checked here, and should be checked on responses too, so
// that neither shape can deserialise from the other.
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_false")]
    ok: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Deserialize)]
    struct Empty {
        #[allow(dead_code)]
        #[serde(deserialize_with = "crate::de::only_true")]
        ok: bool,
    }

    #[test]
    fn test_api_result_discriminates_on_ok() {
        let ok: APIResult<Empty> = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(matches!(ok, APIResult::Ok(_)));

        let err: APIResult<Empty> =
            serde_json::from_str(r#"{"ok": false, "error": "invalid_auth"}"#).unwrap();
        match err {
            APIResult::Err(e) => assert_eq!(e.error, "invalid_auth"),
            APIResult::Ok(_) => panic!("expected an error response"),
        }
    }

    #[test]
    fn test_token_is_redacted() {
        let token = SlackAccessToken("xoxb-secret".into());
        assert!(!format!("{:?}", token).contains("xoxb-secret"));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, String> = [("SLACK_TOKEN", "xoxb-foo".to_owned())].into();
        let client = SlackClient::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(client.base, API_BASE);
        assert_eq!(client.token, SlackAccessToken("xoxb-foo".into()));
    }

    #[test]
    fn test_from_lookup_missing_token() {
        let err = SlackClient::from_lookup(|_| None).err().unwrap();
        assert_eq!(err.to_string(), "Missing environment variable: SLACK_TOKEN");
    }
}
