use std::{error, fmt};

/// Sum type representing every possible unexceptional fail state when talking
/// to Slack.
#[derive(Debug)]
pub enum SlackError {
    /// The request never produced a usable response, be it a connection
    /// failure or a body we couldn't decode.
    APIRequestFailed(reqwest::Error),
    /// Slack answered with `"ok": false`. The machine-readable code, e.g.
    /// `too_many_attachments`, is kept verbatim.
    APIResponseError(String),
}

impl SlackError {
    /// The error code Slack returned, if it got that far.
    pub fn code(&self) -> Option<&str> {
        match self {
            SlackError::APIResponseError(e) => Some(e.as_str()),
            SlackError::APIRequestFailed(_) => None,
        }
    }
}

impl From<reqwest::Error> for SlackError {
    fn from(e: reqwest::Error) -> Self {
        SlackError::APIRequestFailed(e)
    }
}

/// Slack's own error codes are displayed as-is so that callers can match on
/// them.
impl fmt::Display for SlackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlackError::APIRequestFailed(e) => write!(f, "Slack API request failed: {:?}", e),
            SlackError::APIResponseError(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for SlackError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SlackError::APIRequestFailed(e) => Some(e),
            SlackError::APIResponseError(_) => None,
        }
    }
}
