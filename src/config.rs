//! Read-only settings for the logging side of a [crate::Dispatcher].
//!
//! Everything is optional: an unset log or error channel turns the respective
//! audit path into a no-op rather than an error.

use crate::slack::channel::{ChannelId, UserId};
use std::{error, fmt};

/// Whether and how incoming requests are logged to the log channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestLoggingConfig {
    pub enabled: bool,
    /// Omit the acting user from the log line.
    pub mask_user_id: bool,
    /// Don't log requests made by [Config::admin_id].
    pub exclude_admin: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub log_channel: Option<ChannelId>,
    pub err_channel: Option<ChannelId>,
    pub admin_id: Option<UserId>,
    pub request_logging: RequestLoggingConfig,
}

/// Sum type representing every way loading configuration can fail.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    InvalidBool { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(k) => write!(f, "Missing environment variable: {}", k),
            ConfigError::InvalidBool { key, value } => {
                write!(f, "Could not parse {} to bool: {}", key, value)
            }
        }
    }
}

impl error::Error for ConfigError {}

impl Config {
    /// Read configuration from the environment, honouring a `.env` file if
    /// present:
    ///
    /// - `SLACK_LOG_CHANNEL`
    /// - `SLACK_ERR_CHANNEL`
    /// - `SLACK_ADMIN_ID`
    /// - `REQUEST_LOGGING_ENABLED`
    /// - `REQUEST_LOGGING_MASK_USER_ID`
    /// - `REQUEST_LOGGING_EXCLUDE_ADMIN`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let flag = |key: &'static str| parse_bool(key, lookup(key));

        Ok(Config {
            log_channel: lookup("SLACK_LOG_CHANNEL").map(ChannelId),
            err_channel: lookup("SLACK_ERR_CHANNEL").map(ChannelId),
            admin_id: lookup("SLACK_ADMIN_ID").map(UserId),
            request_logging: RequestLoggingConfig {
                enabled: flag("REQUEST_LOGGING_ENABLED")?,
                mask_user_id: flag("REQUEST_LOGGING_MASK_USER_ID")?,
                exclude_admin: flag("REQUEST_LOGGING_EXCLUDE_ADMIN")?,
            },
        })
    }
}

/// Look up an environment variable via [dotenvy], treating empty values as
/// unset.
pub(crate) fn env_var(key: &'static str) -> Option<String> {
    dotenvy::var(key).ok().filter(|x| !x.is_empty())
}

fn parse_bool(key: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    match value {
        None => Ok(false),
        Some(x) => match x.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidBool { key, value: x }),
        },
    }
}
