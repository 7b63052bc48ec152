//! Send, update, delete, and log Slack messages on behalf of a chat-bot
//! backend.
//!
//! The interesting surface is [slack::dispatch::Dispatcher], which maps a
//! transport-agnostic [slack::message::Msg] onto Slack's wire options and
//! normalises what comes back. Audit logging to dedicated channels lives in
//! [slack::log], and [respond] carries the fixed-shape acknowledgements an
//! HTTP layer sends back to Slack.

pub mod config;
mod de;
pub mod respond;
pub mod slack;

pub use config::{Config, ConfigError, RequestLoggingConfig};
pub use slack::{
    ChannelId, Dispatcher, Msg, PostedMessage, SlackClient, SlackError, Timestamp, Transport,
    UpdatedMessage, UserId,
};
