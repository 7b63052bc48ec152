//! Post, update, and delete messages in Slack, and log to dedicated channels.
//!
//! Callers build a [message::Msg], hand it to a [dispatch::Dispatcher], and
//! get back either what Slack echoed or the error Slack returned, untouched.
//! The network sits behind [transport::Transport] so that everything above it
//! can be exercised without one.

pub mod api;
pub mod block;
pub mod channel;
pub mod dispatch;
pub mod error;
#[cfg(test)]
mod fake;
pub mod log;
pub mod message;
pub mod option;
pub mod transport;

pub use api::{SlackAccessToken, SlackClient};
pub use channel::{ChannelId, Timestamp, UserId};
pub use dispatch::Dispatcher;
pub use error::SlackError;
pub use message::{Msg, PostedMessage, UpdatedMessage};
pub use transport::Transport;
