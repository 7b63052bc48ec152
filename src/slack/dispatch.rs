//! Post, reply to, update, and delete messages.
//!
//! Every operation builds its options from a [Msg], makes exactly one call on
//! the [Transport], and hands back either Slack's echo or Slack's error as-is.
//! There's no retrying here; that's the caller's business.

use super::{
    channel::{ChannelId, Timestamp, UserId},
    error::SlackError,
    message::{build_options, build_update_options, Msg, PostedMessage, UpdatedMessage},
    transport::Transport,
};
use crate::config::Config;
use tracing::{debug, warn};
use url::Url;

pub struct Dispatcher<T> {
    pub(super) transport: T,
    pub(super) config: Config,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Dispatcher { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Post a message in a channel. If the message names a `target_user` it's
    /// posted ephemerally to them instead.
    pub async fn post(&self, msg: &Msg, channel: &ChannelId) -> Result<PostedMessage, SlackError> {
        match &msg.target_user {
            Some(user) => self.post_ephemeral(msg, channel, user).await,
            None => {
                debug!(%channel, "post");
                self.transport
                    .post_message(channel, build_options(msg))
                    .await
                    .map_err(|e| failed("post", e))
            }
        }
    }

    /// Reply in an existing thread.
    pub async fn post_thread(
        &self,
        msg: &Msg,
        channel: &ChannelId,
        thread_ts: &Timestamp,
    ) -> Result<PostedMessage, SlackError> {
        debug!(%channel, %thread_ts, "post_thread");
        self.transport
            .post_thread(channel, thread_ts, build_options(msg))
            .await
            .map_err(|e| failed("post_thread", e))
    }

    /// Post a message only `user` can see.
    pub async fn post_ephemeral(
        &self,
        msg: &Msg,
        channel: &ChannelId,
        user: &UserId,
    ) -> Result<PostedMessage, SlackError> {
        debug!(%channel, %user, "post_ephemeral");
        self.transport
            .post_ephemeral(channel, user, build_options(msg))
            .await
            .map_err(|e| failed("post_ephemeral", e))
    }

    /// Replace the content of the message at `ts`. A message with a
    /// `response_url` deletes the original instead; see [Self::delete].
    pub async fn update(
        &self,
        msg: &Msg,
        channel: &ChannelId,
        ts: &Timestamp,
    ) -> Result<UpdatedMessage, SlackError> {
        debug!(%channel, %ts, "update");
        self.transport
            .update_message(channel, ts, build_update_options(msg))
            .await
            .map_err(|e| failed("update", e))
    }

    /// Delete the message at `ts` via the `response_url` Slack supplied with
    /// the interaction that referenced it.
    pub async fn delete(
        &self,
        channel: &ChannelId,
        ts: &Timestamp,
        response_url: &Url,
    ) -> Result<UpdatedMessage, SlackError> {
        let msg = Msg {
            response_url: Some(response_url.clone()),
            ..Default::default()
        };

        self.update(&msg, channel, ts).await
    }
}

/// Trace a failure on its way back to the caller, unchanged.
fn failed(op: &'static str, e: SlackError) -> SlackError {
    warn!(op, error = %e, "Slack call failed");
    e
}
