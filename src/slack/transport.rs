//! The one seam between this crate and the network.

use super::{
    api::{APIResult, SlackClient},
    channel::{ChannelId, Timestamp, UserId},
    error::SlackError,
    message::{PostedMessage, UpdatedMessage},
    option::{DeleteOriginalRequest, MessageRequest, MsgOption},
};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// The minimal capability needed to dispatch messages. Each call is exactly one
/// request; errors come back exactly as the remote end reported them.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Post a message. Routes to `chat.postEphemeral` when the options carry
    /// [MsgOption::PostEphemeral].
    async fn post_message(
        &self,
        channel: &ChannelId,
        opts: Vec<MsgOption>,
    ) -> Result<PostedMessage, SlackError>;

    /// Update an existing message. When the options carry
    /// [MsgOption::DeleteOriginal] the message is deleted via its response URL
    /// instead.
    async fn update_message(
        &self,
        channel: &ChannelId,
        ts: &Timestamp,
        opts: Vec<MsgOption>,
    ) -> Result<UpdatedMessage, SlackError>;

    /// Reply in the thread anchored at `thread_ts`.
    async fn post_thread(
        &self,
        channel: &ChannelId,
        thread_ts: &Timestamp,
        mut opts: Vec<MsgOption>,
    ) -> Result<PostedMessage, SlackError> {
        opts.push(MsgOption::ThreadTs(thread_ts.clone()));
        self.post_message(channel, opts).await
    }

    /// Post a message only `user` can see.
    async fn post_ephemeral(
        &self,
        channel: &ChannelId,
        user: &UserId,
        mut opts: Vec<MsgOption>,
    ) -> Result<PostedMessage, SlackError> {
        opts.push(MsgOption::PostEphemeral(user.clone()));
        self.post_message(channel, opts).await
    }
}

/// <https://api.slack.com/methods/chat.postMessage#examples>
///
/// `chat.postEphemeral` omits the channel and names the timestamp `message_ts`.
#[derive(Deserialize)]
struct PostResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    channel: Option<ChannelId>,
    #[serde(alias = "message_ts")]
    ts: Timestamp,
}

/// <https://api.slack.com/methods/chat.update#examples>
#[derive(Deserialize)]
struct UpdateResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    channel: ChannelId,
    ts: Timestamp,
    #[serde(default)]
    text: String,
}

/// A bare acknowledgement, as returned by response URLs.
#[derive(Deserialize)]
struct AckResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
}

#[async_trait]
impl Transport for SlackClient {
    async fn post_message(
        &self,
        channel: &ChannelId,
        opts: Vec<MsgOption>,
    ) -> Result<PostedMessage, SlackError> {
        let path = if opts.iter().any(|o| o.as_ephemeral_target().is_some()) {
            "/chat.postEphemeral"
        } else {
            "/chat.postMessage"
        };
        debug!(%channel, path, "posting message");

        let res: APIResult<PostResponse> = self
            .post(path)
            .json(&MessageRequest::new(channel, None, &opts))
            .send()
            .await?
            .json()
            .await?;

        match res {
            APIResult::Ok(res) => Ok(PostedMessage {
                channel: res.channel.unwrap_or_else(|| channel.clone()),
                ts: res.ts,
            }),
            APIResult::Err(res) => Err(SlackError::APIResponseError(res.error)),
        }
    }

    async fn update_message(
        &self,
        channel: &ChannelId,
        ts: &Timestamp,
        opts: Vec<MsgOption>,
    ) -> Result<UpdatedMessage, SlackError> {
        if let Some(url) = opts.iter().find_map(MsgOption::as_delete_original) {
            debug!(%channel, %ts, "deleting message via response url");

            let res: APIResult<AckResponse> = self
                .post_to(url.clone())
                .json(&DeleteOriginalRequest {
                    delete_original: true,
                })
                .send()
                .await?
                .json()
                .await?;

            return match res {
                APIResult::Ok(_) => Ok(UpdatedMessage {
                    channel: channel.clone(),
                    ts: ts.clone(),
                    text: String::new(),
                }),
                APIResult::Err(res) => Err(SlackError::APIResponseError(res.error)),
            };
        }

        debug!(%channel, %ts, "updating message");

        let res: APIResult<UpdateResponse> = self
            .post("/chat.update")
            .json(&MessageRequest::new(channel, Some(ts), &opts))
            .send()
            .await?
            .json()
            .await?;

        match res {
            APIResult::Ok(res) => Ok(UpdatedMessage {
                channel: res.channel,
                ts: res.ts,
                text: res.text,
            }),
            APIResult::Err(res) => Err(SlackError::APIResponseError(res.error)),
        }
    }
}
