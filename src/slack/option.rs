//! Wire options, and how they fold into a single request body.
//!
//! <https://api.slack.com/methods/chat.postMessage#args>

use super::{
    block::{Attachment, Block},
    channel::{ChannelId, Timestamp, UserId},
};
use serde::Serialize;
use serde_with::skip_serializing_none;
use url::Url;

/// A single setting applied to an outgoing message.
#[derive(Clone, Debug, PartialEq)]
pub enum MsgOption {
    Text(String),
    Blocks(Vec<Block>),
    Attachments(Vec<Attachment>),
    AsUser(bool),
    UnfurlLinks,
    IconUrl(Url),
    /// Reply in the thread under the given parent.
    ThreadTs(Timestamp),
    /// Only show the message to this user.
    PostEphemeral(UserId),
    /// Delete the original message via its `response_url`. This is a request
    /// shape of its own; see [super::message::build_update_options].
    DeleteOriginal(Url),
}

impl MsgOption {
    pub(super) fn as_delete_original(&self) -> Option<&Url> {
        match self {
            MsgOption::DeleteOriginal(url) => Some(url),
            _ => None,
        }
    }

    pub(super) fn as_ephemeral_target(&self) -> Option<&UserId> {
        match self {
            MsgOption::PostEphemeral(user) => Some(user),
            _ => None,
        }
    }
}

/// Body shared by `chat.postMessage`, `chat.postEphemeral`, and `chat.update`.
#[skip_serializing_none]
#[derive(Debug, PartialEq, Serialize)]
pub(super) struct MessageRequest<'a> {
    channel: &'a ChannelId,
    ts: Option<&'a Timestamp>,
    text: Option<&'a str>,
    blocks: Option<&'a [Block]>,
    attachments: Option<&'a [Attachment]>,
    as_user: Option<bool>,
    unfurl_links: Option<bool>,
    icon_url: Option<&'a Url>,
    thread_ts: Option<&'a Timestamp>,
    user: Option<&'a UserId>,
}

impl<'a> MessageRequest<'a> {
    /// Fold options in order; a later option for the same field wins.
    /// [MsgOption::DeleteOriginal] has no place in this body and is skipped.
    pub(super) fn new(
        channel: &'a ChannelId,
        ts: Option<&'a Timestamp>,
        opts: &'a [MsgOption],
    ) -> Self {
        let mut req = MessageRequest {
            channel,
            ts,
            text: None,
            blocks: None,
            attachments: None,
            as_user: None,
            unfurl_links: None,
            icon_url: None,
            thread_ts: None,
            user: None,
        };

        for opt in opts {
            match opt {
                MsgOption::Text(x) => req.text = Some(x.as_str()),
                MsgOption::Blocks(xs) => req.blocks = Some(xs.as_slice()),
                MsgOption::Attachments(xs) => req.attachments = Some(xs.as_slice()),
                MsgOption::AsUser(x) => req.as_user = Some(*x),
                MsgOption::UnfurlLinks => req.unfurl_links = Some(true),
                MsgOption::IconUrl(x) => req.icon_url = Some(x),
                MsgOption::ThreadTs(x) => req.thread_ts = Some(x),
                MsgOption::PostEphemeral(x) => req.user = Some(x),
                MsgOption::DeleteOriginal(_) => {}
            }
        }

        req
    }
}

/// <https://api.slack.com/interactivity/handling#deleting_message_response>
#[derive(Serialize)]
pub(super) struct DeleteOriginalRequest {
    pub delete_original: bool,
}
