//! Fixed-shape acknowledgements for Slack's interactive callbacks.
//!
//! Slack expects a response within three seconds of an interaction. These
//! helpers build that response for any [axum] handler; the message posted in
//! the response can replace or delete the message the interaction came from.
//!
//! None of these work in response to block actions, which ignore the body.

use crate::slack::block::{Attachment, Block};
use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Who can see a message sent in a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    InChannel,
    Ephemeral,
}

/// <https://api.slack.com/interactivity/handling#message_responses>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize)]
pub struct ResponseMessage {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    pub response_type: Option<ResponseType>,
    pub replace_original: bool,
    pub delete_original: bool,
}

/// Acknowledge with an empty `200`.
pub fn empty_ok() -> StatusCode {
    StatusCode::OK
}

/// Respond with `msg` exactly as given.
pub fn send_resp(msg: ResponseMessage) -> (StatusCode, Json<ResponseMessage>) {
    (StatusCode::OK, Json(msg))
}

/// Respond with `msg`, replacing the original message with it.
pub fn replace_original(mut msg: ResponseMessage) -> (StatusCode, Json<ResponseMessage>) {
    msg.replace_original = true;
    msg.delete_original = false;

    send_resp(msg)
}

/// Respond with an empty message which deletes the original.
pub fn ok_and_delete_original() -> (StatusCode, Json<ResponseMessage>) {
    send_resp(ResponseMessage {
        delete_original: true,
        ..Default::default()
    })
}
