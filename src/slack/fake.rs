//! An in-memory [Transport] that records every call and answers from a
//! script.

use super::{
    channel::{ChannelId, Timestamp},
    error::SlackError,
    message::{PostedMessage, UpdatedMessage},
    option::MsgOption,
    transport::Transport,
};
use async_trait::async_trait;
use std::{collections::VecDeque, sync::Mutex};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Post {
        channel: ChannelId,
        opts: Vec<MsgOption>,
    },
    Update {
        channel: ChannelId,
        ts: Timestamp,
        opts: Vec<MsgOption>,
    },
}

#[derive(Default)]
pub struct FakeTransport {
    calls: Mutex<Vec<Call>>,
    // One entry per call; `Some(code)` fails with that code. Calls beyond the
    // end of the script succeed.
    script: Mutex<VecDeque<Option<&'static str>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripted<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Option<&'static str>>,
    {
        FakeTransport {
            calls: Mutex::default(),
            script: Mutex::new(outcomes.into_iter().collect()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<usize, SlackError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        let n = calls.len();

        match self.script.lock().unwrap().pop_front().flatten() {
            Some(code) => Err(SlackError::APIResponseError(code.to_owned())),
            None => Ok(n),
        }
    }
}

/// Deterministic timestamps, unique per call.
pub fn ts_for(n: usize) -> Timestamp {
    Timestamp(format!("1503435956.{:06}", n))
}

#[async_trait]
impl Transport for FakeTransport {
    async fn post_message(
        &self,
        channel: &ChannelId,
        opts: Vec<MsgOption>,
    ) -> Result<PostedMessage, SlackError> {
        let n = self.record(Call::Post {
            channel: channel.clone(),
            opts,
        })?;

        Ok(PostedMessage {
            channel: channel.clone(),
            ts: ts_for(n),
        })
    }

    async fn update_message(
        &self,
        channel: &ChannelId,
        ts: &Timestamp,
        opts: Vec<MsgOption>,
    ) -> Result<UpdatedMessage, SlackError> {
        let text = opts
            .iter()
            .find_map(|o| match o {
                MsgOption::Text(x) => Some(x.clone()),
                _ => None,
            })
            .unwrap_or_default();

        self.record(Call::Update {
            channel: channel.clone(),
            ts: ts.clone(),
            opts,
        })?;

        Ok(UpdatedMessage {
            channel: channel.clone(),
            ts: ts.clone(),
            text,
        })
    }
}
