//! Identifiers Slack hands out and expects back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Channels are referred to by their underlying ID rather than their name,
/// which can change. It can be found in the UI by copying a link to the
/// channel.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

/// A workspace member, e.g. `U012AB3CD`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

/// Slack identifies a message by its channel plus this timestamp, e.g.
/// `1503435956.000247`. It's also the anchor for threaded replies.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub String);

macro_rules! display_inner {
    ($($t:ty),*) => {
        $(
            /// Format without the surrounding newtype wrapper.
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )*
    };
}

display_inner!(ChannelId, UserId, Timestamp);
