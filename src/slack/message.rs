//! The transport-agnostic message, and how it maps onto [MsgOption]s.

use super::{
    block::{Attachment, Block},
    channel::{ChannelId, Timestamp, UserId},
    option::MsgOption,
};
use url::Url;

/// An intermediary message used for posting, updating, and deleting.
///
/// Setting both `as_user` and `icon_url` is allowed; Slack decides which one
/// takes effect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Msg {
    pub body: String,
    pub blocks: Vec<Block>,
    pub attachments: Vec<Attachment>,
    /// Post as the authenticated bot identity.
    pub as_user: bool,
    /// Only set if you want to post ephemerally.
    pub target_user: Option<UserId>,
    /// Only set if you want to delete the message this is a response to.
    pub response_url: Option<Url>,
    pub icon_url: Option<Url>,
}

impl Msg {
    /// A message with nothing but a body.
    pub fn text<T: Into<String>>(body: T) -> Self {
        Msg {
            body: body.into(),
            ..Default::default()
        }
    }

    /// A message made up of blocks alone.
    pub fn blocks(blocks: Vec<Block>) -> Self {
        Msg {
            blocks,
            ..Default::default()
        }
    }
}

/// What Slack echoes back for a successful post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostedMessage {
    pub channel: ChannelId,
    pub ts: Timestamp,
}

/// What Slack echoes back for a successful update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdatedMessage {
    pub channel: ChannelId,
    pub ts: Timestamp,
    pub text: String,
}

/// The canonical option list for a message. The order is stable.
pub fn build_options(msg: &Msg) -> Vec<MsgOption> {
    let mut opts = Vec::with_capacity(6);

    opts.push(MsgOption::Text(msg.body.clone()));
    opts.push(MsgOption::Blocks(msg.blocks.clone()));

    if !msg.attachments.is_empty() {
        opts.push(MsgOption::Attachments(msg.attachments.clone()));
    }

    opts.push(MsgOption::AsUser(msg.as_user));
    opts.push(MsgOption::UnfurlLinks);

    if let Some(icon) = &msg.icon_url {
        opts.push(MsgOption::IconUrl(icon.clone()));
    }

    opts
}

/// Options for an update. A `response_url` replaces everything else with a
/// lone [MsgOption::DeleteOriginal].
pub fn build_update_options(msg: &Msg) -> Vec<MsgOption> {
    match &msg.response_url {
        Some(url) => vec![MsgOption::DeleteOriginal(url.clone())],
        None => build_options(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;
    use serde_json::json;

    fn url(path: &str) -> Url {
        let mut u = Url::parse("https://hooks.slack.com").unwrap();
        u.set_path(path);
        u
    }

    #[test]
    fn test_build_options_order() {
        let msg = Msg {
            body: "Hey!".into(),
            blocks: vec![Block::Divider],
            attachments: vec![Attachment(json!({ "text": "legacy" }))],
            as_user: true,
            icon_url: Some(url("/icon.png")),
            ..Default::default()
        };

        assert_eq!(
            build_options(&msg),
            vec![
                MsgOption::Text("Hey!".into()),
                MsgOption::Blocks(vec![Block::Divider]),
                MsgOption::Attachments(vec![Attachment(json!({ "text": "legacy" }))]),
                MsgOption::AsUser(true),
                MsgOption::UnfurlLinks,
                MsgOption::IconUrl(url("/icon.png")),
            ]
        );
    }

    #[test]
    fn test_build_options_skips_absent() {
        assert_eq!(
            build_options(&Msg::text("Hey!")),
            vec![
                MsgOption::Text("Hey!".into()),
                MsgOption::Blocks(vec![]),
                MsgOption::AsUser(false),
                MsgOption::UnfurlLinks,
            ]
        );
    }

    #[test]
    fn test_update_without_response_url() {
        let msg = Msg::text("edited");
        assert_eq!(build_update_options(&msg), build_options(&msg));
    }

    quickcheck! {
        fn prop_response_url_replaces_everything(
            body: String,
            as_user: bool,
            path: String,
            with_icon: bool
        ) -> bool {
            let target = url(&format!("/commands/{}", path));
            let msg = Msg {
                body,
                blocks: vec![Block::Mrkdwn("ignored".into())],
                as_user,
                icon_url: with_icon.then(|| url("/icon.png")),
                response_url: Some(target.clone()),
                ..Default::default()
            };

            build_update_options(&msg) == vec![MsgOption::DeleteOriginal(target)]
        }

        fn prop_unfurl_always_on(body: String, as_user: bool) -> bool {
            let msg = Msg { body, as_user, ..Default::default() };
            build_options(&msg).contains(&MsgOption::UnfurlLinks)
        }
    }
}
