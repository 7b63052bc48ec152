use serde::ser::SerializeStruct;
use serde::{ser, Serialize};

/// Slack's block API is its most modern, and allows us to mix rich formatting
/// with foreign plaintext. The common cases are spelled out; anything else can
/// be passed through as [Block::Raw].
///
/// <https://api.slack.com/reference/block-kit/blocks>
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Header(String),
    Plaintext(String),
    /// "mrkdown" is Slack's alternative to Markdown.
    ///
    /// <https://api.slack.com/reference/surfaces/formatting#basics>
    Mrkdwn(String),
    Divider,
    /// Any other block, serialised exactly as given.
    Raw(serde_json::Value),
}

/// A legacy secondary attachment. We never look inside these.
///
/// <https://api.slack.com/reference/messaging/attachments>
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Attachment(pub serde_json::Value);

#[derive(Serialize)]
struct RawTextBlock<'a> {
    #[serde(rename = "type")]
    typ: &'static str,
    text: &'a String,
}

impl ser::Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let (typ, inner) = match self {
            Block::Raw(x) => return x.serialize(serializer),

            Block::Divider => {
                let mut state = serializer.serialize_struct("Block", 1)?;
                state.serialize_field("type", "divider")?;
                return state.end();
            }

            Block::Header(x) => (
                "header",
                RawTextBlock {
                    typ: "plain_text",
                    text: x,
                },
            ),

            Block::Mrkdwn(x) => (
                "section",
                RawTextBlock {
                    typ: "mrkdwn",
                    text: x,
                },
            ),

            Block::Plaintext(x) => (
                "section",
                RawTextBlock {
                    typ: "plain_text",
                    text: x,
                },
            ),
        };

        let mut state = serializer.serialize_struct("Block", 2)?;
        state.serialize_field("type", typ)?;
        state.serialize_field("text", &inner)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_blocks() {
        assert_eq!(
            serde_json::to_value(Block::Mrkdwn("*hi*".into())).unwrap(),
            json!({ "type": "section", "text": { "type": "mrkdwn", "text": "*hi*" } })
        );

        assert_eq!(
            serde_json::to_value(Block::Header("Title".into())).unwrap(),
            json!({ "type": "header", "text": { "type": "plain_text", "text": "Title" } })
        );
    }

    #[test]
    fn test_divider() {
        assert_eq!(
            serde_json::to_value(Block::Divider).unwrap(),
            json!({ "type": "divider" })
        );
    }

    #[test]
    fn test_raw_passthrough() {
        let raw = json!({
            "type": "actions",
            "elements": [{ "type": "button", "action_id": "approve" }]
        });

        assert_eq!(serde_json::to_value(Block::Raw(raw.clone())).unwrap(), raw);
    }
}
