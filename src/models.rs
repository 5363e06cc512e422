use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    pub fn avatar(&self) -> &'static str {
        match self {
            Sender::User => "👤",
            Sender::Bot => "🤖",
        }
    }
}

/// A single entry in the conversation history. Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub is_markdown: bool,
}

impl Message {
    pub fn user(text: String) -> Self {
        Self { sender: Sender::User, text, is_markdown: false }
    }

    pub fn bot(text: String, is_markdown: bool) -> Self {
        Self { sender: Sender::Bot, text, is_markdown }
    }
}

/// Request body for the query endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct QueryRequest {
    pub query: String,
}

/// One structured unit inside a "mixed"/"rich" response payload.
/// Matches the backend content-block schema (internally tagged on `type`).
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph {
        #[serde(default)]
        text: Option<String>,
    },
    Bullet {
        #[serde(default)]
        text: Option<String>,
    },
    Topic {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        text: Option<String>,
    },
    Image {
        #[serde(default)]
        content: Option<String>,
        #[serde(default)]
        meta: Option<BlockMeta>,
    },
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlockMeta {
    #[serde(default)]
    pub caption: Option<String>,
}

impl ContentBlock {
    /// Renders the block as a markdown fragment. Missing fields render as
    /// empty strings rather than failing the whole payload.
    pub fn markdown_fragment(&self) -> String {
        match self {
            ContentBlock::Paragraph { text } => text.clone().unwrap_or_default(),
            ContentBlock::Bullet { text } => {
                format!("- {}", text.as_deref().unwrap_or_default())
            }
            ContentBlock::Topic { title, text } => format!(
                "### {}\n{}",
                title.as_deref().unwrap_or_default(),
                text.as_deref().unwrap_or_default()
            ),
            ContentBlock::Image { content, meta } => {
                let caption = meta
                    .as_ref()
                    .and_then(|m| m.caption.as_deref())
                    .unwrap_or_default();
                format!("![{}]({})", caption, content.as_deref().unwrap_or_default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_request_serialises_to_query_field() {
        let body = QueryRequest { query: "latest acquisitions".to_string() };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"query":"latest acquisitions"}"#
        );
    }

    #[test]
    fn sender_maps_to_css_class_and_avatar() {
        assert_eq!(Sender::User.as_str(), "user");
        assert_eq!(Sender::Bot.as_str(), "bot");
        assert_eq!(Sender::User.avatar(), "👤");
        assert_eq!(Sender::Bot.avatar(), "🤖");
    }

    #[test]
    fn user_messages_are_never_markdown() {
        let msg = Message::user("  hello \n".to_string());
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "  hello \n");
        assert!(!msg.is_markdown);
    }

    #[test]
    fn content_block_deserialises_by_tag() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"type":"bullet","text":"A"}"#).unwrap();
        assert_eq!(block.markdown_fragment(), "- A");

        let block: ContentBlock = serde_json::from_str(
            r#"{"type":"topic","title":"Funding","text":"Series B closed."}"#,
        )
        .unwrap();
        assert_eq!(block.markdown_fragment(), "### Funding\nSeries B closed.");
    }

    #[test]
    fn image_block_reads_caption_from_meta() {
        let block: ContentBlock = serde_json::from_str(
            r#"{"type":"image","content":"https://example.com/a.png","meta":{"caption":"chart"}}"#,
        )
        .unwrap();
        assert_eq!(block.markdown_fragment(), "![chart](https://example.com/a.png)");
    }

    #[test]
    fn image_block_without_meta_renders_empty_caption() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"type":"image","content":"https://example.com/a.png"}"#)
                .unwrap();
        assert_eq!(block.markdown_fragment(), "![](https://example.com/a.png)");
    }
}
