//! The normalized chat message type.
//!
//! Every recognized line of a KakaoTalk export, regardless of which dialect
//! it was written in, becomes a [`ChatMessage`]. The assembler resolves the
//! absolute timestamp before construction, so a message is immutable and
//! self-contained once created.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use kakaopack::{ChatMessage, MessageType};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 1, 15, 15, 30, 0).unwrap();
//! let msg = ChatMessage::new("민수", "안녕!", ts, MessageType::Text);
//! assert_eq!(msg.sender, "민수");
//! assert_eq!(msg.hour, 15);
//! ```

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Coarse content classification for a chat message.
///
/// KakaoTalk exports flatten attachments to text placeholders (a bare
/// `사진`, `이모티콘`, a `파일:` prefix). The type records what the
/// placeholder stood for; [`System`](MessageType::System) marks
/// administrative notices that never reach the final message list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Organic text content
    Text,
    /// Photo or video placeholder
    Photo,
    /// Emoticon/sticker placeholder
    Emoticon,
    /// Message containing an http(s) URL
    Link,
    /// Shared file placeholder
    File,
    /// Join/leave/invite/deleted-message notice
    System,
}

impl MessageType {
    /// Returns `true` for placeholder types that stand in for media rather
    /// than text the sender typed (photo, emoticon, file).
    pub fn is_media_placeholder(self) -> bool {
        matches!(
            self,
            MessageType::Photo | MessageType::Emoticon | MessageType::File
        )
    }
}

/// A single parsed KakaoTalk message.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name of the message author |
/// | `content` | `String` | Text content, newline-joined for multi-line bubbles |
/// | `timestamp` | `DateTime<Utc>` | Absolute send time resolved by the assembler |
/// | `hour` | `u32` | Hour of day (0..=23), cached for hour-bucket statistics |
/// | `message_type` | [`MessageType`] | Content classification |
///
/// Timestamps serialize as RFC 3339 via serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    ///
    /// May contain newlines: continuation lines of a multi-line chat bubble
    /// are appended with `\n` by the assembler.
    pub content: String,

    /// When the message was sent.
    ///
    /// Resolved from the running date state plus the per-line time token,
    /// or taken directly from dialects that embed a full date.
    pub timestamp: DateTime<Utc>,

    /// Hour of day, 0..=23, derived from `timestamp`.
    pub hour: u32,

    /// Content classification.
    pub message_type: MessageType,
}

impl ChatMessage {
    /// Creates a new message. The `hour` field is derived from `timestamp`.
    pub fn new(
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
        message_type: MessageType,
    ) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            hour: timestamp.hour(),
            timestamp,
            message_type,
        }
    }

    /// Content length in characters (not bytes).
    ///
    /// Korean text is multi-byte in UTF-8; length thresholds in the
    /// statistics engine are defined over characters.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
