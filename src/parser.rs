//! KakaoTalk export parser.
//!
//! [`KakaoParser`] folds the classified line stream into a [`ParsedChat`]:
//! one pass over the input, an explicit running-date accumulator, no I/O
//! beyond the optional file read, and no shared state. Malformed content
//! never fails the parse; at worst it degrades to an empty [`ParsedChat`].
//!
//! # Example
//!
//! ```
//! use kakaopack::parser::KakaoParser;
//!
//! let export = "\
//! ----------------- 2024년 1월 15일 월요일 -----------------
//! [민수] [오후 3:30] 안녕!
//! [영희] [오후 3:32] ㅋㅋㅋ 안녕
//! [민수] [오후 3:33] 밥 먹었어?
//! ";
//!
//! let chat = KakaoParser::new().parse_str(export);
//! assert_eq!(chat.participants, vec!["민수", "영희"]);
//! assert_eq!(chat.total_message_count, 3);
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::dialect::{Classifier, LineClass};
use crate::error::Result;
use crate::message::{ChatMessage, MessageType};
use crate::system::{classify_content, is_system_message};

/// First and last message timestamps of a parsed chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Timestamp of the earliest message.
    pub start: DateTime<Utc>,
    /// Timestamp of the latest message.
    pub end: DateTime<Utc>,
}

/// The assembled result of parsing one export file.
///
/// Built once per parse and owned by the caller thereafter.
///
/// # Invariants
///
/// - `total_message_count == messages.len()`
/// - `date_range.start <= date_range.end`
/// - `participants` holds senders in order of first appearance and never
///   includes a sender whose only lines were system notices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedChat {
    /// Senders in order of first appearance.
    pub participants: Vec<String>,

    /// Retained messages, in file order unless
    /// [`ParserConfig::sort_by_timestamp`] is set.
    pub messages: Vec<ChatMessage>,

    /// Span between the earliest and latest message.
    ///
    /// Both ends fall back to the configured fallback date at midnight when
    /// nothing was parsed.
    pub date_range: DateRange,

    /// Number of retained messages. Always equals `messages.len()`.
    pub total_message_count: usize,

    /// Message counts keyed by sender.
    pub message_count_by_sender: HashMap<String, usize>,
}

impl ParsedChat {
    /// Returns `true` when no messages were recognized.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Parser for KakaoTalk `.txt` chat exports.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use kakaopack::parser::KakaoParser;
///
/// let parser = KakaoParser::new();
/// let chat = parser.parse(Path::new("KakaoTalk_Chat.txt"))?;
/// println!("{} messages", chat.total_message_count);
/// # Ok::<(), kakaopack::KakaopackError>(())
/// ```
pub struct KakaoParser {
    config: ParserConfig,
}

impl KakaoParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses an export file.
    ///
    /// # Errors
    ///
    /// Only I/O failures error; content problems degrade silently.
    pub fn parse(&self, path: &Path) -> Result<ParsedChat> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Parses export content already in memory.
    ///
    /// Infallible: any line that fits no dialect is treated as a
    /// continuation of the open message or silently discarded, and an
    /// unrecognizable file yields an empty [`ParsedChat`].
    pub fn parse_str(&self, content: &str) -> ParsedChat {
        let classifier = Classifier::new();

        // Running date: explicit accumulator, updated by separator lines
        // and by dialects that embed a full date in every message line.
        let mut current_date = self.config.fallback_date;
        let mut messages: Vec<ChatMessage> = Vec::new();

        for raw_line in content.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            match classifier.classify(line) {
                LineClass::DateSeparator(date) => {
                    current_date = date;
                }
                LineClass::Message(msg_line) => {
                    if let Some(date) = msg_line.date {
                        current_date = date;
                    }

                    let message_type = classify_content(&msg_line.content);

                    if message_type == MessageType::System && self.config.skip_system_messages {
                        continue;
                    }
                    if message_type.is_media_placeholder() && self.config.skip_media_placeholders {
                        continue;
                    }

                    // Classifier guarantees a valid clock reading; the
                    // midnight default is unreachable.
                    let time = NaiveTime::from_hms_opt(msg_line.hour, msg_line.minute, 0)
                        .unwrap_or_default();
                    let timestamp = current_date.and_time(time).and_utc();

                    messages.push(ChatMessage::new(
                        msg_line.sender,
                        msg_line.content,
                        timestamp,
                        message_type,
                    ));
                }
                LineClass::Unmatched => {
                    // Standalone system notices (PC exports write them
                    // without a sender) must not leak into bubble content.
                    if is_system_message(line) {
                        continue;
                    }
                    if let Some(last) = messages.last_mut() {
                        last.content.push('\n');
                        last.content.push_str(line);
                    }
                    // No open message: orphan line, dropped.
                }
            }
        }

        if self.config.sort_by_timestamp {
            messages.sort_by_key(|m| m.timestamp);
        }

        self.assemble(messages)
    }

    fn assemble(&self, messages: Vec<ChatMessage>) -> ParsedChat {
        let mut participants: Vec<String> = Vec::new();
        let mut message_count_by_sender: HashMap<String, usize> = HashMap::new();

        for msg in &messages {
            if !participants.contains(&msg.sender) {
                participants.push(msg.sender.clone());
            }
            *message_count_by_sender.entry(msg.sender.clone()).or_insert(0) += 1;
        }

        let fallback = self
            .config
            .fallback_date
            .and_time(NaiveTime::default())
            .and_utc();
        let start = messages.iter().map(|m| m.timestamp).min().unwrap_or(fallback);
        let end = messages.iter().map(|m| m.timestamp).max().unwrap_or(fallback);

        ParsedChat {
            participants,
            total_message_count: messages.len(),
            date_range: DateRange { start, end },
            message_count_by_sender,
            messages,
        }
    }
}

impl Default for KakaoParser {
    fn default() -> Self {
        Self::new()
    }
}
