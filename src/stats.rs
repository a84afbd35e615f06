//! Per-participant conversation statistics.
//!
//! The statistics engine walks the full interleaved message list (some
//! metrics, like initiation rate, need to see everyone's messages) and
//! derives a [`ParticipantStats`] per sender. All rates are 0..=1 and every
//! zero-denominator case is guarded: a participant with no messages gets
//! zeroes, never NaN.
//!
//! Thresholds come from [`StatsConfig`]; the defaults are documented there.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::StatsConfig;
use crate::message::ChatMessage;
use crate::parser::ParsedChat;

/// Repeated Korean laughter/crying jamo, or a character in the common
/// Unicode emoji blocks.
const EMOJI_PATTERN: &str = r"[ㅋㅎㅠㅜ]{2,}|[\x{1F300}-\x{1FAFF}]|[\x{2600}-\x{27BF}]";

/// Response-latency category.
///
/// Derived from the average gap between someone else's message and the
/// participant's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSpeed {
    /// Average reply gap under 5 minutes
    Fast,
    /// Average reply gap under 30 minutes
    Normal,
    /// Average reply gap of 30 minutes or more
    Slow,
    /// No qualifying replies observed
    Unknown,
}

impl ResponseSpeed {
    fn from_avg_minutes(avg: Option<f64>) -> Self {
        match avg {
            None => ResponseSpeed::Unknown,
            Some(m) if m < 5.0 => ResponseSpeed::Fast,
            Some(m) if m < 30.0 => ResponseSpeed::Normal,
            Some(_) => ResponseSpeed::Slow,
        }
    }

    /// Korean display label, as the statistics summary prints it.
    pub fn label(self) -> &'static str {
        match self {
            ResponseSpeed::Fast => "빠름",
            ResponseSpeed::Normal => "보통",
            ResponseSpeed::Slow => "느림",
            ResponseSpeed::Unknown => "알 수 없음",
        }
    }
}

/// Derived statistics for one participant.
///
/// All `*_rate` fields are fractions in 0..=1. Recomputed on demand from a
/// [`ParsedChat`]; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStats {
    /// Participant display name.
    pub name: String,
    /// Number of messages sent.
    pub message_count: usize,
    /// Average message length in characters.
    pub avg_message_length: f64,
    /// Average reply latency in minutes (0 when no replies qualified).
    pub avg_response_minutes: f64,
    /// Latency category derived from `avg_response_minutes`.
    pub response_speed: ResponseSpeed,
    /// Fraction of messages with laughter jamo or emoji.
    pub emoji_rate: f64,
    /// Fraction of messages containing `?`.
    pub question_rate: f64,
    /// Fraction of messages containing `!`.
    pub exclamation_rate: f64,
    /// Fraction of messages sent inside the nocturnal window.
    pub late_night_rate: f64,
    /// Fraction of detected conversations this participant opened.
    pub initiation_rate: f64,
    /// Fraction of messages at or under the short-reply cutoff.
    pub short_reply_rate: f64,
    /// Fraction of messages over the long-reply cutoff.
    pub long_reply_rate: f64,
}

impl ParticipantStats {
    fn zeroed(name: &str) -> Self {
        Self {
            name: name.to_string(),
            message_count: 0,
            avg_message_length: 0.0,
            avg_response_minutes: 0.0,
            response_speed: ResponseSpeed::Unknown,
            emoji_rate: 0.0,
            question_rate: 0.0,
            exclamation_rate: 0.0,
            late_night_rate: 0.0,
            initiation_rate: 0.0,
            short_reply_rate: 0.0,
            long_reply_rate: 0.0,
        }
    }
}

/// Computes statistics for one participant over the full message list.
///
/// The full list is required (not just the participant's own messages):
/// initiation and response metrics depend on the interleaved conversation
/// context.
///
/// # Example
///
/// ```
/// use kakaopack::parser::KakaoParser;
/// use kakaopack::config::StatsConfig;
/// use kakaopack::stats::participant_stats;
///
/// let chat = KakaoParser::new().parse_str(
///     "[민수] [오후 3:30] 안녕!\n[영희] [오후 3:32] ㅋㅋㅋ 안녕\n",
/// );
/// let stats = participant_stats(&chat.messages, "영희", &StatsConfig::new());
/// assert_eq!(stats.message_count, 1);
/// assert!(stats.emoji_rate > 0.0);
/// ```
pub fn participant_stats(
    messages: &[ChatMessage],
    participant: &str,
    config: &StatsConfig,
) -> ParticipantStats {
    let own: Vec<&ChatMessage> = messages
        .iter()
        .filter(|m| m.sender == participant)
        .collect();

    if own.is_empty() {
        return ParticipantStats::zeroed(participant);
    }

    let count = own.len();
    let count_f = count as f64;

    let emoji_regex = Regex::new(EMOJI_PATTERN).unwrap();

    let total_chars: usize = own.iter().map(|m| m.char_len()).sum();
    let emoji_hits = own.iter().filter(|m| emoji_regex.is_match(&m.content)).count();
    let question_hits = own.iter().filter(|m| m.content.contains('?')).count();
    let exclamation_hits = own.iter().filter(|m| m.content.contains('!')).count();
    let late_night_hits = own.iter().filter(|m| config.is_late_night(m.hour)).count();
    let short_hits = own
        .iter()
        .filter(|m| m.char_len() <= config.short_reply_max_chars)
        .count();
    let long_hits = own
        .iter()
        .filter(|m| m.char_len() > config.long_reply_min_chars)
        .count();

    let (initiation_rate, avg_response) = conversation_metrics(messages, participant, config);

    ParticipantStats {
        name: participant.to_string(),
        message_count: count,
        avg_message_length: total_chars as f64 / count_f,
        avg_response_minutes: avg_response.unwrap_or(0.0),
        response_speed: ResponseSpeed::from_avg_minutes(avg_response),
        emoji_rate: emoji_hits as f64 / count_f,
        question_rate: question_hits as f64 / count_f,
        exclamation_rate: exclamation_hits as f64 / count_f,
        late_night_rate: late_night_hits as f64 / count_f,
        initiation_rate,
        short_reply_rate: short_hits as f64 / count_f,
        long_reply_rate: long_hits as f64 / count_f,
    }
}

/// Walks the interleaved list once for the context-dependent metrics.
///
/// Returns `(initiation_rate, avg_response_minutes)`.
fn conversation_metrics(
    messages: &[ChatMessage],
    participant: &str,
    config: &StatsConfig,
) -> (f64, Option<f64>) {
    let mut conversations = 0usize;
    let mut initiated = 0usize;
    let mut response_total_minutes = 0f64;
    let mut responses = 0usize;

    for (i, msg) in messages.iter().enumerate() {
        if i == 0 {
            continue;
        }
        let prev = &messages[i - 1];
        let gap_minutes = (msg.timestamp - prev.timestamp).num_minutes();

        // A silence longer than the gap threshold opens a new conversation.
        if gap_minutes > config.conversation_gap_minutes {
            conversations += 1;
            if msg.sender == participant {
                initiated += 1;
            }
        }

        // A reply: the participant's message right after someone else's,
        // within the response window. Negative gaps (unsorted input) and
        // day-long silences are re-engagement, not responses.
        if msg.sender == participant
            && prev.sender != participant
            && gap_minutes >= 0
            && gap_minutes < config.max_response_gap_minutes
        {
            response_total_minutes += gap_minutes as f64;
            responses += 1;
        }
    }

    // No detected boundaries: neutral 0.5 avoids div-by-zero bias.
    let initiation_rate = if conversations == 0 {
        0.5
    } else {
        initiated as f64 / conversations as f64
    };

    let avg_response = if responses == 0 {
        None
    } else {
        Some(response_total_minutes / responses as f64)
    };

    (initiation_rate, avg_response)
}

/// Computes statistics for every participant of a parsed chat, in
/// first-appearance order.
pub fn all_participant_stats(chat: &ParsedChat, config: &StatsConfig) -> Vec<ParticipantStats> {
    chat.participants
        .iter()
        .map(|name| participant_stats(&chat.messages, name, config))
        .collect()
}

/// One entry of the conversation-level word frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The word as it appeared (whitespace-tokenized, punctuation-trimmed).
    pub word: String,
    /// Number of occurrences across all messages.
    pub count: usize,
}

/// Top-N word frequency across the whole conversation.
///
/// Whitespace tokenization with leading/trailing punctuation trimmed;
/// single-character tokens and URLs are skipped. Ties break
/// lexicographically so the result is deterministic.
pub fn word_frequency(messages: &[ChatMessage], top_n: usize) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for msg in messages {
        for token in msg.content.split_whitespace() {
            if token.contains("http://") || token.contains("https://") {
                continue;
            }
            let word = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if word.chars().count() < 2 {
                continue;
            }
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    entries.truncate(top_n);
    entries
}
