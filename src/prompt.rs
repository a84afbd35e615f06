//! Builds the text blobs submitted to the analysis proxy.
//!
//! The proxy (out of scope here) takes a JSON body with the tier, a
//! sampled transcript as `"[sender] content"` lines, and an optional
//! statistics summary to enrich the prompt. This module produces those
//! pieces faithfully from a [`ParsedChat`]; it performs no I/O and no
//! HTTP.

use serde::{Deserialize, Serialize};

use crate::config::StatsConfig;
use crate::message::ChatMessage;
use crate::parser::ParsedChat;
use crate::sample::{AnalysisTier, sample_evenly};
use crate::stats::{ParticipantStats, all_participant_stats};

/// The JSON body handed to the analysis proxy.
///
/// # Example
///
/// ```
/// use kakaopack::parser::KakaoParser;
/// use kakaopack::config::StatsConfig;
/// use kakaopack::prompt::build_analysis_request;
/// use kakaopack::sample::AnalysisTier;
///
/// let chat = KakaoParser::new().parse_str("[민수] [오후 3:30] 안녕!\n");
/// let request = build_analysis_request(&chat, AnalysisTier::Free, &StatsConfig::new());
/// assert!(request.chat_text.contains("[민수] 안녕!"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Sampling/model budget tier.
    pub tier: AnalysisTier,
    /// Sampled transcript, one `"[sender] content"` line per message.
    pub chat_text: String,
    /// Human-readable statistics block, one section per participant.
    pub stats_summary: String,
}

/// Formats messages as `"[sender] content"` lines.
///
/// Multi-line bubbles keep their inner newlines; each message still starts
/// on its own line with the bracketed sender.
pub fn format_messages<'a, I>(messages: I) -> String
where
    I: IntoIterator<Item = &'a ChatMessage>,
{
    let mut out = String::new();
    for msg in messages {
        out.push('[');
        out.push_str(&msg.sender);
        out.push_str("] ");
        out.push_str(&msg.content);
        out.push('\n');
    }
    out
}

/// Formats one participant's statistics as a labelled text block.
pub fn format_stats_summary(stats: &ParticipantStats) -> String {
    format!(
        "{name}: 메시지 {count}개, 평균 {avg_len:.1}자, 응답속도 {speed}, \
         이모티콘 {emoji:.0}%, 질문 {question:.0}%, 심야 {late:.0}%, 대화시작 {init:.0}%",
        name = stats.name,
        count = stats.message_count,
        avg_len = stats.avg_message_length,
        speed = stats.response_speed.label(),
        emoji = stats.emoji_rate * 100.0,
        question = stats.question_rate * 100.0,
        late = stats.late_night_rate * 100.0,
        init = stats.initiation_rate * 100.0,
    )
}

/// Samples a chat to the tier budget and assembles the full request body.
pub fn build_analysis_request(
    chat: &ParsedChat,
    tier: AnalysisTier,
    config: &StatsConfig,
) -> AnalysisRequest {
    let sampled = sample_evenly(&chat.messages, tier.max_messages());
    let chat_text = format_messages(sampled.into_iter());

    let stats_summary = all_participant_stats(chat, config)
        .iter()
        .map(format_stats_summary)
        .collect::<Vec<_>>()
        .join("\n");

    AnalysisRequest {
        tier,
        chat_text,
        stats_summary,
    }
}
