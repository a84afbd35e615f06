//! # kakaopack
//!
//! A Rust library for parsing KakaoTalk chat exports, deriving conversation
//! statistics, and preparing sampled transcripts for LLM analysis.
//!
//! ## Overview
//!
//! KakaoTalk's "export conversation" feature writes different text layouts
//! depending on the platform:
//! - **PC** — `[sender] [오전|오후 H:MM] content` with date separator lines
//! - **iOS** — `sender, [오전|오후 H:MM] : content` or a fully dated variant
//! - **Android** — `YYYY년 M월 D일 오전|오후 H:MM, sender : content`
//!
//! kakaopack recognizes all three per line, reconstructs absolute
//! timestamps, filters system notices, and assembles a [`ParsedChat`]
//! aggregate. On top of that it derives per-participant statistics, samples
//! messages to a tier budget, formats the analysis-request payload, and
//! round-trips result objects through URL-safe share tokens.
//!
//! ## Quick Start
//!
//! ```rust
//! use kakaopack::prelude::*;
//!
//! let export = "\
//! ----------------- 2024년 1월 15일 월요일 -----------------
//! [민수] [오후 3:30] 안녕!
//! [영희] [오후 3:32] ㅋㅋㅋ 안녕
//! ";
//!
//! let chat = KakaoParser::new().parse_str(export);
//! assert_eq!(chat.participants, vec!["민수", "영희"]);
//!
//! let stats = participant_stats(&chat.messages, "영희", &StatsConfig::new());
//! assert!(stats.emoji_rate > 0.0);
//!
//! let request = build_analysis_request(&chat, AnalysisTier::Free, &StatsConfig::new());
//! assert!(request.chat_text.contains("[민수] 안녕!"));
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`KakaoParser`], [`ParsedChat`] (the assembler)
//! - [`dialect`] — per-line classification of the three export dialects
//! - [`system`] — system-notice filtering and content typing
//! - [`stats`] — [`ParticipantStats`](stats::ParticipantStats), word frequency
//! - [`sample`] — [`AnalysisTier`](sample::AnalysisTier), even-stride sampling
//! - [`prompt`] — analysis-request payload construction
//! - [`share`] — URL-safe base64 share tokens
//! - [`config`] — [`ParserConfig`](config::ParserConfig), [`StatsConfig`](config::StatsConfig)
//! - [`error`] — [`KakaopackError`], [`Result`]
//!
//! The parsing core is pure and synchronous: one pass, no I/O, no global
//! state, safe to call repeatedly. The only asynchronous boundary in the
//! wider system — the LLM HTTP call — lives outside this crate.

pub mod config;
pub mod dialect;
pub mod error;
pub mod message;
pub mod parser;
pub mod prompt;
pub mod sample;
pub mod share;
pub mod stats;
pub mod system;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use error::{KakaopackError, Result};
pub use message::{ChatMessage, MessageType};
pub use parser::{KakaoParser, ParsedChat};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use kakaopack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ParserConfig, StatsConfig};
    pub use crate::dialect::{Classifier, Dialect, LineClass, detect_dialect};
    pub use crate::error::{KakaopackError, Result};
    pub use crate::message::{ChatMessage, MessageType};
    pub use crate::parser::{KakaoParser, ParsedChat};
    pub use crate::prompt::{AnalysisRequest, build_analysis_request, format_messages};
    pub use crate::sample::{AnalysisTier, sample_evenly};
    pub use crate::share::{decode_share, encode_share};
    pub use crate::stats::{
        ParticipantStats, ResponseSpeed, all_participant_stats, participant_stats, word_frequency,
    };
}
