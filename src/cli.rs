//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`Tier`] - sampling budget selection
//! - [`OutputKind`] - what to emit after parsing

use clap::{Parser, ValueEnum};

use crate::sample::AnalysisTier;

/// Parse a KakaoTalk chat export, derive conversation statistics,
/// and prepare a sampled transcript for LLM analysis.
#[derive(Parser, Debug, Clone)]
#[command(name = "kakaopack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    kakaopack KakaoTalk_Chat.txt
    kakaopack chat.txt --tier premium --output request.json --kind request
    kakaopack chat.txt --kind stats --share
    kakaopack chat.txt --participant 민수
    kakaopack --decode eyJzY29yZSI6ODd9")]
pub struct Args {
    /// Path to the exported chat file
    #[arg(required_unless_present = "decode")]
    pub input: Option<String>,

    /// Sampling budget tier
    #[arg(short, long, value_enum, default_value = "free")]
    pub tier: Tier,

    /// What to emit (text transcript, analysis request JSON, or stats JSON)
    #[arg(short, long, value_enum, default_value = "text")]
    pub kind: OutputKind,

    /// Path to write the output to (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Show statistics for this participant only
    #[arg(short, long, value_name = "NAME")]
    pub participant: Option<String>,

    /// Re-sort messages by timestamp instead of keeping file order
    #[arg(long)]
    pub sort: bool,

    /// Also print a share token for the statistics payload
    #[arg(long)]
    pub share: bool,

    /// Decode a share token and print it as JSON, then exit
    #[arg(long, value_name = "TOKEN")]
    pub decode: Option<String>,
}

/// Sampling budget tier (CLI flavor of [`AnalysisTier`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tier {
    /// 100-message budget
    Free,
    /// 300-message budget
    Premium,
}

impl From<Tier> for AnalysisTier {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Free => AnalysisTier::Free,
            Tier::Premium => AnalysisTier::Premium,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Free => write!(f, "free"),
            Tier::Premium => write!(f, "premium"),
        }
    }
}

/// What the CLI emits after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputKind {
    /// Sampled transcript plus statistics summary as plain text
    #[default]
    Text,
    /// Full analysis request as JSON
    Request,
    /// Per-participant statistics as JSON
    Stats,
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputKind::Text => write!(f, "text"),
            OutputKind::Request => write!(f, "request"),
            OutputKind::Stats => write!(f, "stats"),
        }
    }
}
