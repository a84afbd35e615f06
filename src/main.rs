//! # kakaopack CLI
//!
//! Command-line interface for the kakaopack library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use kakaopack::cli::{Args, OutputKind};
use kakaopack::config::{ParserConfig, StatsConfig};
use kakaopack::dialect::detect_dialect;
use kakaopack::parser::KakaoParser;
use kakaopack::prompt::{build_analysis_request, format_stats_summary};
use kakaopack::sample::AnalysisTier;
use kakaopack::share::{decode_share, encode_share};
use kakaopack::stats::all_participant_stats;
use kakaopack::{KakaopackError, ParsedChat, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = <Args as ClapParser>::parse();

    // Token decoding short-circuits the whole pipeline
    if let Some(ref token) = args.decode {
        return decode_token(token);
    }

    // clap enforces input unless --decode was given
    let Some(input) = args.input.as_deref() else {
        return Err(KakaopackError::invalid_chat("no input file given"));
    };

    println!("💬 kakaopack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", input);
    println!("🎫 Tier:    {}", args.tier);
    println!("📄 Output:  {}", args.kind);
    println!();

    let parser_config = ParserConfig::new().with_sort_by_timestamp(args.sort);
    let stats_config = StatsConfig::new();

    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let content = fs::read_to_string(Path::new(input))?;
    let chat = KakaoParser::with_config(parser_config).parse_str(&content);
    let parse_time = parse_start.elapsed();

    if chat.is_empty() {
        return Err(KakaopackError::invalid_chat(
            "no recognizable messages found. Make sure the file is a KakaoTalk chat export.",
        ));
    }

    let sample_lines: Vec<&str> = content.lines().take(50).collect();
    if let Some(dialect) = detect_dialect(&sample_lines) {
        println!("   Dialect: {}", dialect);
    }
    println!(
        "   Found {} messages from {} participants ({:.2}s)",
        chat.total_message_count,
        chat.participants.len(),
        parse_time.as_secs_f64()
    );
    println!(
        "   Range: {} — {}",
        chat.date_range.start.format("%Y-%m-%d %H:%M"),
        chat.date_range.end.format("%Y-%m-%d %H:%M")
    );
    println!();

    print_stats(&chat, &stats_config, args.participant.as_deref())?;

    let tier: AnalysisTier = args.tier.into();
    let body = render_output(&chat, tier, &stats_config, args.kind)?;

    match args.output {
        Some(ref path) => {
            fs::write(path, &body)?;
            println!("✅ Done! Output saved to {}", path);
        }
        None => {
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("{}", body);
        }
    }

    if args.share {
        let stats = all_participant_stats(&chat, &stats_config);
        let token = encode_share(&stats)?;
        println!();
        println!("🔗 Share token: {}", token);
    }

    Ok(())
}

fn decode_token(token: &str) -> Result<()> {
    match decode_share::<serde_json::Value>(token) {
        Some(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        None => Err(KakaopackError::invalid_chat(
            "could not decode share token (corrupt or foreign input)",
        )),
    }
}

fn print_stats(
    chat: &ParsedChat,
    config: &StatsConfig,
    participant: Option<&str>,
) -> Result<()> {
    if let Some(name) = participant {
        if !chat.participants.iter().any(|p| p == name) {
            return Err(KakaopackError::invalid_chat(format!(
                "participant '{}' not found. Participants: {}",
                name,
                chat.participants.join(", ")
            )));
        }
    }

    println!("📊 Statistics:");
    for stats in all_participant_stats(chat, config) {
        if participant.is_some_and(|name| name != stats.name) {
            continue;
        }
        println!("   {}", format_stats_summary(&stats));
    }
    println!();
    Ok(())
}

fn render_output(
    chat: &ParsedChat,
    tier: AnalysisTier,
    config: &StatsConfig,
    kind: OutputKind,
) -> Result<String> {
    let request = build_analysis_request(chat, tier, config);

    let body = match kind {
        OutputKind::Text => format!("{}\n{}", request.chat_text, request.stats_summary),
        OutputKind::Request => serde_json::to_string_pretty(&request)?,
        OutputKind::Stats => {
            // Stats output needs at least a two-person conversation
            if chat.participants.len() < 2 {
                return Err(KakaopackError::invalid_chat(
                    "statistics output needs at least two participants",
                ));
            }
            serde_json::to_string_pretty(&all_participant_stats(chat, config))?
        }
    };

    Ok(body)
}
