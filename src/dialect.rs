//! Line classification for the three KakaoTalk export dialects.
//!
//! KakaoTalk writes different layouts depending on the exporting platform:
//!
//! - **PC**: `[민수] [오후 3:30] 안녕!` — time only, date carried by
//!   separator lines like `--------- 2024년 1월 15일 월요일 ---------`
//! - **iOS**: `민수, [오후 3:30] : 안녕!` or the fully dated
//!   `2025. 11. 9. 22:07, 민수 : 안녕!`
//! - **Android**: `2024년 1월 15일 오후 3:30, 민수 : 안녕!`
//!
//! [`Classifier`] compiles one regex per dialect and classifies a single
//! trimmed line at a time. It holds no date state: dialects that embed a
//! full date report it in [`MessageLine::date`], and the assembler threads
//! the running date through its own fold.

use chrono::NaiveDate;
use regex::Regex;

/// The recognized KakaoTalk export layouts.
///
/// Dialects are tried in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// PC export: `[sender] [오전|오후 H:MM] content`
    Pc,
    /// iOS export: `sender, [오전|오후 H:MM] : content`
    IosBracketed,
    /// iOS export with embedded date: `YYYY. M. D. [오전|오후] H:MM, sender : content`
    IosDated,
    /// Android export: `YYYY년 M월 D일 오전|오후 H:MM, sender : content`
    Android,
}

impl Dialect {
    /// Returns the regex pattern for this dialect's message lines.
    pub fn pattern(self) -> &'static str {
        match self {
            // [민수] [오후 3:30] 안녕!
            Dialect::Pc => r"^\[(.+?)\]\s*\[(오전|오후)\s*(\d{1,2}):(\d{2})\]\s?(.*)$",
            // 민수, [오후 3:30] : 안녕!
            Dialect::IosBracketed => r"^(.+?),\s*\[(오전|오후)\s*(\d{1,2}):(\d{2})\]\s*:\s?(.*)$",
            // 2025. 11. 9. 22:07, 재혁 : 테스트  (meridiem optional)
            Dialect::IosDated => {
                r"^(\d{4})\.\s*(\d{1,2})\.\s*(\d{1,2})\.\s*(?:(오전|오후)\s*)?(\d{1,2}):(\d{2}),\s*(.+?)\s*:\s?(.*)$"
            }
            // 2025년 4월 19일 오전 12:41, 권창한 : 좋은 아침
            Dialect::Android => {
                r"^(\d{4})년\s*(\d{1,2})월\s*(\d{1,2})일\s*(오전|오후)\s*(\d{1,2}):(\d{2}),\s*(.+?)\s*:\s?(.*)$"
            }
        }
    }

    /// Returns all dialects in matching order.
    pub fn all() -> &'static [Dialect] {
        &[
            Dialect::Pc,
            Dialect::IosBracketed,
            Dialect::IosDated,
            Dialect::Android,
        ]
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Pc => write!(f, "PC"),
            Dialect::IosBracketed | Dialect::IosDated => write!(f, "iOS"),
            Dialect::Android => write!(f, "Android"),
        }
    }
}

/// Korean 12-hour meridiem marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// 오전
    Am,
    /// 오후
    Pm,
}

impl Meridiem {
    fn from_marker(s: &str) -> Option<Self> {
        match s {
            "오전" => Some(Meridiem::Am),
            "오후" => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

/// Converts a 12-hour clock reading to 24-hour form.
///
/// The rule, applied identically across all dialects:
/// - 오후 (PM) with hour != 12 adds 12
/// - 오전 (AM) with hour == 12 becomes 0
/// - otherwise the hour is unchanged
///
/// A `None` meridiem means the dialect already wrote a 24-hour time.
///
/// # Example
///
/// ```
/// use kakaopack::dialect::{Meridiem, to_24_hour};
///
/// assert_eq!(to_24_hour(12, Some(Meridiem::Pm)), 12);
/// assert_eq!(to_24_hour(12, Some(Meridiem::Am)), 0);
/// assert_eq!(to_24_hour(1, Some(Meridiem::Pm)), 13);
/// assert_eq!(to_24_hour(22, None), 22);
/// ```
pub fn to_24_hour(hour: u32, meridiem: Option<Meridiem>) -> u32 {
    match meridiem {
        Some(Meridiem::Pm) if hour != 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    }
}

/// A message line extracted by the classifier, before date resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLine {
    /// Which dialect matched.
    pub dialect: Dialect,
    /// Sender display name, trimmed.
    pub sender: String,
    /// Raw content of the first line of the bubble.
    pub content: String,
    /// Calendar date embedded in the line itself (iOS dated, Android).
    ///
    /// `None` for dialects that rely on the running date from separator
    /// lines, and for embedded dates with impossible components.
    pub date: Option<NaiveDate>,
    /// Hour of day, 0..=23, already converted from the 12-hour marker.
    pub hour: u32,
    /// Minute, 0..=59.
    pub minute: u32,
}

/// Classification of one trimmed, non-empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A date separator; updates the assembler's running date.
    DateSeparator(NaiveDate),
    /// A message line in one of the dialects.
    Message(MessageLine),
    /// Neither — a continuation of an open bubble, or noise.
    Unmatched,
}

/// Compiled line classifier.
///
/// Compiling the dialect regexes dominates classification cost, so the
/// classifier is built once and reused across every line of the file.
///
/// # Example
///
/// ```
/// use kakaopack::dialect::{Classifier, Dialect, LineClass};
///
/// let classifier = Classifier::new();
/// match classifier.classify("[민수] [오후 3:30] 안녕!") {
///     LineClass::Message(line) => {
///         assert_eq!(line.dialect, Dialect::Pc);
///         assert_eq!(line.sender, "민수");
///         assert_eq!(line.hour, 15);
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
pub struct Classifier {
    separator: Regex,
    dialects: Vec<(Dialect, Regex)>,
}

impl Classifier {
    /// Builds a classifier with all dialect patterns compiled.
    pub fn new() -> Self {
        // --------- 2024년 1월 15일 월요일 ---------  (dashes optional)
        let separator = Regex::new(
            r"^-*\s*(\d{4})년\s*(\d{1,2})월\s*(\d{1,2})일\s*[월화수목금토일]요일\s*-*$",
        )
        .unwrap();

        let dialects = Dialect::all()
            .iter()
            .map(|&d| (d, Regex::new(d.pattern()).unwrap()))
            .collect();

        Self {
            separator,
            dialects,
        }
    }

    /// Classifies a single trimmed line.
    ///
    /// Separator lines are recognized first, then the message dialects in
    /// order. A line matching nothing is [`LineClass::Unmatched`]; the
    /// assembler decides between continuation and silent discard.
    pub fn classify(&self, line: &str) -> LineClass {
        if let Some(caps) = self.separator.captures(line) {
            let year = parse_digits(caps.get(1).map_or("", |m| m.as_str()));
            let month = parse_digits(caps.get(2).map_or("", |m| m.as_str()));
            let day = parse_digits(caps.get(3).map_or("", |m| m.as_str()));
            if let Some(date) = NaiveDate::from_ymd_opt(year, month as u32, day as u32) {
                return LineClass::DateSeparator(date);
            }
            // Impossible calendar date: keep the previous running date.
            return LineClass::Unmatched;
        }

        for (dialect, regex) in &self.dialects {
            if let Some(caps) = regex.captures(line) {
                return LineClass::Message(extract_message(*dialect, &caps));
            }
        }

        LineClass::Unmatched
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_digits(s: &str) -> i32 {
    s.parse().unwrap_or(0)
}

fn extract_message(dialect: Dialect, caps: &regex::Captures<'_>) -> MessageLine {
    let get = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    let (date, meridiem, raw_hour, raw_minute, sender, content) = match dialect {
        Dialect::Pc | Dialect::IosBracketed => (
            None,
            Meridiem::from_marker(get(2)),
            parse_digits(get(3)),
            parse_digits(get(4)),
            get(1),
            get(5),
        ),
        Dialect::IosDated => (
            NaiveDate::from_ymd_opt(
                parse_digits(get(1)),
                parse_digits(get(2)) as u32,
                parse_digits(get(3)) as u32,
            ),
            caps.get(4).and_then(|m| Meridiem::from_marker(m.as_str())),
            parse_digits(get(5)),
            parse_digits(get(6)),
            get(7),
            get(8),
        ),
        Dialect::Android => (
            NaiveDate::from_ymd_opt(
                parse_digits(get(1)),
                parse_digits(get(2)) as u32,
                parse_digits(get(3)) as u32,
            ),
            Meridiem::from_marker(get(4)),
            parse_digits(get(5)),
            parse_digits(get(6)),
            get(7),
            get(8),
        ),
    };

    let hour = to_24_hour(raw_hour.max(0) as u32, meridiem);
    let minute = raw_minute.max(0) as u32;

    // Unparsable clock readings degrade to noon, never to an error.
    let (hour, minute) = if hour > 23 || minute > 59 {
        (12, 0)
    } else {
        (hour, minute)
    };

    MessageLine {
        dialect,
        sender: sender.trim().to_string(),
        content: content.to_string(),
        date,
        hour,
        minute,
    }
}

/// Auto-detects the dominant dialect by scoring sample lines.
///
/// Used for display purposes; classification itself tries every dialect on
/// every line, so mixed files still parse. Returns `None` when no line
/// matches any dialect.
pub fn detect_dialect(lines: &[&str]) -> Option<Dialect> {
    let classifier = Classifier::new();
    let mut scores = vec![0usize; Dialect::all().len()];

    for line in lines {
        if let LineClass::Message(msg) = classifier.classify(line.trim()) {
            let idx = Dialect::all().iter().position(|&d| d == msg.dialect)?;
            scores[idx] += 1;
        }
    }

    let max_score = *scores.iter().max()?;
    if max_score == 0 {
        return None;
    }

    let winner = scores.iter().position(|&s| s == max_score)?;
    Some(Dialect::all()[winner])
}
