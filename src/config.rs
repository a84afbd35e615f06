//! Configuration types for the parser and the statistics engine.
//!
//! The original analyzer apps hard-coded slightly different thresholds in
//! each copy of the parser (late-night window, conversation gap, reply-length
//! cutoffs). Here they are explicit configuration with documented defaults,
//! so one parser serves every caller.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kakaopack::config::{ParserConfig, StatsConfig};
//!
//! let parser_config = ParserConfig::new()
//!     .with_sort_by_timestamp(true)
//!     .with_fallback_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//!
//! let stats_config = StatsConfig::new().with_conversation_gap_minutes(180);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configuration for KakaoTalk export parsing.
///
/// # Example
///
/// ```rust
/// use kakaopack::config::ParserConfig;
///
/// let config = ParserConfig::new().with_skip_media_placeholders(false);
/// assert!(config.skip_system_messages);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Drop join/leave/invite/deleted-message notices (default: true)
    pub skip_system_messages: bool,

    /// Drop bare media placeholders: `사진`, `동영상`, `이모티콘`, `파일:`
    /// (default: true)
    pub skip_media_placeholders: bool,

    /// Re-sort messages by timestamp after assembly instead of keeping
    /// file order (default: false)
    pub sort_by_timestamp: bool,

    /// Date assumed for messages seen before any date separator.
    ///
    /// PC-dialect lines carry only a time of day; the date comes from the
    /// most recent separator line. Until one is seen, this date applies.
    /// Defaults to today; pin it for deterministic tests.
    pub fallback_date: NaiveDate,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_system_messages: true,
            skip_media_placeholders: true,
            sort_by_timestamp: false,
            fallback_date: chrono::Utc::now().date_naive(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to drop system messages.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Sets whether to drop bare media placeholders.
    #[must_use]
    pub fn with_skip_media_placeholders(mut self, skip: bool) -> Self {
        self.skip_media_placeholders = skip;
        self
    }

    /// Sets whether to re-sort messages by timestamp after assembly.
    #[must_use]
    pub fn with_sort_by_timestamp(mut self, sort: bool) -> Self {
        self.sort_by_timestamp = sort;
        self
    }

    /// Sets the date assumed before the first date separator.
    #[must_use]
    pub fn with_fallback_date(mut self, date: NaiveDate) -> Self {
        self.fallback_date = date;
        self
    }
}

/// Thresholds for the statistics engine.
///
/// All time values are minutes, all length values are characters.
///
/// # Example
///
/// ```rust
/// use kakaopack::config::StatsConfig;
///
/// let config = StatsConfig::new();
/// assert_eq!(config.conversation_gap_minutes, 120);
/// assert_eq!(config.late_night_start_hour, 23);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Silence longer than this opens a new conversation (default: 120)
    pub conversation_gap_minutes: i64,

    /// Gaps longer than this don't count as responses (default: 1440, one day)
    pub max_response_gap_minutes: i64,

    /// Start of the nocturnal window, inclusive (default: 23)
    pub late_night_start_hour: u32,

    /// End of the nocturnal window, exclusive (default: 4)
    pub late_night_end_hour: u32,

    /// Messages at or under this length count as short replies (default: 5)
    pub short_reply_max_chars: usize,

    /// Messages over this length count as long replies (default: 50)
    pub long_reply_min_chars: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            conversation_gap_minutes: 120,
            max_response_gap_minutes: 24 * 60,
            late_night_start_hour: 23,
            late_night_end_hour: 4,
            short_reply_max_chars: 5,
            long_reply_min_chars: 50,
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new-conversation gap threshold in minutes.
    #[must_use]
    pub fn with_conversation_gap_minutes(mut self, minutes: i64) -> Self {
        self.conversation_gap_minutes = minutes;
        self
    }

    /// Sets the maximum gap still counted as a response, in minutes.
    #[must_use]
    pub fn with_max_response_gap_minutes(mut self, minutes: i64) -> Self {
        self.max_response_gap_minutes = minutes;
        self
    }

    /// Sets the nocturnal window as `[start, end)` hours, wrapping midnight.
    #[must_use]
    pub fn with_late_night_window(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.late_night_start_hour = start_hour;
        self.late_night_end_hour = end_hour;
        self
    }

    /// Sets the short-reply length cutoff in characters.
    #[must_use]
    pub fn with_short_reply_max_chars(mut self, chars: usize) -> Self {
        self.short_reply_max_chars = chars;
        self
    }

    /// Sets the long-reply length cutoff in characters.
    #[must_use]
    pub fn with_long_reply_min_chars(mut self, chars: usize) -> Self {
        self.long_reply_min_chars = chars;
        self
    }

    /// Returns `true` if `hour` falls inside the nocturnal window.
    ///
    /// The window wraps midnight: with the defaults (23, 4) the hours
    /// 23, 0, 1, 2, 3 match.
    pub fn is_late_night(&self, hour: u32) -> bool {
        if self.late_night_start_hour <= self.late_night_end_hour {
            hour >= self.late_night_start_hour && hour < self.late_night_end_hour
        } else {
            hour >= self.late_night_start_hour || hour < self.late_night_end_hour
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_defaults() {
        let config = ParserConfig::new();
        assert!(config.skip_system_messages);
        assert!(config.skip_media_placeholders);
        assert!(!config.sort_by_timestamp);
    }

    #[test]
    fn test_parser_config_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let config = ParserConfig::new()
            .with_skip_system_messages(false)
            .with_sort_by_timestamp(true)
            .with_fallback_date(date);

        assert!(!config.skip_system_messages);
        assert!(config.sort_by_timestamp);
        assert_eq!(config.fallback_date, date);
    }

    #[test]
    fn test_stats_config_defaults() {
        let config = StatsConfig::new();
        assert_eq!(config.conversation_gap_minutes, 120);
        assert_eq!(config.max_response_gap_minutes, 1440);
        assert_eq!(config.short_reply_max_chars, 5);
        assert_eq!(config.long_reply_min_chars, 50);
    }

    #[test]
    fn test_late_night_wrapping_window() {
        let config = StatsConfig::new(); // 23..4
        assert!(config.is_late_night(23));
        assert!(config.is_late_night(0));
        assert!(config.is_late_night(3));
        assert!(!config.is_late_night(4));
        assert!(!config.is_late_night(12));
        assert!(!config.is_late_night(22));
    }

    #[test]
    fn test_late_night_non_wrapping_window() {
        let config = StatsConfig::new().with_late_night_window(0, 5);
        assert!(config.is_late_night(0));
        assert!(config.is_late_night(4));
        assert!(!config.is_late_night(5));
        assert!(!config.is_late_night(23));
    }
}
