//! System-notice filtering and content classification.
//!
//! KakaoTalk exports interleave administrative notices (joins, leaves,
//! invites, deleted messages) with real chat lines, and flatten media to
//! bare text placeholders. This module decides which is which.
//!
//! The filter is advisory substring matching against a fixed Korean
//! indicator set, in the spirit of the WhatsApp system-message heuristics:
//! false negatives (system text slipping through) are an accepted
//! limitation, not a defect.

use crate::message::MessageType;

/// Korean system-notice indicators.
const SYSTEM_INDICATORS: &[&str] = &[
    "님이 들어왔습니다",
    "님이 나갔습니다",
    "님을 초대했습니다",
    "님을 내보냈습니다",
    "삭제된 메시지입니다",
    "채팅방 관리자가",
    "운영정책을 위반한 메시지로 신고되어",
    "가려진 메시지입니다",
    "채팅방이 개설되었습니다",
];

/// Bare placeholders KakaoTalk writes in place of media content.
const MEDIA_PLACEHOLDERS: &[(&str, MessageType)] = &[
    ("사진", MessageType::Photo),
    ("동영상", MessageType::Photo),
    ("이모티콘", MessageType::Emoticon),
    ("음성메시지", MessageType::File),
];

/// Returns `true` if the content is a system/administrative notice.
///
/// # Example
///
/// ```
/// use kakaopack::system::is_system_message;
///
/// assert!(is_system_message("철수님이 들어왔습니다."));
/// assert!(is_system_message("삭제된 메시지입니다."));
/// assert!(!is_system_message("안녕하세요!"));
/// ```
pub fn is_system_message(content: &str) -> bool {
    SYSTEM_INDICATORS
        .iter()
        .any(|indicator| content.contains(indicator))
}

/// Classifies message content into a [`MessageType`].
///
/// System notices win over everything else; bare media placeholders are
/// typed by what they stood for; content carrying an http(s) URL is a link;
/// the rest is text.
///
/// # Example
///
/// ```
/// use kakaopack::system::classify_content;
/// use kakaopack::MessageType;
///
/// assert_eq!(classify_content("사진"), MessageType::Photo);
/// assert_eq!(classify_content("이모티콘"), MessageType::Emoticon);
/// assert_eq!(classify_content("https://example.com 봐봐"), MessageType::Link);
/// assert_eq!(classify_content("밥 먹었어?"), MessageType::Text);
/// ```
pub fn classify_content(content: &str) -> MessageType {
    if is_system_message(content) {
        return MessageType::System;
    }

    let trimmed = content.trim();

    for (placeholder, message_type) in MEDIA_PLACEHOLDERS {
        if trimmed == *placeholder {
            return *message_type;
        }
    }

    // "사진 2장" style multi-photo placeholders
    if let Some(rest) = trimmed.strip_prefix("사진 ") {
        if rest.ends_with('장') && rest.trim_end_matches('장').trim().parse::<u32>().is_ok() {
            return MessageType::Photo;
        }
    }

    if trimmed.starts_with("파일:") {
        return MessageType::File;
    }

    if trimmed.contains("http://") || trimmed.contains("https://") {
        return MessageType::Link;
    }

    MessageType::Text
}
