//! URL-safe share tokens.
//!
//! A result object is serialized to JSON and encoded as URL-safe base64
//! without padding, so it can ride in a query parameter and be decoded by a
//! receiving client without any server-side store.
//!
//! Decoding happens on page load from untrusted URL input, so
//! [`decode_share`] never fails loudly: any corruption yields `None` and
//! the caller falls through to its default flow.
//!
//! # Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use kakaopack::share::{encode_share, decode_share};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Score { name: String, value: u32 }
//!
//! let score = Score { name: "민수".into(), value: 87 };
//! let token = encode_share(&score).unwrap();
//! assert!(!token.contains('+') && !token.contains('/') && !token.contains('='));
//!
//! let back: Score = decode_share(&token).unwrap();
//! assert_eq!(back, score);
//! ```

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Encodes a serializable value as a URL-safe base64 token.
///
/// The token uses the URL-safe alphabet (`-` and `_` instead of `+` and
/// `/`) with padding stripped, so it needs no percent-encoding in a query
/// string.
pub fn encode_share<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decodes a share token back into a value.
///
/// Tolerates stray `=` padding appended by other encoders. Returns `None`
/// for anything that isn't valid base64 over valid JSON matching `T` —
/// corrupt and foreign tokens are an expected input, not an error.
pub fn decode_share<T: DeserializeOwned>(token: &str) -> Option<T> {
    let trimmed = token.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD.decode(trimmed).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ShareResult {
        title: String,
        scores: Vec<u32>,
        comment: String,
    }

    #[test]
    fn test_roundtrip_korean_and_emoji() {
        let result = ShareResult {
            title: "우정 분석 결과 🎉".to_string(),
            scores: vec![87, 92, 100],
            comment: "ㅋㅋㅋ 최고의 친구".to_string(),
        };
        let token = encode_share(&result).unwrap();
        let back: ShareResult = decode_share(&token).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_roundtrip_nested_value() {
        let value = json!({
            "참가자": ["민수", "영희"],
            "점수": {"민수": 87, "영희": 92},
            "항목": [[1, 2], [3, 4]],
        });
        let token = encode_share(&value).unwrap();
        let back: serde_json::Value = decode_share(&token).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_token_is_url_safe() {
        // Enough binary-ish content to exercise the alphabet
        let value = json!({"data": "?>?>?>???!!!~~~///+++ 한글 텍스트 스트링"});
        let token = encode_share(&value).unwrap();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_decode_tolerates_padding() {
        let value = json!({"a": 1});
        let token = encode_share(&value).unwrap();
        let padded = format!("{token}==");
        let back: serde_json::Value = decode_share(&padded).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_corrupt_token_is_none() {
        assert_eq!(decode_share::<serde_json::Value>("%%%not-base64%%%"), None);
        assert_eq!(decode_share::<serde_json::Value>(""), None);

        // Valid base64 but not JSON
        let garbage = URL_SAFE_NO_PAD.encode(b"\xff\xfe\x00not json");
        assert_eq!(decode_share::<serde_json::Value>(&garbage), None);
    }

    #[test]
    fn test_wrong_shape_is_none() {
        let token = encode_share(&json!({"unexpected": true})).unwrap();
        assert_eq!(decode_share::<ShareResult>(&token), None);
    }
}
