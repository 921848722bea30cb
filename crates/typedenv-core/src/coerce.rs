//! Raw string → typed value rules.
//!
//! Pure functions; lookup, defaults and warnings live in [`crate::accessor`].

use serde::de::DeserializeOwned;

/// Values that read as `true` after lowercasing.
pub const TRUTHY: &[&str] = &["true", "1", "yes", "on"];

/// Values that read as `false` after lowercasing. The empty string is falsy.
pub const FALSY: &[&str] = &["false", "0", "no", "off", ""];

/// Lenient base-10 scan: skips leading ASCII whitespace, accepts an optional
/// sign, then takes the longest run of ASCII digits. Trailing text after the
/// digits is ignored, so `"42abc"` scans as `42`.
///
/// Returns a human-readable reason when no digits are found or the digits
/// overflow `i64`.
pub fn scan_int(raw: &str) -> Result<i64, String> {
    let s = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let sign_len = usize::from(s.starts_with('-') || s.starts_with('+'));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return Err("no leading base-10 digits".to_string());
    }
    s[..sign_len + digits_len]
        .parse::<i64>()
        .map_err(|e| e.to_string())
}

/// Case-insensitive match against [`TRUTHY`] / [`FALSY`]. `None` when the
/// value belongs to neither set.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let lower = raw.to_lowercase();
    if TRUTHY.contains(&lower.as_str()) {
        Some(true)
    } else if FALSY.contains(&lower.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Parses a JSON document into `T`.
///
/// With `T = serde_json::Value` this is a purely syntactic check. A concrete
/// `T` also rejects documents whose shape does not deserialize into it.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_scan_int_plain() {
        assert_eq!(scan_int("8080"), Ok(8080));
        assert_eq!(scan_int("-17"), Ok(-17));
        assert_eq!(scan_int("+3"), Ok(3));
        assert_eq!(scan_int("007"), Ok(7));
    }

    #[test]
    fn test_scan_int_lenient_prefix() {
        assert_eq!(scan_int("42abc"), Ok(42));
        assert_eq!(scan_int("  12 "), Ok(12));
        assert_eq!(scan_int("3.9"), Ok(3));
        assert_eq!(scan_int("1e5"), Ok(1));
        assert_eq!(scan_int("0x10"), Ok(0));
    }

    #[test]
    fn test_scan_int_rejects_non_numeric() {
        assert!(scan_int("abc").is_err());
        assert!(scan_int("-").is_err());
        assert!(scan_int("   ").is_err());
        assert!(scan_int("").is_err());
        assert!(scan_int("- 5").is_err());
    }

    #[test]
    fn test_scan_int_overflow() {
        assert!(scan_int("99999999999999999999").is_err());
        assert_eq!(scan_int("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(scan_int("-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn test_parse_bool_sets() {
        for v in ["true", "TRUE", "True", "1", "yes", "YES", "on", "On"] {
            assert_eq!(parse_bool(v), Some(true), "{v}");
        }
        for v in ["false", "FALSE", "0", "no", "No", "off", "OFF", ""] {
            assert_eq!(parse_bool(v), Some(false), "{v}");
        }
        for v in ["maybe", "2", " true", "y", "enabled"] {
            assert_eq!(parse_bool(v), None, "{v}");
        }
    }

    #[test]
    fn test_parse_json_value() {
        let v: Value = parse_json(r#"{"name":"Alice"}"#).unwrap();
        assert_eq!(v, json!({"name": "Alice"}));
        let n: Value = parse_json("42").unwrap();
        assert_eq!(n, json!(42));
        assert!(parse_json::<Value>("not-json").is_err());
    }
}
