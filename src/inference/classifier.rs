//! Value classification for example tokens.
//!
//! Decides whether an example value denotes an integer, a floating-point
//! number, a file path or an opaque string. Classification never fails: every
//! token resolves to exactly one `ArgType`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::descriptor::ArgType;

/// Example value that always classifies as a file path.
pub const FILE_SENTINEL: &str = "FILE";

static DECIMAL_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("valid regex"));

static HEX_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^-?0x[0-9a-f]+$").expect("valid regex"));

/// Returns true if the token is a decimal or `0x`-prefixed hex integer.
pub fn is_integer(token: &str) -> bool {
    DECIMAL_INT.is_match(token) || HEX_INT.is_match(token)
}

/// Returns true if the token is a hex integer such as `0x1A` or `-0x1a`.
pub fn is_hex_integer(token: &str) -> bool {
    HEX_INT.is_match(token)
}

/// Returns true if the token parses as a floating-point literal.
pub fn is_float(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}

/// Returns true if the token looks like a number (integer or float).
///
/// Used by the builder so that `-5` or `-0x1` are treated as values rather
/// than short options.
pub fn is_numeric(token: &str) -> bool {
    is_integer(token) || is_float(token)
}

/// Returns true if the token is the `FILE` placeholder or names an existing
/// file.
pub fn is_file_path(token: &str) -> bool {
    token == FILE_SENTINEL || Path::new(token).is_file()
}

/// Classifies an example value.
///
/// Checks run in a fixed order: integer, float, file path, then string.
pub fn classify(token: &str) -> ArgType {
    if is_integer(token) {
        ArgType::Integer
    } else if is_float(token) {
        ArgType::Float
    } else if is_file_path(token) {
        ArgType::FilePath
    } else {
        ArgType::String
    }
}

/// Splits a comma-separated string example into its choices.
///
/// Returns `None` if the token contains no comma. Segments are kept verbatim;
/// commas cannot be escaped.
pub fn split_choices(token: &str) -> Option<Vec<String>> {
    if !token.contains(',') {
        return None;
    }

    Some(token.split(',').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn classifies_decimal_integers() {
        for token in ["0", "123", "-123", "+7", "007"] {
            assert_eq!(classify(token), ArgType::Integer, "{}", token);
        }
    }

    #[test]
    fn classifies_hex_integers() {
        for token in ["0x1A", "-0x1A", "0x1a", "0XFF", "-0Xff"] {
            assert_eq!(classify(token), ArgType::Integer, "{}", token);
            assert!(is_hex_integer(token));
        }
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(!is_integer("0x"));
        assert!(!is_integer("0xZZ"));
        assert!(!is_integer("+0x1"));
        assert_eq!(classify("0xZZ"), ArgType::String);
    }

    #[test]
    fn classifies_floats() {
        for token in ["3.14", "-3.14", "1e5", ".5", "5."] {
            assert_eq!(classify(token), ArgType::Float, "{}", token);
        }
    }

    #[test]
    fn integer_takes_precedence_over_float() {
        assert!(is_float("42"));
        assert_eq!(classify("42"), ArgType::Integer);
    }

    #[test]
    fn classifies_file_sentinel() {
        assert_eq!(classify("FILE"), ArgType::FilePath);
        assert_eq!(classify("file"), ArgType::String);
    }

    #[test]
    fn classifies_existing_file() {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        let path = file.path().to_str().expect("temp path is utf-8");

        assert_eq!(classify(path), ArgType::FilePath);
    }

    #[test]
    fn directory_is_not_a_file_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().to_str().expect("temp path is utf-8");

        assert_eq!(classify(path), ArgType::String);
    }

    #[test]
    fn falls_back_to_string() {
        for token in ["hello", "", "-", "12abc", "a,b,c"] {
            assert_eq!(classify(token), ArgType::String, "{:?}", token);
        }
    }

    #[test]
    fn splits_choices() {
        assert_eq!(
            split_choices("a,b,c"),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(split_choices("abc"), None);
    }

    #[test]
    fn numeric_detection_for_dash_tokens() {
        assert!(is_numeric("-5"));
        assert!(is_numeric("-0x1"));
        assert!(is_numeric("-2.5"));
        assert!(!is_numeric("-a"));
        assert!(!is_numeric("-"));
    }
}
