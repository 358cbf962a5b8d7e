//! Shared helper functions for CLI commands

use miette::Result;

use crate::entities::vehicle::MediaType;

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Parse a media type argument into the domain type with a CLI-friendly error
pub fn parse_media_type(s: &str) -> Result<MediaType> {
    s.parse().map_err(|e: String| miette::miette!("{}", e))
}

/// Split a comma-separated flag value into trimmed, non-empty labels
pub fn split_labels(s: &str) -> Vec<String> {
    s.split(',')
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv("with\nnewline"), "\"with\nnewline\"");
    }

    #[test]
    fn test_parse_media_type() {
        assert!(parse_media_type("tv").is_ok());
        assert!(parse_media_type("BILLBOARD").is_err());
    }

    #[test]
    fn test_split_labels() {
        assert_eq!(
            split_labels("Urban, Adults 25-54 ,"),
            vec!["Urban".to_string(), "Adults 25-54".to_string()]
        );
        assert!(split_labels("").is_empty());
    }
}
