use regex::Regex;
use std::sync::OnceLock;

use super::dialect_regex;

/// Question-start markers.
///
/// Recognised shapes, all anchored at line start:
/// - `**3.**`
/// - `**[문제` and `**[물리`, `**[화학`, `**[생명` subject tags
/// - `**문제 3` and `문제 3`
pub struct QuestionMarker;

impl QuestionMarker {
    const PATTERN: &'static str =
        r"^(?:\*\*\d+\.\*\*|\*\*\[문제|\*\*\[(?:물리|화학|생명)|\*\*문제\s*\d+|문제\s*\d+)";

    pub fn matches(text: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        dialect_regex(&RE, Self::PATTERN).is_match(text)
    }
}
