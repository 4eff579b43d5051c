use regex::Regex;
use std::sync::OnceLock;

use super::dialect_regex;
use crate::rendering::markup;

/// A lettered passage line: `[가] text`, `(나) text`, optionally bold-wrapped marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassageLine<'a> {
    /// The marker including its brackets, e.g. `[가]` or `(나)`.
    pub marker: &'a str,
    /// Trimmed text after the marker; may be empty.
    pub rest: &'a str,
}

/// Passage box type with owned marker grammar.
///
/// Passages group reference excerpts lettered with the fourteen Korean
/// ordinals 가 through 하. A box may only be opened before the first
/// question of a section; once open it stays open until a question marker,
/// a heading or end of document closes it.
pub struct Passage;

impl Passage {
    /// The ordinal letters, in order.
    pub const LETTERS: [char; 14] = [
        '가', '나', '다', '라', '마', '바', '사', '아', '자', '차', '카', '타', '파', '하',
    ];

    const BRACKET: &'static str =
        r"^(?:\*\*)?(\[[가나다라마바사아자차카타파하]\])(?:\*\*)?\s*(.*)";
    const PAREN: &'static str =
        r"^(?:\*\*)?(\([가나다라마바사아자차카타파하]\))(?:\*\*)?\s*(.*)";
    const NAMED: &'static str =
        r"^(?:(?:\*\*)?(?:<|&lt;)제시문\s*\d*(?:>|&gt;)(?:\*\*)?|\[제시문(?:\s*\d+)?\])$";

    pub fn open() -> String {
        markup::div_open("passage-box")
    }

    /// `[가] text`
    pub fn bracket(text: &str) -> Option<PassageLine<'_>> {
        static RE: OnceLock<Regex> = OnceLock::new();
        Self::capture(dialect_regex(&RE, Self::BRACKET), text)
    }

    /// `(가) text`
    pub fn paren(text: &str) -> Option<PassageLine<'_>> {
        static RE: OnceLock<Regex> = OnceLock::new();
        Self::capture(dialect_regex(&RE, Self::PAREN), text)
    }

    /// `<제시문>`, `<제시문 2>`, `**<제시문 1>**`, `[제시문]`, `[제시문 3]`.
    pub fn is_named(text: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        dialect_regex(&RE, Self::NAMED).is_match(text)
    }

    /// One passage line: the marker span, then the transformed remainder if any.
    pub fn marker_line(marker: &str, rest_html: &str) -> String {
        let marker = markup::span("passage-marker", marker);
        if rest_html.is_empty() {
            markup::paragraph(&marker)
        } else {
            markup::paragraph(&format!("{marker} {rest_html}"))
        }
    }

    fn capture<'a>(re: &Regex, text: &'a str) -> Option<PassageLine<'a>> {
        let caps = re.captures(text)?;
        Some(PassageLine {
            marker: caps.get(1)?.as_str(),
            rest: caps.get(2).map_or("", |m| m.as_str().trim()),
        })
    }
}
