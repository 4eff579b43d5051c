use regex::Regex;
use std::sync::OnceLock;

use super::dialect_regex;

/// An `<!-- IMAGE: file.png -->` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDirective<'a> {
    /// The first non-space token after `IMAGE:`, if any.
    pub file: Option<&'a str>,
}

/// Figure block type with owned directive marker.
pub struct Figure;

impl Figure {
    pub const MARKER: &'static str = "<!-- IMAGE:";

    pub fn parse(text: &str) -> Option<ImageDirective<'_>> {
        static RE: OnceLock<Regex> = OnceLock::new();
        if !text.starts_with(Self::MARKER) {
            return None;
        }
        let file = dialect_regex(&RE, r"IMAGE:\s*(\S+)")
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str());
        Some(ImageDirective { file })
    }

    /// `figure_base` is used verbatim as the path prefix.
    pub fn to_html(figure_base: &str, file: &str) -> String {
        format!(r#"<div class="figure"><img src="{figure_base}/{file}" /></div>"#)
    }
}
