use regex::Regex;
use std::sync::OnceLock;

use super::dialect_regex;
use crate::rendering::markup;

/// A `**(N)**` sub-question line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubItem<'a> {
    pub number: &'a str,
    pub rest: &'a str,
}

impl<'a> SubItem<'a> {
    pub fn parse(text: &'a str) -> Option<Self> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let caps = dialect_regex(&RE, r"^\*\*\((\d+)\)\*\*\s*(.*)").captures(text)?;
        Some(SubItem {
            number: caps.get(1)?.as_str(),
            rest: caps.get(2).map_or("", |m| m.as_str()),
        })
    }

    /// `rest_html` is the transformed remainder.
    pub fn to_html(&self, rest_html: &str) -> String {
        format!(
            r#"<p class="sub-question">{} {rest_html}</p>"#,
            markup::span("sq-num", &format!("({})", self.number))
        )
    }
}
