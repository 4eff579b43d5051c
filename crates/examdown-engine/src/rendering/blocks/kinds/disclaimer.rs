use crate::rendering::markup;

/// `> *...AI...*` blockquote notes about machine-generated content.
pub struct Disclaimer;

impl Disclaimer {
    pub const PREFIX: &'static str = "> *";
    pub const TOKEN: &'static str = "AI";

    /// Returns the note text with the quote marker and emphasis stripped.
    pub fn parse(text: &str) -> Option<&str> {
        if !(text.starts_with(Self::PREFIX) && text.contains(Self::TOKEN)) {
            return None;
        }
        Some(text[2..].trim().trim_matches('*'))
    }

    pub fn to_html(inner: &str) -> String {
        markup::div("ai-disclaimer", inner)
    }
}
