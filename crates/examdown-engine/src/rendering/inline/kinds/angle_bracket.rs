/// Literal angle brackets and the tag allow-list that protects them.
///
/// Source text may carry real inequality signs (`2 < 3`) as well as a small
/// set of hand-written HTML tags. Only the former are escaped.
pub struct AngleBracket;

impl AngleBracket {
    pub const LT: u8 = b'<';
    pub const GT: u8 = b'>';

    /// Tag openers a `<` may begin without being escaped.
    pub const OPENERS: [&'static str; 5] = ["<div", "<span", "<strong", "<table", "<p"];

    /// Tag-name tails a `>` may follow without being escaped.
    pub const CLOSERS: [&'static str; 8] =
        ["div", "span", "strong", "table", "tr", "td", "th", "/p"];

    /// Whether a `<` at the start of `rest` opens an allow-listed tag.
    pub fn opens_tag(rest: &str) -> bool {
        Self::OPENERS.iter().any(|t| rest.starts_with(t))
    }

    /// Whether a `>` following `before` closes an allow-listed tag or an arrow.
    pub fn closes_tag(before: &str) -> bool {
        before.ends_with('-') || Self::CLOSERS.iter().any(|t| before.ends_with(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_tag_allow_list() {
        assert!(AngleBracket::opens_tag("<div class=\"x\">"));
        assert!(AngleBracket::opens_tag("<span>"));
        assert!(AngleBracket::opens_tag("<p>"));
        assert!(!AngleBracket::opens_tag("< 3"));
        assert!(!AngleBracket::opens_tag("<script>"));
    }

    #[test]
    fn closes_tag_allow_list() {
        assert!(AngleBracket::closes_tag("<strong"));
        assert!(AngleBracket::closes_tag("</td"));
        assert!(AngleBracket::closes_tag("a -"));
        assert!(!AngleBracket::closes_tag("3 "));
        assert!(!AngleBracket::closes_tag(""));
    }
}
