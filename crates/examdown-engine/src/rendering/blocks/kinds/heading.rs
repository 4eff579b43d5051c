/// Section headings. Both levels flush the current question block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading<'a> {
    /// `## title`: starts a new top-level section and resets question state.
    Main(&'a str),
    /// `### label`: starts a sub-section already inside the question area.
    Sub(&'a str),
}

impl<'a> Heading<'a> {
    pub const MAIN_PREFIX: &'static str = "## ";
    pub const SUB_PREFIX: &'static str = "### ";

    pub fn parse(text: &'a str) -> Option<Self> {
        if let Some(title) = text.strip_prefix(Self::MAIN_PREFIX) {
            return Some(Heading::Main(title));
        }
        text.strip_prefix(Self::SUB_PREFIX).map(Heading::Sub)
    }

    pub fn to_html(self) -> String {
        match self {
            Heading::Main(title) => format!(r#"<h1 class="main-title">{title}</h1>"#),
            Heading::Sub(label) => format!(r#"<h2 class="sub-title">{label}</h2>"#),
        }
    }
}
