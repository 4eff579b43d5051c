/// `<표 1>` / `<Table 1>` captions rendered as a small centred line.
pub struct Caption;

impl Caption {
    pub const PREFIXES: [&'static str; 2] = ["<표", "<Table"];

    pub fn matches(text: &str) -> bool {
        Self::PREFIXES.iter().any(|p| text.starts_with(p))
    }

    /// `inner` is the already transformed caption text.
    pub fn to_html(inner: &str) -> String {
        format!(r#"<p style="text-align:center;font-size:9pt;color:#666;">{inner}</p>"#)
    }
}
