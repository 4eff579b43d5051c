/// Bold span type with owned delimiter constant.
pub struct Bold;

impl Bold {
    /// Opens and closes a bold span.
    pub const DELIM: &'static str = "**";

    /// Wraps `inner` verbatim; bold interiors are not transformed further.
    pub fn wrap(inner: &str) -> String {
        format!("<strong>{inner}</strong>")
    }
}
