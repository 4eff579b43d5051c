use crate::rendering::markup;

/// Math span type with owned delimiter constants.
///
/// `$$...$$` is display math and renders as a block container; `$...$` is
/// inline math. Formula bodies are emitted without escaping.
pub struct Math;

impl Math {
    /// The math delimiter byte.
    pub const DOLLAR: u8 = b'$';
    /// Display-math delimiter.
    pub const BLOCK: &'static str = "$$";
    /// Inline-math delimiter.
    pub const INLINE: &'static str = "$";

    /// Renders a display formula as a `math-block` container with `\[ \]`.
    pub fn block(formula: &str) -> String {
        format!(
            "{}\\[{}\\]</div>",
            markup::MATH_BLOCK_OPEN,
            markup::latex_cdot(formula)
        )
    }

    /// Renders an inline formula with `\( \)` delimiters.
    pub fn inline(formula: &str) -> String {
        format!("\\({}\\)", markup::latex_cdot(formula))
    }
}
