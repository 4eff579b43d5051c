//! Shared markup helpers used by both the block scanner and the inline
//! transformer.

/// Multiplication dot as it appears in source formulas.
pub const MIDDLE_DOT: char = '·';

/// LaTeX command that replaces [`MIDDLE_DOT`] inside math spans.
pub const CDOT: &str = "\\cdot ";

/// Opening tag of a display-math container.
///
/// The block scanner looks for this marker to decide whether a transformed
/// line is already a block element.
pub const MATH_BLOCK_OPEN: &str = r#"<div class="math-block">"#;

/// Fragment emitted for a blank source line.
pub const SPACER: &str = r#"<div class="spacer"></div>"#;

/// Closes a container opened with [`div_open`].
pub const DIV_CLOSE: &str = "</div>";

/// Replaces every [`MIDDLE_DOT`] with [`CDOT`].
pub fn latex_cdot(formula: &str) -> String {
    formula.replace(MIDDLE_DOT, CDOT)
}

/// `<div class="…">`
pub fn div_open(class: &str) -> String {
    format!(r#"<div class="{class}">"#)
}

/// `<div class="…">inner</div>`
pub fn div(class: &str, inner: &str) -> String {
    format!(r#"<div class="{class}">{inner}</div>"#)
}

/// `<span class="…">inner</span>`
pub fn span(class: &str, inner: &str) -> String {
    format!(r#"<span class="{class}">{inner}</span>"#)
}

/// `<p>inner</p>`
pub fn paragraph(inner: &str) -> String {
    format!("<p>{inner}</p>")
}

/// Wraps a flushed section in a `question-block` container, one fragment per line.
pub fn question_block(fragments: &[String]) -> String {
    format!(
        "{}\n{}\n{}",
        div_open("question-block"),
        fragments.join("\n"),
        DIV_CLOSE
    )
}
