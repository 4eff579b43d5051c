use super::kinds::{QuestionMarker, Table};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block scanning: each line is classified independently
/// without reference to the scanner state.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line with surrounding whitespace removed.
    pub text: &'a str,
    /// Whether the line is blank.
    pub is_blank: bool,
    /// Whether the line starts a question.
    pub is_question_marker: bool,
    /// Trimmed cells if the line is shaped like a pipe-table row.
    pub table_cells: Option<Vec<&'a str>>,
}

/// Classifies individual lines for the block scanning phase.
pub struct DialectLineClassifier;

impl DialectLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let text = line.trim();
        LineClass {
            text,
            is_blank: text.is_empty(),
            is_question_marker: QuestionMarker::matches(text),
            table_cells: Table::cells(text),
        }
    }
}
