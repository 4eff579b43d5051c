/// Pipe table accumulated row by row.
///
/// The first accumulated row renders as header cells, the rest as body
/// cells. Separator rows (`|---|:-:|`) are never accumulated.
#[derive(Debug, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Cell delimiter.
    pub const PIPE: char = '|';

    /// Splits a trimmed line into trimmed cells if it is shaped like a table row.
    ///
    /// The empty outer cells produced by the leading and trailing pipe are
    /// dropped, so `|a|b|` yields `["a", "b"]` and a lone `|` yields no cells.
    pub fn cells(text: &str) -> Option<Vec<&str>> {
        if !(text.starts_with(Self::PIPE) && text.ends_with(Self::PIPE)) {
            return None;
        }
        let parts: Vec<&str> = text.split(Self::PIPE).collect();
        let inner = &parts[1..parts.len() - 1];
        Some(inner.iter().map(|c| c.trim()).collect())
    }

    /// A header/body divider: every cell is made only of `-` and `:`.
    pub fn is_separator(cells: &[&str]) -> bool {
        cells
            .iter()
            .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<table class=\"md-table\">\n");
        for (i, row) in self.rows.iter().enumerate() {
            let tag = if i == 0 { "th" } else { "td" };
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<{tag}>{cell}</{tag}>"));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>");
        html
    }
}
