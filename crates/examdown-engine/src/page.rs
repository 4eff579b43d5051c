//! Standalone problem and solution pages.
//!
//! The engine body is embedded verbatim; only the chrome around it (titles,
//! labels, links) is escaped here.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use relative_path::RelativePathBuf;

use crate::models::{IndexEntry, subject_label};

/// KaTeX release the pages load from the CDN.
pub const KATEX_VERSION: &str = "0.16.9";

/// Page chrome for one index entry.
pub struct ProblemPage<'a> {
    pub entry: &'a IndexEntry,
    /// Whether a solution page exists for this problem.
    pub has_solution: bool,
    pub site_title: &'a str,
}

impl<'a> ProblemPage<'a> {
    /// Path from the page to the entry's figure directory.
    pub fn figure_base(&self) -> RelativePathBuf {
        RelativePathBuf::from("../../data")
            .join(&self.entry.subject_category)
            .join(&self.entry.filename)
    }

    fn header_label(&self) -> String {
        let mut label = format!(
            "{} &nbsp;|&nbsp; {}",
            text(self.site_title),
            text(subject_label(&self.entry.subject_category))
        );
        if self.entry.is_solution {
            label.push_str(" &nbsp;|&nbsp; 해설");
        }
        label
    }

    fn nav_links(&self) -> String {
        const WRAP: &str = r#"<div style="text-align:right;padding:4px 20mm 0;">"#;
        const LINK_STYLE: &str = "color:#003366;font-size:9pt;text-decoration:none;";
        let entry = self.entry;
        match (&entry.problem_uid, entry.is_solution) {
            (Some(problem_uid), true) => format!(
                r#"{WRAP}<a href="{}.html" style="{LINK_STYLE}">&larr; 문제 보기</a></div>"#,
                attr(problem_uid)
            ),
            (_, false) if self.has_solution => format!(
                r#"{WRAP}<a href="{}-해설.html" class="sol-link" style="{LINK_STYLE}">해설 보기 &rarr;</a></div>"#,
                attr(&entry.uid)
            ),
            _ => String::new(),
        }
    }

    /// Wraps a rendered body into a complete HTML document.
    pub fn to_html(&self, body_html: &str) -> String {
        let footer_uid = text(self.entry.footer_uid());
        let title = format!("{footer_uid} | {}", text(&self.entry.filename));
        let header_label = self.header_label();
        let nav_links = self.nav_links();
        let katex = format!("https://cdn.jsdelivr.net/npm/katex@{KATEX_VERSION}/dist");

        format!(
            r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="{katex}/katex.min.css">
<link rel="stylesheet" href="../assets/style.css">
</head>
<body>

<div class="header">
  <img src="../assets/logo.png" />
  <span class="header-text">{header_label}</span>
</div>
<div class="header-line"></div>

{nav_links}
<div class="content">
  {body_html}
</div>

<div class="footer">
  <div class="footer-line"></div>
  <div class="footer-text">{footer_uid}</div>
</div>

<script src="{katex}/katex.min.js"></script>
<script src="{katex}/contrib/auto-render.min.js"></script>
<script>
  document.addEventListener("DOMContentLoaded", function() {{
    renderMathInElement(document.body, {{
      delimiters: [
        {{left: "\\[", right: "\\]", display: true}},
        {{left: "\\(", right: "\\)", display: false}},
        {{left: "$$", right: "$$", display: true}},
        {{left: "$", right: "$", display: false}}
      ],
      throwOnError: false
    }});
  }});
</script>
</body>
</html>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> IndexEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn figure_base_points_into_data_dir() {
        let e = entry(r#"{"uid":"P","subject_category":"물리","filename":"2024_a_1"}"#);
        let page = ProblemPage {
            entry: &e,
            has_solution: false,
            site_title: "과학 면접 아카데미",
        };
        assert_eq!(page.figure_base().as_str(), "../../data/물리/2024_a_1");
    }

    #[test]
    fn problem_page_links_to_solution() {
        let e = entry(r#"{"uid":"P-1","subject_category":"생물","filename":"f"}"#);
        let page = ProblemPage {
            entry: &e,
            has_solution: true,
            site_title: "과학 면접 아카데미",
        };
        let html = page.to_html("<div class=\"question-block\"></div>");

        assert!(html.contains("<title>P-1 | f</title>"));
        assert!(html.contains("과학 면접 아카데미 &nbsp;|&nbsp; 생명과학</span>"));
        assert!(html.contains(r#"<a href="P-1-해설.html" class="sol-link""#));
        assert!(html.contains("<div class=\"question-block\"></div>"));
        assert!(html.contains(r#"{left: "\\[", right: "\\]", display: true}"#));
    }

    #[test]
    fn solution_page_links_back_and_uses_problem_uid() {
        let e = entry(
            r#"{"uid":"P-1-해설","subject_category":"물리","filename":"f","is_solution":true,"problem_uid":"P-1"}"#,
        );
        let page = ProblemPage {
            entry: &e,
            has_solution: false,
            site_title: "과학 면접 아카데미",
        };
        let html = page.to_html("");

        assert!(html.contains("물리학 &nbsp;|&nbsp; 해설</span>"));
        assert!(html.contains(r#"<a href="P-1.html""#));
        assert!(html.contains(r#"<div class="footer-text">P-1</div>"#));
        assert!(!html.contains("sol-link"));
    }

    #[test]
    fn problem_without_solution_has_no_nav() {
        let e = entry(r#"{"uid":"P-2","subject_category":"화학","filename":"f"}"#);
        let page = ProblemPage {
            entry: &e,
            has_solution: false,
            site_title: "t",
        };
        assert!(!page.to_html("").contains("text-align:right;padding"));
    }

    #[test]
    fn chrome_text_is_escaped() {
        let e = entry(r#"{"uid":"P<1>","subject_category":"물리","filename":"a&b"}"#);
        let page = ProblemPage {
            entry: &e,
            has_solution: false,
            site_title: "t",
        };
        assert!(page.to_html("").contains("<title>P&lt;1&gt; | a&amp;b</title>"));
    }
}
