//! The hub page: every problem as a card, grouped by subject, school and year.
//!
//! Filtering, printing and the split viewer run client-side from
//! `assets/hub.js`, which reads the embedded `ALL_DATA` array.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;

use crate::models::{Catalog, IndexEntry, SUBJECT_ORDER, SubjectGroup};

/// Renders the hub page for the whole index.
///
/// `cache_bust` is appended to the hub's own asset URLs.
pub fn render_hub(
    entries: &[IndexEntry],
    site_title: &str,
    cache_bust: u64,
) -> Result<String, serde_json::Error> {
    let catalog = Catalog::new(entries);
    let groups = catalog.grouped();
    let cards_json = embed_json(&serde_json::to_string(&catalog.problems)?);

    let mut tab_buttons = String::new();
    let mut hub_content = String::new();
    for group in &groups {
        let active = if group.subject == SUBJECT_ORDER[0] { " active" } else { "" };
        let _ = writeln!(
            tab_buttons,
            r#"<button class="tab-btn{active}" data-subject="{0}">{1} <span class="tab-count">{2}</span></button>"#,
            attr(group.subject),
            text(group.subject),
            group.count
        );
        write_subject(&mut hub_content, group, &catalog);
    }

    let site_title = text(site_title);
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{site_title} - 문제 허브</title>
<link rel="stylesheet" href="assets/hub.css?v={cache_bust}">
</head>
<body>

<header class="hub-header">
  <div class="hub-header-inner">
    <img src="assets/logo.png" class="hub-logo" />
    <div>
      <h1>{site_title}</h1>
      <p class="hub-subtitle">문제 허브</p>
    </div>
  </div>
</header>

{TOOLBAR}

<div class="tab-bar">
  {tab_buttons}
</div>

<div class="stats" id="stats"></div>

<main id="hub-content">
  {hub_content}
</main>

<div id="print-container" class="print-only"></div>

{SPLIT_VIEWER}

{REPORT_MODAL}

<script>
const ALL_DATA = {cards_json};
</script>
<script src="assets/hub.js?v={cache_bust}"></script>
</body>
</html>"#
    ))
}

/// Makes serialized JSON safe to place inside a `<script>` element.
pub fn embed_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn write_subject(out: &mut String, group: &SubjectGroup<'_>, catalog: &Catalog<'_>) {
    let subject = group.subject;
    let _ = writeln!(out, r#"<div class="subject-section" data-subject="{}">"#, attr(subject));
    let _ = writeln!(
        out,
        r#"<h2 class="subject-header">{} ({})</h2>"#,
        text(subject),
        group.count
    );

    for (school, years) in &group.schools {
        let school_count: usize = years.values().map(Vec::len).sum();
        let _ = writeln!(
            out,
            r#"<div class="school-section collapsed" data-school="{}">"#,
            attr(school)
        );
        let _ = writeln!(
            out,
            r#"<h3 class="school-header">{} ({school_count})</h3>"#,
            text(school)
        );
        out.push_str("<div class=\"school-body\">\n");

        for (year, items) in years.iter().rev() {
            let year = year.map(|y| y.to_string()).unwrap_or_default();
            let _ = writeln!(out, r#"<div class="year-section" data-year="{}">"#, attr(&year));
            let _ = writeln!(out, r#"<h4 class="year-header">{}년</h4>"#, text(&year));
            out.push_str("<div class=\"card-grid\">\n");
            for entry in items {
                write_card(out, entry, school, &year, catalog);
            }
            out.push_str("</div>\n</div>\n");
        }
        out.push_str("</div>\n</div>\n");
    }
    out.push_str("</div>\n");
}

fn write_card(out: &mut String, entry: &IndexEntry, school: &str, year: &str, catalog: &Catalog<'_>) {
    let subject = attr(&entry.subject_category);
    let uid = attr(&entry.uid);
    let page = format!("{subject}/{uid}.html");

    let (sol_link, view_btn) = match catalog.solution_for(&entry.uid) {
        Some(sol) => {
            let sol_page = format!("{subject}/{}.html", attr(&sol.uid));
            (
                format!(r#"<a href="{sol_page}" class="card-sol" title="해설 보기">해설</a>"#),
                format!(
                    r#"<button class="card-view" data-prob="{page}" data-sol="{sol_page}" title="문제+해설 나란히 보기">보기</button>"#
                ),
            )
        }
        None => (
            String::new(),
            format!(r#"<button class="card-view" data-prob="{page}" data-sol="" title="문제 보기">보기</button>"#),
        ),
    };

    let _ = writeln!(
        out,
        r#"<div class="card" data-uid="{uid}" data-subject="{subject}" data-school="{}" data-year="{}">
  <input type="checkbox" class="card-check" value="{uid}">
  <a href="{page}" class="card-link">
    <span class="card-uid">{}</span>
    <span class="card-label">{}</span>
  </a>
  {sol_link}
  {view_btn}
</div>"#,
        attr(school),
        attr(year),
        text(&entry.uid),
        text(&entry.label()),
    );
}

const TOOLBAR: &str = r#"<div class="toolbar">
  <div class="filters">
    <input type="hidden" id="filter-subject" value="물리">
    <select id="filter-school">
      <option value="">전체 학교</option>
    </select>
    <select id="filter-year">
      <option value="">전체 연도</option>
    </select>
    <input type="text" id="search-box" placeholder="검색..." />
  </div>
  <div class="actions">
    <button id="btn-unreviewed" class="btn btn-unreviewed">미검수만</button>
    <button id="btn-toggle-collapse" class="btn">전체 펼치기</button>
    <button id="btn-select-all" class="btn">전체 선택</button>
    <button id="btn-deselect" class="btn">선택 해제</button>
    <button id="btn-print" class="btn btn-primary">선택 인쇄</button>
    <button id="btn-export-csv" class="btn">보고 CSV<span id="report-badge" class="report-badge"></span></button>
    <button id="btn-clear-reports" class="btn">보고 초기화</button>
  </div>
</div>"#;

const SPLIT_VIEWER: &str = r#"<div class="split-overlay" id="split-overlay">
  <div class="split-toolbar">
    <h3 id="split-title">문제 / 해설</h3>
    <span id="split-review-status" class="split-review-badge"></span>
    <div class="split-nav">
      <button id="btn-prev">&larr; 이전</button>
      <span id="split-counter"></span>
      <button id="btn-next">다음 &rarr;</button>
      <button id="btn-close-split" class="btn-close-split">닫기</button>
    </div>
  </div>
  <div class="split-panels">
    <iframe id="iframe-prob"></iframe>
    <div class="split-divider"></div>
    <iframe id="iframe-sol"></iframe>
  </div>
</div>"#;

const REPORT_MODAL: &str = r#"<div class="report-modal" id="report-modal">
  <div class="report-box">
    <h3>이상 보고</h3>
    <div class="report-uid-display" id="report-uid"></div>
    <label>대상</label>
    <select id="report-side">
      <option value="문제">문제</option>
      <option value="해설">해설</option>
    </select>
    <label>유형</label>
    <select id="report-type">
      <option value="">선택하세요</option>
      <option value="색상반전">색상반전</option>
      <option value="그림깨짐">그림깨짐</option>
      <option value="그림가림">그림가림</option>
      <option value="수식오류">수식오류</option>
      <option value="로고포함">로고포함</option>
      <option value="내용누락">내용누락</option>
      <option value="한글깨짐">한글깨짐</option>
      <option value="기타">기타</option>
    </select>
    <label>메모</label>
    <textarea id="report-memo" placeholder="상세 내용 입력..."></textarea>
    <div class="report-actions">
      <button id="btn-report-cancel" class="btn">취소</button>
      <button id="btn-report-save" class="btn btn-primary">보고 저장</button>
    </div>
  </div>
</div>"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<IndexEntry> {
        serde_json::from_str(
            r#"[
            {"uid":"P1","subject_category":"화학","filename":"f","school":"A고","year":2023,"number":"1","type":"문제"},
            {"uid":"P2","subject_category":"화학","filename":"f","school":"A고","year":2024,"number":"1","type":"문제","note":"</script>"},
            {"uid":"P1-해설","subject_category":"화학","filename":"g","is_solution":true,"problem_uid":"P1"}
        ]"#,
        )
        .unwrap()
    }

    #[test]
    fn embeds_only_problems_as_script_safe_json() {
        let html = render_hub(&entries(), "과학 면접 아카데미", 42).unwrap();

        assert!(html.contains("const ALL_DATA = ["));
        assert!(html.contains(r#""note":"<\/script>""#));
        assert!(!html.contains(r#""uid":"P1-해설""#));
        assert!(html.contains("assets/hub.js?v=42"));
    }

    #[test]
    fn tabs_only_for_present_subjects() {
        let html = render_hub(&entries(), "t", 0).unwrap();

        assert!(html.contains(
            r#"<button class="tab-btn" data-subject="화학">화학 <span class="tab-count">2</span></button>"#
        ));
        assert!(!html.contains(r#"data-subject="물리">"#));
    }

    #[test]
    fn years_descend_within_school() {
        let html = render_hub(&entries(), "t", 0).unwrap();
        let y2024 = html.find(r#"data-year="2024">"#).unwrap();
        let y2023 = html.find(r#"data-year="2023">"#).unwrap();
        assert!(y2024 < y2023);
        assert!(html.contains(r#"<h3 class="school-header">A고 (2)</h3>"#));
    }

    #[test]
    fn cards_link_solutions() {
        let html = render_hub(&entries(), "t", 0).unwrap();

        assert!(html.contains(r#"<a href="화학/P1-해설.html" class="card-sol""#));
        assert!(html.contains(r#"data-prob="화학/P1.html" data-sol="화학/P1-해설.html""#));
        assert!(html.contains(r#"data-prob="화학/P2.html" data-sol="" title="문제 보기""#));
        assert!(html.contains(r#"<span class="card-label">문제 1</span>"#));
    }

    #[test]
    fn first_subject_tab_is_active() {
        let entries: Vec<IndexEntry> = serde_json::from_str(
            r#"[{"uid":"M","subject_category":"물리","filename":"f","school":"A","year":2024}]"#,
        )
        .unwrap();
        let html = render_hub(&entries, "t", 0).unwrap();
        assert!(html.contains(r#"<button class="tab-btn active" data-subject="물리">"#));
    }
}
