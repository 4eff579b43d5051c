use examdown_engine::{render, transform_inline};
use pretty_assertions::assert_eq;

fn block(fragments: &[&str]) -> String {
    format!(
        "<div class=\"question-block\">\n{}\n</div>",
        fragments.join("\n")
    )
}

#[test]
fn plain_text_only_escapes_angle_brackets() {
    assert_eq!(transform_inline("질량 보존 법칙"), "질량 보존 법칙");
    assert_eq!(transform_inline("x < y, y > z"), "x &lt; y, y &gt; z");
}

#[test]
fn math_round_trip() {
    assert!(transform_inline("$x+y$").contains(r"\(x+y\)"));

    let out = transform_inline("$$a·b$$");
    assert!(out.contains(r#"<div class="math-block">\[a\cdot b\]</div>"#));
    assert!(!out.contains('·'));
}

#[test]
fn bold_span() {
    assert_eq!(transform_inline("**hi**"), "<strong>hi</strong>");
    assert!(transform_inline("**unterminated").contains("**unterminated"));
}

#[test]
fn table_round_trip() {
    let html = render("| A | B |\n|---|:-:|\n| 1 | 2 |", "figs");

    assert_eq!(html.matches("<table").count(), 1);
    assert_eq!(html.matches("<tr>").count(), 2);
    assert_eq!(
        html,
        block(&[
            "<table class=\"md-table\">\n<tr><th>A</th><th>B</th></tr>\n<tr><td>1</td><td>2</td></tr>\n</table>"
        ])
    );
}

#[test]
fn paren_letters_after_question_are_plain_text() {
    let html = render("(가) 제시문\n**1.** 물음\n(나) 보기", "figs");

    assert_eq!(
        html,
        block(&[
            "<div class=\"passage-box\">",
            "<p><span class=\"passage-marker\">(가)</span> 제시문</p>",
            "</div>",
            "<p><strong>1.</strong> 물음</p>",
            "<p>(나) 보기</p>",
        ])
    );
}

#[test]
fn bracket_letters_continue_an_open_passage() {
    let html = render("[가] 하나\n\n[나] 둘\n**문제 1** 물음", "figs");

    assert_eq!(
        html,
        block(&[
            "<div class=\"passage-box\">",
            "<p><span class=\"passage-marker\">[가]</span> 하나</p>",
            "<div class=\"spacer\"></div>",
            "<p><span class=\"passage-marker\">[나]</span> 둘</p>",
            "</div>",
            "<p><strong>문제 1</strong> 물음</p>",
        ])
    );
}

#[test]
fn bracket_letters_after_a_question_do_not_open_a_box() {
    // The question marker closed the passage and blocks reopening it.
    let html = render("[가] 하나\n**1.** 물음\n[나] 둘", "figs");

    assert_eq!(html.matches("passage-box").count(), 1);
    assert!(html.ends_with("<p>[나] 둘</p>\n</div>"));
}

#[test]
fn sub_heading_counts_as_past_first_question() {
    let html = render("### (가)\n[가] 상자 없음", "figs");

    assert_eq!(
        html,
        block(&[
            "<h2 class=\"sub-title\">(가)</h2>",
            "<p>[가] 상자 없음</p>",
        ])
    );
}

#[test]
fn heading_flush_boundary() {
    let html = render("## 첫째\n본문 하나\n## 둘째\n본문 둘", "figs");

    assert_eq!(html.matches("<div class=\"question-block\">").count(), 2);
    assert_eq!(
        html,
        format!(
            "{}\n{}",
            block(&["<h1 class=\"main-title\">첫째</h1>", "<p>본문 하나</p>"]),
            block(&["<h1 class=\"main-title\">둘째</h1>", "<p>본문 둘</p>"]),
        )
    );
}

#[test]
fn heading_closes_passage_in_previous_block() {
    let html = render("[가] 하나\n## 다음", "figs");

    assert_eq!(
        html,
        format!(
            "{}\n{}",
            block(&[
                "<div class=\"passage-box\">",
                "<p><span class=\"passage-marker\">[가]</span> 하나</p>",
                "</div>",
            ]),
            block(&["<h1 class=\"main-title\">다음</h1>"]),
        )
    );
}

#[test]
fn angle_bracket_safety() {
    assert_eq!(transform_inline("2 < 3"), "2 &lt; 3");

    let html = render("[가] 2 < 3", "figs");
    assert!(html.contains("<div class=\"passage-box\">"));
    assert!(!html.contains("&lt;div"));
    assert!(html.contains("2 &lt; 3"));
}

#[test]
fn end_of_document_closes_open_passage_once() {
    let html = render("[가] 하나\n[나] 둘", "figs");

    assert_eq!(html.matches("</div>").count(), 2);
    assert_eq!(
        html,
        block(&[
            "<div class=\"passage-box\">",
            "<p><span class=\"passage-marker\">[가]</span> 하나</p>",
            "<p><span class=\"passage-marker\">[나]</span> 둘</p>",
            "</div>",
        ])
    );
}

#[test]
fn end_of_document_flushes_open_table_once() {
    let html = render("머리말\n| x | y |\n| 1 | 2 |", "figs");

    assert_eq!(html.matches("<table").count(), 1);
    assert_eq!(
        html,
        block(&[
            "<p>머리말</p>",
            "<table class=\"md-table\">\n<tr><th>x</th><th>y</th></tr>\n<tr><td>1</td><td>2</td></tr>\n</table>",
        ])
    );
}

#[test]
fn end_of_document_closes_passage_before_flushing_table() {
    let html = render("[가] 하나\n| a |", "figs");

    assert_eq!(
        html,
        block(&[
            "<div class=\"passage-box\">",
            "<p><span class=\"passage-marker\">[가]</span> 하나</p>",
            "</div>",
            "<table class=\"md-table\">\n<tr><th>a</th></tr>\n</table>",
        ])
    );
}

#[test]
fn image_directive_without_file_is_dropped() {
    let html = render("<!-- IMAGE:\n<!-- IMAGE: a.png -->", "figs");

    assert_eq!(
        html,
        block(&["<div class=\"figure\"><img src=\"figs/a.png\" /></div>"])
    );
}

#[test]
fn named_passage_marker_opens_box() {
    let html = render("[제시문 3]\n제시문 본문", "figs");

    assert_eq!(
        html,
        block(&[
            "<div class=\"passage-box\">",
            "<p><span class=\"passage-marker\">[제시문 3]</span></p>",
            "<p>제시문 본문</p>",
            "</div>",
        ])
    );
}

#[test]
fn horizontal_rules_are_dropped() {
    assert_eq!(render("위\n---\n아래", "f"), block(&["<p>위</p>", "<p>아래</p>"]));
}

#[test]
fn empty_document_is_one_spacer() {
    assert_eq!(render("", "figs"), block(&["<div class=\"spacer\"></div>"]));
}

#[test]
fn block_math_line_is_not_wrapped_in_paragraph() {
    assert_eq!(
        render("$$E = mc^2$$", "f"),
        block(&[r#"<div class="math-block">\[E = mc^2\]</div>"#])
    );
}
