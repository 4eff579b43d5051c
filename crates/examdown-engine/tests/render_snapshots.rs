use examdown_engine::render;

const FIGURE_BASE: &str = "../../data/물리/2024_a_1";

#[test]
fn fixture_passage_problem() {
    assert_fixture("passage_problem");
}

#[test]
fn fixture_table_solution() {
    assert_fixture("table_solution");
}

#[test]
fn fixture_multi_section() {
    assert_fixture("multi_section");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let html = render(&md, FIGURE_BASE);
    insta::assert_snapshot!(name, html);
}

/// Rendering twice yields identical output; no state survives a call.
#[test]
fn rendering_is_repeatable() {
    let md = "[가] 제시문\n**1.** 물음\n| a |\n";
    assert_eq!(render(md, "f"), render(md, "f"));
}
