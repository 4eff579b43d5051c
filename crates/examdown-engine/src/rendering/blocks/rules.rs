//! The ordered block rule table.
//!
//! Each rule inspects a classified line and either consumes it or lets it
//! fall through to the next rule. The first rule to consume wins. The table
//! rule and the question-marker rule may act without consuming: the former
//! flushes a pending table, the latter records that a question has started.

use log::debug;

use super::{
    builder::SectionBuilder,
    classify::LineClass,
    kinds::{Caption, Disclaimer, Figure, Heading, Passage, SubItem, Table},
};
use crate::rendering::{inline::transform_inline, markup};

/// Whether a rule claimed the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Consumed,
    Continue,
}

/// One entry of the dispatch table.
pub struct BlockRule {
    pub name: &'static str,
    pub apply: fn(&mut SectionBuilder, &LineClass<'_>) -> Flow,
}

/// Block rules in priority order.
pub const RULES: &[BlockRule] = &[
    BlockRule { name: "table-row", apply: table_row },
    BlockRule { name: "question-marker", apply: question_marker },
    BlockRule { name: "blank", apply: blank },
    BlockRule { name: "heading", apply: heading },
    BlockRule { name: "image", apply: image },
    BlockRule { name: "horizontal-rule", apply: horizontal_rule },
    BlockRule { name: "ai-disclaimer", apply: ai_disclaimer },
    BlockRule { name: "table-caption", apply: table_caption },
    BlockRule { name: "passage-bracket", apply: passage_bracket },
    BlockRule { name: "passage-paren", apply: passage_paren },
    BlockRule { name: "named-passage", apply: named_passage },
    BlockRule { name: "sub-item", apply: sub_item },
    BlockRule { name: "paragraph", apply: paragraph },
];

fn table_row(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    let Some(cells) = &lc.table_cells else {
        b.flush_table();
        return Flow::Continue;
    };
    if !Table::is_separator(cells) {
        b.push_table_row(cells.iter().map(|c| transform_inline(c)).collect());
    }
    Flow::Consumed
}

fn question_marker(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    if lc.is_question_marker {
        b.enter_question();
    }
    Flow::Continue
}

fn blank(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    if !lc.is_blank {
        return Flow::Continue;
    }
    b.emit(markup::SPACER);
    Flow::Consumed
}

fn heading(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    let Some(heading) = Heading::parse(lc.text) else {
        return Flow::Continue;
    };
    b.start_section(heading);
    Flow::Consumed
}

fn image(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    let Some(directive) = Figure::parse(lc.text) else {
        return Flow::Continue;
    };
    match directive.file {
        Some(file) => {
            let html = Figure::to_html(b.figure_base(), file);
            b.emit(html);
        }
        None => debug!("dropping image directive without a file name: {}", lc.text),
    }
    Flow::Consumed
}

fn horizontal_rule(_b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    if lc.text.starts_with("---") {
        Flow::Consumed
    } else {
        Flow::Continue
    }
}

fn ai_disclaimer(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    let Some(inner) = Disclaimer::parse(lc.text) else {
        return Flow::Continue;
    };
    b.emit(Disclaimer::to_html(inner));
    Flow::Consumed
}

fn table_caption(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    if !Caption::matches(lc.text) {
        return Flow::Continue;
    }
    b.emit(Caption::to_html(&transform_inline(lc.text)));
    Flow::Consumed
}

/// Bracketed letters open a passage box or add to the open one.
fn passage_bracket(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    let Some(line) = Passage::bracket(lc.text) else {
        return Flow::Continue;
    };
    if !b.enter_passage() {
        return Flow::Continue;
    }
    b.emit(Passage::marker_line(line.marker, &transform_inline(line.rest)));
    Flow::Consumed
}

/// Parenthesised letters are passage markers only before the first question.
fn passage_paren(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    let Some(line) = Passage::paren(lc.text) else {
        return Flow::Continue;
    };
    if b.past_first_question() || !b.enter_passage() {
        return Flow::Continue;
    }
    b.emit(Passage::marker_line(line.marker, &transform_inline(line.rest)));
    Flow::Consumed
}

fn named_passage(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    if !Passage::is_named(lc.text) || !b.enter_passage() {
        return Flow::Continue;
    }
    let display = transform_inline(lc.text)
        .replace("<strong>", "")
        .replace("</strong>", "");
    b.emit(Passage::marker_line(&display, ""));
    Flow::Consumed
}

fn sub_item(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    let Some(item) = SubItem::parse(lc.text) else {
        return Flow::Continue;
    };
    b.emit(item.to_html(&transform_inline(item.rest)));
    Flow::Consumed
}

fn paragraph(b: &mut SectionBuilder, lc: &LineClass<'_>) -> Flow {
    let text = transform_inline(lc.text);
    if text.contains(markup::MATH_BLOCK_OPEN) {
        b.emit(text);
    } else {
        b.emit(markup::paragraph(&text));
    }
    Flow::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "table-row",
                "question-marker",
                "blank",
                "heading",
                "image",
                "horizontal-rule",
                "ai-disclaimer",
                "table-caption",
                "passage-bracket",
                "passage-paren",
                "named-passage",
                "sub-item",
                "paragraph",
            ]
        );
    }

    #[test]
    fn paragraph_rule_always_consumes() {
        let mut b = SectionBuilder::new("figs");
        let lc = crate::rendering::blocks::DialectLineClassifier.classify("anything");
        let last = RULES.last().unwrap();
        assert_eq!((last.apply)(&mut b, &lc), Flow::Consumed);
    }
}
