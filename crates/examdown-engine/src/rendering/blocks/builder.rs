use log::trace;

use super::{
    classify::LineClass,
    kinds::{Heading, Passage, Table},
    rules::{Flow, RULES},
};
use crate::rendering::markup;

/// Scanner state for one document.
///
/// Fragments are appended to the current section and never edited; a
/// section is wrapped into a question block when a heading arrives or the
/// document ends.
pub struct SectionBuilder {
    figure_base: String,
    table: Option<Table>,
    in_passage: bool,
    past_first_question: bool,
    section: Vec<String>,
    blocks: Vec<String>,
}

impl SectionBuilder {
    pub fn new(figure_base: &str) -> Self {
        Self {
            figure_base: figure_base.to_string(),
            table: None,
            in_passage: false,
            past_first_question: false,
            section: vec![],
            blocks: vec![],
        }
    }

    /// Runs the rule table over one classified line.
    pub fn push(&mut self, lc: &LineClass<'_>) {
        for rule in RULES {
            if (rule.apply)(self, lc) == Flow::Consumed {
                trace!("line consumed by {}", rule.name);
                return;
            }
        }
    }

    /// EOF flush: close the passage, then the table, then the last section.
    pub fn finish(mut self) -> String {
        self.close_passage();
        self.flush_table();
        self.flush_section();
        self.blocks.join("\n")
    }

    pub fn figure_base(&self) -> &str {
        &self.figure_base
    }

    pub fn past_first_question(&self) -> bool {
        self.past_first_question
    }

    pub fn emit(&mut self, fragment: impl Into<String>) {
        self.section.push(fragment.into());
    }

    pub fn push_table_row(&mut self, row: Vec<String>) {
        self.table.get_or_insert_with(Table::default).push_row(row);
    }

    pub fn flush_table(&mut self) {
        if let Some(table) = self.table.take() {
            self.emit(table.to_html());
        }
    }

    /// A question marker always terminates an open passage.
    pub fn enter_question(&mut self) {
        self.past_first_question = true;
        self.close_passage();
    }

    /// Opens a passage box if none is open and no question has been seen.
    ///
    /// Returns whether a passage is open afterwards.
    pub fn enter_passage(&mut self) -> bool {
        if !self.in_passage && !self.past_first_question {
            self.emit(Passage::open());
            self.in_passage = true;
        }
        self.in_passage
    }

    /// Closes any passage, flushes the section and emits the heading first
    /// in a fresh one.
    pub fn start_section(&mut self, heading: Heading<'_>) {
        self.close_passage();
        self.past_first_question = matches!(heading, Heading::Sub(_));
        self.flush_section();
        self.emit(heading.to_html());
    }

    fn close_passage(&mut self) {
        if self.in_passage {
            self.emit(markup::DIV_CLOSE);
            self.in_passage = false;
        }
    }

    fn flush_section(&mut self) {
        if self.section.is_empty() {
            return;
        }
        let fragments = std::mem::take(&mut self.section);
        trace!("flushing question block of {} fragments", fragments.len());
        self.blocks.push(markup::question_block(&fragments));
    }
}
