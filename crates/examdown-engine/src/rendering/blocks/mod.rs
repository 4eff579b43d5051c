//! # Block Scanning
//!
//! Line-oriented scanning of the exam dialect into HTML fragments.
//!
//! ## Scanning Phases
//!
//! 1. **Line Classification** (`classify`): each line is trimmed and tagged
//!    with local facts (blank, question marker, table cells)
//!
//! 2. **Rule Dispatch** (`rules`, `builder`): a `SectionBuilder` runs the
//!    ordered rule table over each classified line and accumulates fragments
//!    into question blocks
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned markers (Table, Passage, Heading, …)
//! - **`classify`**: `DialectLineClassifier` produces `LineClass` for each line
//! - **`rules`**: `RULES`, the priority-ordered `(name, handler)` table
//! - **`builder`**: `SectionBuilder`, the per-document scanner state
//!
//! ## Key Invariants
//!
//! - State lives in one `SectionBuilder` per document, never in statics
//! - A passage box only opens before the section's first question
//! - A pending table is flushed before any non-table line is dispatched
//! - Open passages and tables are closed exactly once at end of input

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod rules;

pub use builder::SectionBuilder;
pub use classify::{DialectLineClassifier, LineClass};
pub use rules::{BlockRule, Flow, RULES};
