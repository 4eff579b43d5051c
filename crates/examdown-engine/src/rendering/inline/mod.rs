//! # Inline Transformation
//!
//! Cursor-based rewriting of a single line's text into HTML-safe markup.
//!
//! ## Architecture
//!
//! Inline transformation is stateless and runs per fragment: the block
//! scanner hands it one line (or one table cell, or the remainder after a
//! passage marker) and embeds whatever comes back.
//!
//! The transformer scans left to right and never backtracks past a consumed
//! span:
//! - `$$...$$` becomes a block math container, `$...$` inline math
//! - `**...**` becomes `<strong>`
//! - stray `<` and `>` become entities unless they belong to an allow-listed tag
//!
//! ## Modules
//!
//! - **`kinds`**: Span kinds with owned delimiters (`Math`, `Bold`, `AngleBracket`)
//! - **`cursor`**: `Cursor` for byte-indexed scanning over one line
//! - **`parser`**: `transform_inline()` main entry point with `try_*` helpers
//!
//! ## First Match Wins
//!
//! Math and bold do not nest. A `**` inside `$...$` is formula text and a `$`
//! inside `**...**` is bold text; neither body is escaped.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::transform_inline;
