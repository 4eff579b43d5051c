pub mod caption;
pub mod disclaimer;
pub mod figure;
pub mod heading;
pub mod passage;
pub mod question;
pub mod sub_item;
pub mod table;

pub use caption::Caption;
pub use disclaimer::Disclaimer;
pub use figure::{Figure, ImageDirective};
pub use heading::Heading;
pub use passage::{Passage, PassageLine};
pub use question::QuestionMarker;
pub use sub_item::SubItem;
pub use table::Table;

use regex::Regex;
use std::sync::OnceLock;

/// Compiles a dialect pattern once and hands out the shared instance.
pub(crate) fn dialect_regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid dialect regex"))
}
