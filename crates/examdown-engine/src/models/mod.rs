pub mod catalog;
pub mod index_entry;
pub mod subject;

pub use catalog::{Catalog, SubjectGroup};
pub use index_entry::{IndexEntry, Scalar};
pub use subject::{SUBJECT_ORDER, subject_label};
