//! # examdown-engine
//!
//! Turns exam-document markdown (problems and solutions with passages,
//! tables, math and figures) into standalone HTML pages and a hub index.
//!
//! [`render`] is the core: a pure, line-oriented transform from one source
//! document to a sequence of `question-block` containers. Everything else in
//! this crate is the glue that feeds it and wraps its output.

pub mod hub;
pub mod io;
pub mod models;
pub mod page;
pub mod rendering;
pub mod site;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use page::ProblemPage;
pub use rendering::{render, transform_inline};
pub use site::{BuildReport, SiteOptions, build_site};
