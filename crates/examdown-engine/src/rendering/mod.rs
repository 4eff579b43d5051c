pub mod blocks;
pub mod inline;
pub mod markup;

pub use inline::transform_inline;

use blocks::{DialectLineClassifier, SectionBuilder};

/// Renders a dialect document into a sequence of `question-block` containers.
///
/// `figure_base` is prefixed verbatim to every image file name. Rendering is
/// a pure function of its inputs: malformed lines degrade to paragraphs and
/// nothing is ever reported as an error.
pub fn render(document: &str, figure_base: &str) -> String {
    let classifier = DialectLineClassifier;
    let mut builder = SectionBuilder::new(figure_base);

    for line in document.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}
