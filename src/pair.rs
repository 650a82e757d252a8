use serde::Serialize;

/// One aligned unit of output: the base text and the reading shown above it.
/// An empty `ruby` means the base renders without an annotation.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AnnotationPair {
    pub base: String,
    pub ruby: String,
}

impl AnnotationPair {
    pub fn new(base: &str, ruby: &str) -> Self {
        AnnotationPair {
            base: base.to_string(),
            ruby: ruby.to_string(),
        }
    }
}
