//! Lowercase char filter implementation.

use super::CharFilter;

/// Lowercases the whole input with [`str::to_lowercase`].
///
/// Some characters grow when lowercased (`İ` becomes `i` followed by a
/// combining dot), so the tokenizer has to see the lowered text.
///
/// # Examples
///
/// ```
/// use docsift::analysis::char_filter::{CharFilter, LowercaseCharFilter};
///
/// let filter = LowercaseCharFilter::new();
/// assert_eq!(filter.filter("Hello WORLD"), "hello world");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
