//! Char filters rewrite the raw text before it reaches the tokenizer.
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing of the whole text
//!
//! Running a rewrite here rather than on tokens matters when it changes
//! which characters the token pattern sees.

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseCharFilter;
