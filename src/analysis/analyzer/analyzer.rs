//! Core analyzer trait definition.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Vectorizer
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Examples
///
/// ```
/// use docsift::analysis::analyzer::{Analyzer, EnglishAnalyzer};
///
/// let analyzer = EnglishAnalyzer::new().unwrap();
/// let terms: Vec<_> = analyzer.analyze("The quick brown fox").unwrap().map(|t| t.text).collect();
///
/// assert_eq!(terms, vec!["quick", "brown", "fox"]);
/// ```
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and keep only the term strings.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
