//! Token filters that transform token streams.
//!
//! - [`stop::StopFilter`] - Removes stop words
//!
//! Filters are chained inside an analyzer, after the tokenizer:
//!
//! ```text
//! Char Filters → Tokenizer → Stop Words → Vectorizer
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stop;

pub use stop::StopFilter;
