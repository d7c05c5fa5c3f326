//! Text analysis for docsift.
//!
//! Documents and queries go through the same pipeline before they reach the
//! vectorizer:
//!
//! ```text
//! Raw Text → Lowercase → Tokenizer → Stop Words → Terms
//! ```
//!
//! Using one [`Analyzer`](analyzer::Analyzer) for both fit and transform is
//! what keeps query terms aligned with the fitted vocabulary.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
