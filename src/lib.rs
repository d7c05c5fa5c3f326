//! # docsift
//!
//! TF-IDF search over a directory of markdown documents.
//!
//! ## Features
//!
//! - Recursive corpus loading with a file-extension filter
//! - scikit-learn compatible TF-IDF weighting (smoothed IDF, L2 norm)
//! - Cosine-similarity ranking with stable top-k
//! - A command line front end and a small web viewer
//!
//! ```no_run
//! use docsift::search::{SearchContext, search};
//!
//! let ctx = SearchContext::new("./docs").with_top_n(5);
//! for hit in search(&ctx, "ownership and borrowing")? {
//!     println!("{} {}", hit.path.display(), hit.score);
//! }
//! # Ok::<(), docsift::error::DocsiftError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod ranker;
pub mod search;
pub mod vectorizer;
pub mod web;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::corpus::{Corpus, Document, load_corpus};
    pub use crate::error::{DocsiftError, Result};
    pub use crate::ranker::{ScoredDocument, rank};
    pub use crate::search::{SearchContext, search, search_corpus};
    pub use crate::vectorizer::{SparseVector, TfidfModel, TfidfVectorizer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
