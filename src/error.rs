//! Error types for docsift.
//!
//! All fallible operations in the library return [`Result`], whose error side
//! is the [`DocsiftError`] enum. Conditions that are part of normal operation
//! (a missing corpus directory, a query made only of unknown words) are not
//! errors and never show up here.
//!
//! # Examples
//!
//! ```
//! use docsift::error::{DocsiftError, Result};
//!
//! fn fit_nothing() -> Result<()> {
//!     Err(DocsiftError::EmptyVocabulary)
//! }
//!
//! match fit_nothing() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for docsift operations.
#[derive(Error, Debug)]
pub enum DocsiftError {
    /// I/O errors while reading the corpus or a viewed file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors raised while walking the corpus directory tree.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A corpus file is not valid UTF-8.
    #[error("Failed to decode {} as UTF-8", path.display())]
    Decode { path: PathBuf },

    /// Fitting produced no vocabulary: the corpus was empty or every term
    /// was a stop word.
    #[error("Empty vocabulary: documents contain only stop words or no documents were given")]
    EmptyVocabulary,

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors carrying an `anyhow` context chain.
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),

    /// A web page template failed to register or render.
    #[error("Template error: {0}")]
    Template(String),
}

/// Result type alias for operations that may fail with DocsiftError.
pub type Result<T> = std::result::Result<T, DocsiftError>;

impl DocsiftError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DocsiftError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DocsiftError::Config(msg.into())
    }

    /// Create a new decode error for the given file.
    pub fn decode<P: Into<PathBuf>>(path: P) -> Self {
        DocsiftError::Decode { path: path.into() }
    }

    /// Create a new template error.
    pub fn template<S: Into<String>>(msg: S) -> Self {
        DocsiftError::Template(msg.into())
    }
}

impl From<config::ConfigError> for DocsiftError {
    fn from(err: config::ConfigError) -> Self {
        DocsiftError::Config(err.to_string())
    }
}

impl From<handlebars::TemplateError> for DocsiftError {
    fn from(err: handlebars::TemplateError) -> Self {
        DocsiftError::Template(err.to_string())
    }
}

impl From<handlebars::RenderError> for DocsiftError {
    fn from(err: handlebars::RenderError) -> Self {
        DocsiftError::Template(err.to_string())
    }
}
