//! The search pipeline: load → fit → transform → rank.
//!
//! Every call rebuilds the corpus and the model from scratch. Nothing is
//! cached between calls, so concurrent callers never share state.

use std::path::PathBuf;
use std::time::Instant;

use log::debug;

use crate::config::SearchConfig;
use crate::corpus::{Corpus, DEFAULT_EXTENSIONS, load_corpus};
use crate::error::Result;
use crate::ranker::{DEFAULT_TOP_N, ScoredDocument, rank};
use crate::vectorizer::TfidfVectorizer;

/// Per-request search settings, passed explicitly into the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchContext {
    pub corpus_root: PathBuf,
    pub extensions: Vec<String>,
    pub top_n: usize,
    pub min_score: Option<f64>,
}

impl SearchContext {
    /// Context over `corpus_root` with default extensions and limit.
    pub fn new<P: Into<PathBuf>>(corpus_root: P) -> Self {
        SearchContext {
            corpus_root: corpus_root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            top_n: DEFAULT_TOP_N,
            min_score: None,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        SearchContext {
            corpus_root: config.corpus_root.clone(),
            extensions: config.extensions.clone(),
            top_n: config.top_n,
            min_score: config.min_score,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_score(mut self, min_score: Option<f64>) -> Self {
        self.min_score = min_score;
        self
    }
}

/// Load the corpus described by `ctx` and rank it against `query`.
pub fn search(ctx: &SearchContext, query: &str) -> Result<Vec<ScoredDocument>> {
    let start = Instant::now();
    let corpus = load_corpus(&ctx.corpus_root, &ctx.extensions)?;
    debug!("Corpus loaded in {:?}", start.elapsed());

    let mut results = search_corpus(&corpus, query, ctx.top_n)?;
    if let Some(min_score) = ctx.min_score {
        results.retain(|r| r.score >= min_score);
    }

    debug!(
        "Query {:?} returned {} results in {:?}",
        query,
        results.len(),
        start.elapsed()
    );
    Ok(results)
}

/// Rank an already loaded corpus against `query`.
///
/// An empty corpus gives an empty result list instead of an
/// [`EmptyVocabulary`](crate::error::DocsiftError::EmptyVocabulary) error.
pub fn search_corpus(corpus: &Corpus, query: &str, top_n: usize) -> Result<Vec<ScoredDocument>> {
    if corpus.is_empty() {
        return Ok(Vec::new());
    }

    let vectorizer = TfidfVectorizer::english()?;
    let (model, doc_vectors) = vectorizer.fit_transform(corpus)?;
    let query_vector = model.transform(query)?;

    Ok(rank(corpus, &doc_vectors, &query_vector, top_n))
}
