//! Cosine ranking of document vectors against a query vector.

use std::cmp::Ordering;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::vectorizer::SparseVector;

/// Number of results returned when the caller does not ask for a limit.
pub const DEFAULT_TOP_N: usize = 10;

/// A document path with its similarity to the query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub path: PathBuf,
    pub score: f64,
}

/// Cosine similarity of two L2-normalized vectors, i.e. their dot product.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    a.dot(b)
}

/// Score every document against `query` and return the best `top_n`.
///
/// Sorting is stable, so documents with equal scores keep corpus order.
/// Zero scores are kept when they fall inside `top_n`.
pub fn rank(
    corpus: &Corpus,
    doc_vectors: &[SparseVector],
    query: &SparseVector,
    top_n: usize,
) -> Vec<ScoredDocument> {
    if top_n == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(usize, f64)> = doc_vectors
        .iter()
        .enumerate()
        .map(|(i, vector)| (i, cosine_similarity(query, vector)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(top_n);

    scored
        .into_iter()
        .filter_map(|(i, score)| {
            corpus.get(i).map(|doc| ScoredDocument {
                path: doc.path.clone(),
                score,
            })
        })
        .collect()
}
