//! TF-IDF vectorizer.
//!
//! [`TfidfVectorizer::fit_transform`] builds a [`TfidfModel`] from a corpus
//! and returns one [`SparseVector`] per document. [`TfidfModel::transform`]
//! projects a query into the same space. The weighting follows the classical
//! scikit-learn definition:
//!
//! ```text
//! idf(t)    = ln((1 + N) / (1 + df(t))) + 1     (smooth_idf = true)
//! idf(t)    = ln(N / df(t)) + 1                 (smooth_idf = false)
//! w(t, d)   = count(t, d) * idf(t)              (or (1 + ln count) when sublinear)
//! vector(d) = w(·, d) / ||w(·, d)||₂
//! ```
//!
//! Vocabulary columns are assigned in lexicographic term order.
//!
//! # Examples
//!
//! ```
//! use docsift::corpus::{Corpus, Document};
//! use docsift::vectorizer::TfidfVectorizer;
//!
//! let corpus = Corpus::from_documents(vec![
//!     Document::new("a.md", "cats and dogs"),
//!     Document::new("b.md", "dogs and birds"),
//! ]);
//!
//! let vectorizer = TfidfVectorizer::english().unwrap();
//! let (model, docs) = vectorizer.fit_transform(&corpus).unwrap();
//!
//! assert_eq!(model.terms(), &["birds", "cats", "dogs"]);
//! assert_eq!(docs.len(), 2);
//! assert!(model.transform("unknown words").unwrap().is_empty());
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::corpus::Corpus;
use crate::error::{DocsiftError, Result};

/// Vector normalization applied after weighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Divide by the sum of absolute weights.
    L1,
    /// Divide by the Euclidean length. Makes dot product equal cosine.
    #[default]
    L2,
    /// Leave weights as they are.
    None,
}

/// Sparse vector of `(column, weight)` pairs sorted by column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build a vector from entries in any order. Zero weights are dropped.
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(col, _)| col);
        SparseVector { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for the all-zero vector.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight at `column`, zero when absent.
    pub fn get(&self, column: usize) -> f64 {
        self.entries
            .binary_search_by_key(&column, |&(col, _)| col)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn l2_norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product (merge join over the sorted columns).
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ci, wi) = self.entries[i];
            let (cj, wj) = other.entries[j];
            match ci.cmp(&cj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wi * wj;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalize(&mut self, norm: Norm) {
        let length = match norm {
            Norm::L1 => self.entries.iter().map(|&(_, w)| w.abs()).sum::<f64>(),
            Norm::L2 => self.l2_norm(),
            Norm::None => return,
        };
        if length > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= length;
            }
        }
    }
}

/// Configuration for fitting a [`TfidfModel`].
#[derive(Clone)]
pub struct TfidfVectorizer {
    analyzer: Arc<dyn Analyzer>,
    smooth_idf: bool,
    sublinear_tf: bool,
    norm: Norm,
}

impl TfidfVectorizer {
    /// Create a vectorizer with the given analyzer and default weighting
    /// (smoothed idf, raw counts, L2 norm).
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        TfidfVectorizer {
            analyzer,
            smooth_idf: true,
            sublinear_tf: false,
            norm: Norm::L2,
        }
    }

    /// Vectorizer using the [`EnglishAnalyzer`].
    pub fn english() -> Result<Self> {
        Ok(Self::new(Arc::new(EnglishAnalyzer::new()?)))
    }

    pub fn with_smooth_idf(mut self, smooth_idf: bool) -> Self {
        self.smooth_idf = smooth_idf;
        self
    }

    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    /// Fit a model without keeping the document vectors.
    pub fn fit(&self, corpus: &Corpus) -> Result<TfidfModel> {
        self.fit_transform(corpus).map(|(model, _)| model)
    }

    /// Fit a model over `corpus` and return it with one vector per document,
    /// aligned by index with the corpus.
    ///
    /// Fails with [`DocsiftError::EmptyVocabulary`] when no term survives
    /// analysis, which includes the empty corpus.
    pub fn fit_transform(&self, corpus: &Corpus) -> Result<(TfidfModel, Vec<SparseVector>)> {
        let counts = corpus
            .iter()
            .map(|doc| count_terms(self.analyzer.as_ref(), &doc.content))
            .collect::<Result<Vec<_>>>()?;

        let terms: Vec<String> = counts
            .iter()
            .flat_map(|c| c.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if terms.is_empty() {
            return Err(DocsiftError::EmptyVocabulary);
        }

        let vocabulary: AHashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();

        let mut df = vec![0usize; terms.len()];
        for doc_counts in &counts {
            for term in doc_counts.keys() {
                df[vocabulary[term]] += 1;
            }
        }

        let n = corpus.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&df| {
                let df = df as f64;
                if self.smooth_idf {
                    ((1.0 + n) / (1.0 + df)).ln() + 1.0
                } else {
                    (n / df).ln() + 1.0
                }
            })
            .collect();

        debug!(
            "Fitted TF-IDF model: {} documents, {} terms",
            corpus.len(),
            terms.len()
        );

        let model = TfidfModel {
            analyzer: Arc::clone(&self.analyzer),
            vocabulary,
            terms,
            idf,
            sublinear_tf: self.sublinear_tf,
            norm: self.norm,
        };

        let vectors = counts.iter().map(|c| model.weigh(c)).collect();
        Ok((model, vectors))
    }
}

impl fmt::Debug for TfidfVectorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TfidfVectorizer")
            .field("analyzer", &self.analyzer.name())
            .field("smooth_idf", &self.smooth_idf)
            .field("sublinear_tf", &self.sublinear_tf)
            .field("norm", &self.norm)
            .finish()
    }
}

/// A fitted vector space: vocabulary plus per-term idf.
pub struct TfidfModel {
    analyzer: Arc<dyn Analyzer>,
    vocabulary: AHashMap<String, usize>,
    terms: Vec<String>,
    idf: Vec<f64>,
    sublinear_tf: bool,
    norm: Norm,
}

impl TfidfModel {
    /// Project `text` into the fitted space. Terms outside the vocabulary are
    /// dropped; text with no known terms gives the empty vector.
    pub fn transform(&self, text: &str) -> Result<SparseVector> {
        let counts = count_terms(self.analyzer.as_ref(), text)?;
        Ok(self.weigh(&counts))
    }

    /// Vocabulary terms in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Column index of `term`.
    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Idf weight of `term`.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.column(term).map(|col| self.idf[col])
    }

    fn weigh(&self, counts: &AHashMap<String, usize>) -> SparseVector {
        let entries = counts
            .iter()
            .filter_map(|(term, &count)| {
                let col = *self.vocabulary.get(term)?;
                let tf = if self.sublinear_tf {
                    1.0 + (count as f64).ln()
                } else {
                    count as f64
                };
                Some((col, tf * self.idf[col]))
            })
            .collect();

        let mut vector = SparseVector::from_entries(entries);
        vector.normalize(self.norm);
        vector
    }
}

impl fmt::Debug for TfidfModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TfidfModel")
            .field("analyzer", &self.analyzer.name())
            .field("terms", &self.terms.len())
            .field("sublinear_tf", &self.sublinear_tf)
            .field("norm", &self.norm)
            .finish()
    }
}

fn count_terms(analyzer: &dyn Analyzer, text: &str) -> Result<AHashMap<String, usize>> {
    let mut counts = AHashMap::new();
    for token in analyzer.analyze(text)? {
        *counts.entry(token.text).or_insert(0) += 1;
    }
    Ok(counts)
}
