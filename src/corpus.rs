//! Corpus loading.
//!
//! A [`Corpus`] is the ordered list of [`Document`]s found under a root
//! directory. Discovery walks the tree with file names sorted at every level,
//! so the same tree always yields the same order.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{DocsiftError, Result};

/// Default extension filter: markdown files.
pub const DEFAULT_EXTENSIONS: &[&str] = &["md"];

/// A document read from disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Filesystem location, as discovered under the corpus root.
    pub path: PathBuf,
    /// Raw UTF-8 content.
    pub content: String,
}

impl Document {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(path: P, content: S) -> Self {
        Document {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Ordered sequence of documents.
///
/// [`load_corpus`] never produces duplicate paths. A corpus assembled with
/// [`Corpus::from_documents`] is taken as-is, duplicates included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: Vec<Document>) -> Self {
        Corpus { documents }
    }

    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Check whether `path` has one of the given extensions (case-sensitive).
pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.as_ref() == ext))
}

/// Recursively load every file under `root` whose extension is in
/// `extensions`.
///
/// A missing `root` yields an empty corpus. A matching file that is not
/// valid UTF-8 fails the whole load with [`DocsiftError::Decode`].
pub fn load_corpus<S: AsRef<str>>(root: impl AsRef<Path>, extensions: &[S]) -> Result<Corpus> {
    let root = root.as_ref();
    if !root.exists() {
        warn!("Corpus root {} does not exist, using an empty corpus", root.display());
        return Ok(Corpus::new());
    }

    let mut corpus = Corpus::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
            continue;
        }

        let path = entry.into_path();
        corpus.push(Document {
            content: read_utf8(&path)?,
            path,
        });
    }

    debug!("Loaded {} documents from {}", corpus.len(), root.display());
    Ok(corpus)
}

/// Read a file as UTF-8, mapping invalid bytes to [`DocsiftError::Decode`].
pub fn read_utf8(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| DocsiftError::decode(path))
}
