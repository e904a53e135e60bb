//! Loading annotation corpora and label sheets from disk.
//!
//! This is thin glue around the pure core: it reads files, decodes them
//! lossily and hands the text to [`parse_annotation`]. Nothing here computes
//! metrics itself.

use std::fs;
use std::path::{Path, PathBuf};

use crate::graph::ArgumentGraph;
use crate::keypoint::KeyPointPair;
use crate::metrics::{compute_metrics_with, MetricsConfig};
use crate::parser::{parse_annotation, ParsedAnnotation};
use crate::types::{MetricRecord, StanceLabel};

/// File extension of brat annotation files.
pub const ANNOTATION_EXTENSION: &str = "ann";

/// Error type for corpus loading.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Filesystem error.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Malformed JSON input.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        /// Path being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}

impl CorpusError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json { path: path.to_path_buf(), source }
    }
}

/// One parsed annotation document.
#[derive(Debug, Clone)]
pub struct AnnotationDocument {
    /// Document id (the file name, e.g. `essay001.ann`).
    pub essay_id: String,
    /// Parsed components and relations.
    pub annotation: ParsedAnnotation,
}

/// A set of parsed annotation documents, ordered by id.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<AnnotationDocument>,
}

impl Corpus {
    /// Build a corpus from in-memory `(essay_id, content)` pairs.
    pub fn from_documents<I, S, C>(documents: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: AsRef<str>,
    {
        let mut documents: Vec<AnnotationDocument> = documents
            .into_iter()
            .map(|(id, content)| AnnotationDocument {
                essay_id: id.into(),
                annotation: parse_annotation(content.as_ref()),
            })
            .collect();
        documents.sort_by(|a, b| a.essay_id.cmp(&b.essay_id));
        Self { documents }
    }

    /// Read every `*.ann` file directly inside `dir`.
    ///
    /// Unreadable files are logged and skipped; invalid UTF-8 is replaced.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| CorpusError::io(dir, e))?;

        let mut documents = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CorpusError::io(dir, e))?;
            let path = entry.path();
            if !is_annotation_file(&path) {
                continue;
            }
            let Some(essay_id) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
                continue;
            };
            match fs::read(&path) {
                Ok(bytes) => documents.push((essay_id, String::from_utf8_lossy(&bytes).into_owned())),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable annotation file");
                }
            }
        }

        let corpus = Self::from_documents(documents);
        tracing::info!(dir = %dir.display(), documents = corpus.len(), "Loaded annotation corpus");
        Ok(corpus)
    }

    /// Documents ordered by id.
    pub fn documents(&self) -> &[AnnotationDocument] {
        &self.documents
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when the corpus has no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Compute one metric record per document.
    pub fn analyze(&self, config: &MetricsConfig) -> Vec<MetricRecord> {
        self.documents
            .iter()
            .map(|doc| {
                let graph = ArgumentGraph::from(doc.annotation.clone());
                MetricRecord::new(doc.essay_id.clone(), compute_metrics_with(&graph, config))
            })
            .collect()
    }
}

fn is_annotation_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(ANNOTATION_EXTENSION))
            .unwrap_or(false)
}

/// Load stance rows from a JSON array of `{essay_id, topic, stance}` objects.
pub fn load_stance_labels(path: impl AsRef<Path>) -> Result<Vec<StanceLabel>, CorpusError> {
    read_json(path.as_ref())
}

/// Load previously written metric records from a JSON array.
pub fn load_metric_records(path: impl AsRef<Path>) -> Result<Vec<MetricRecord>, CorpusError> {
    read_json(path.as_ref())
}

/// Load argument/key-point rows from a JSON array.
pub fn load_key_point_pairs(path: impl AsRef<Path>) -> Result<Vec<KeyPointPair>, CorpusError> {
    read_json(path.as_ref())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CorpusError> {
    let bytes = fs::read(path).map_err(|e| CorpusError::io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| CorpusError::json(path, e))
}
