//! Shared records and the crate-wide error type.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One eligible source file, loaded and trimmed.
///
/// The `id` is the file name stem and becomes the prefix of every chunk id
/// derived from this document.
#[derive(Clone, Debug)]
pub struct Document {
    pub id: String,
    pub source: PathBuf,
    pub text: String,
}

/// A single chunk slated for embedding and persistence.
///
/// `id` is `"{document_id}-{chunk_index}"`, globally unique as long as
/// document ids are unique. `chunk_index` restarts at 0 for each document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkEntry {
    pub id: String,
    pub source: String,
    pub chunk_index: usize,
    pub text: String,
}

/// Embeddings for a chunk sequence plus the label of the backend that
/// produced them.
///
/// Rows correspond positionally to the input texts; every row is `dimension`
/// wide.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmbeddingResult {
    pub model: String,
    pub dimension: usize,
    pub embeddings: Vec<Vec<f64>>,
}

/// Errors surfaced by the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The content directory held no eligible documents; nothing is written.
    #[error("no source documents found in {dir}")]
    NoDocuments { dir: String },

    /// The local embedding model could not be loaded or used. The message
    /// names the environment flag that switches to deterministic fake
    /// embeddings so offline runs have an escape hatch.
    #[error(
        "failed to load the local embedding model: {cause}; ensure model downloads are available or set {flag}=1 for deterministic test embeddings"
    )]
    LocalModel { cause: String, flag: &'static str },

    #[error("embedding request failed: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("unexpected embedding response: {0}")]
    RemoteResponse(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
