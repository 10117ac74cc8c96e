//! Embedding backends and the ordered fallback chain that selects one.
//!
//! The selection policy is deliberately a single priority list so runs behave
//! predictably with or without network access: an explicit debug flag wins,
//! then configured remote credentials, then the local model as the default.

pub mod fake;
pub mod local;
pub mod remote;

use tracing::info;

use crate::config::{EnvSnapshot, FAKE_DIMENSION, FAKE_MODEL_LABEL, LOCAL_MODEL_NAME};
use crate::types::{EmbeddingResult, PipelineError};

/// Backend resolved for a run, in strict priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Nothing to embed; a zero-row result is returned without invoking any
    /// backend.
    EmptyInput,
    /// Hash-seeded deterministic vectors (debug flag set).
    Fake,
    /// Remote embeddings API (credential configured).
    Remote,
    /// Local sentence-embedding model (default).
    Local,
}

/// Resolves which backend a run will use.
///
/// Pure function over the snapshot so the fallback chain can be exercised in
/// tests without touching process environment state.
pub fn resolve_backend(snapshot: &EnvSnapshot, input_is_empty: bool) -> Backend {
    if input_is_empty {
        return Backend::EmptyInput;
    }
    if snapshot.fake_embeddings {
        return Backend::Fake;
    }
    if snapshot.api_key.is_some() {
        return Backend::Remote;
    }
    Backend::Local
}

/// Maps chunk texts to an [`EmbeddingResult`] through the resolved backend.
///
/// Rows correspond positionally to `texts`. Remote failures propagate
/// unmodified; local-model failures carry the fake-embeddings escape hatch in
/// their message.
pub async fn generate_embeddings(
    snapshot: &EnvSnapshot,
    texts: &[String],
) -> Result<EmbeddingResult, PipelineError> {
    match resolve_backend(snapshot, texts.is_empty()) {
        Backend::EmptyInput => Ok(EmbeddingResult {
            model: LOCAL_MODEL_NAME.to_string(),
            dimension: FAKE_DIMENSION,
            embeddings: Vec::new(),
        }),
        Backend::Fake => {
            info!(backend = "fake", count = texts.len(), "generating embeddings");
            Ok(build_result(FAKE_MODEL_LABEL, fake::embed(texts)))
        }
        Backend::Remote => {
            info!(
                backend = "remote",
                model = %snapshot.remote_model,
                count = texts.len(),
                "generating embeddings"
            );
            let rows = remote::embed(snapshot, texts).await?;
            Ok(build_result(&snapshot.remote_model, rows))
        }
        Backend::Local => {
            info!(
                backend = "local",
                model = LOCAL_MODEL_NAME,
                count = texts.len(),
                "generating embeddings"
            );
            let rows = local::embed(texts).await?;
            Ok(build_result(LOCAL_MODEL_NAME, rows))
        }
    }
}

fn build_result(model: &str, embeddings: Vec<Vec<f64>>) -> EmbeddingResult {
    let dimension = embeddings.first().map(Vec::len).unwrap_or(FAKE_DIMENSION);
    EmbeddingResult {
        model: model.to_string(),
        dimension,
        embeddings,
    }
}
