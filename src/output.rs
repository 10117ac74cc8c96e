//! Persists chunk records and vectors as JSON artifacts.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::types::{ChunkEntry, EmbeddingResult, PipelineError};

/// File holding the ordered chunk records.
pub const CHUNKS_FILE: &str = "documents.json";
/// File holding `{model, dimension, embeddings}`.
pub const VECTORS_FILE: &str = "vectors.json";

/// Writes both artifacts into `dir`, creating the directory if absent.
///
/// The two writes are independent; callers only invoke this after embedding
/// generation has fully succeeded, so a failed run never leaves partial
/// artifacts. Returns the chunk and vector artifact paths.
pub async fn write_artifacts(
    dir: &Path,
    entries: &[ChunkEntry],
    result: &EmbeddingResult,
) -> Result<(PathBuf, PathBuf), PipelineError> {
    fs::create_dir_all(dir).await?;

    let chunks_path = dir.join(CHUNKS_FILE);
    fs::write(&chunks_path, serde_json::to_string_pretty(entries)?).await?;
    debug!(path = %chunks_path.display(), count = entries.len(), "wrote chunk artifact");

    let rounded = EmbeddingResult {
        model: result.model.clone(),
        dimension: result.dimension,
        embeddings: result
            .embeddings
            .iter()
            .map(|row| row.iter().copied().map(round6).collect())
            .collect(),
    };
    let vectors_path = dir.join(VECTORS_FILE);
    fs::write(&vectors_path, serde_json::to_string_pretty(&rounded)?).await?;
    debug!(path = %vectors_path.display(), rows = rounded.embeddings.len(), "wrote vector artifact");

    Ok((chunks_path, vectors_path))
}

/// Rounds to 6 decimal digits, bounding artifact size and stripping
/// float noise that differs between backends.
fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
