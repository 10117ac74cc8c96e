//! Sequential batch pipeline: load, chunk, embed, persist.

use tracing::info;

use crate::config::{ChunkingConfig, EnvSnapshot};
use crate::embeddings::generate_embeddings;
use crate::ingestion::{build_entries, load_documents};
use crate::output::write_artifacts;
use crate::types::PipelineError;

/// Counters reported after a successful run.
#[derive(Clone, Copy, Debug)]
pub struct RunSummary {
    pub documents: usize,
    pub chunks: usize,
}

/// Runs the full pipeline against the directories in `snapshot`.
///
/// Fails with [`PipelineError::NoDocuments`] before anything is written when
/// the content directory holds no eligible documents; embedding failures also
/// pre-empt both artifact writes.
pub async fn run(snapshot: &EnvSnapshot) -> Result<RunSummary, PipelineError> {
    let documents = load_documents(&snapshot.content_dir).await?;
    if documents.is_empty() {
        return Err(PipelineError::NoDocuments {
            dir: snapshot.content_dir.display().to_string(),
        });
    }
    info!(documents = documents.len(), "loaded content directory");

    let entries = build_entries(&documents, &ChunkingConfig::default());
    let texts: Vec<String> = entries.iter().map(|entry| entry.text.clone()).collect();

    let result = generate_embeddings(snapshot, &texts).await?;
    write_artifacts(&snapshot.output_dir, &entries, &result).await?;

    Ok(RunSummary {
        documents: documents.len(),
        chunks: entries.len(),
    })
}
