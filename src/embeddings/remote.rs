//! Remote embedding backend speaking the OpenAI embeddings wire format.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{EnvSnapshot, REMOTE_BATCH_SIZE};
use crate::types::PipelineError;

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Deserialize)]
struct EmbeddingRow {
    embedding: Vec<f64>,
}

/// Embeds `texts` through the configured endpoint in batches of
/// [`REMOTE_BATCH_SIZE`], concatenating rows in input order.
///
/// Batches run sequentially. Any failed request fails the whole run; this is
/// a re-runnable batch job, so there is no retry or partial-batch recovery.
pub async fn embed(
    snapshot: &EnvSnapshot,
    texts: &[String],
) -> Result<Vec<Vec<f64>>, PipelineError> {
    let api_key = snapshot.api_key.as_deref().unwrap_or_default();
    let client = Client::builder().use_rustls_tls().build()?;

    let mut rows = Vec::with_capacity(texts.len());
    for batch in texts.chunks(REMOTE_BATCH_SIZE) {
        debug!(batch_len = batch.len(), "requesting remote embeddings");
        let response = client
            .post(&snapshot.remote_endpoint)
            .bearer_auth(api_key)
            .json(&EmbeddingRequest {
                model: &snapshot.remote_model,
                input: batch,
            })
            .send()
            .await?
            .error_for_status()?;

        let payload: EmbeddingResponse = response.json().await?;
        if payload.data.len() != batch.len() {
            return Err(PipelineError::RemoteResponse(format!(
                "expected {} embeddings in batch, got {}",
                batch.len(),
                payload.data.len()
            )));
        }
        rows.extend(payload.data.into_iter().map(|row| row.embedding));
    }
    Ok(rows)
}
