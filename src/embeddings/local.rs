//! Local sentence-embedding backend.
//!
//! Gated behind the `local-model` cargo feature so default builds stay free
//! of the onnx runtime. Without the feature, the backend reports the same
//! actionable error a failed model load would, pointing at the deterministic
//! fake flag.

use crate::config::FAKE_ENV_FLAG;
use crate::types::PipelineError;

#[cfg(not(feature = "local-model"))]
use crate::config::LOCAL_MODEL_NAME;

/// Encodes all texts in one call through the local model.
#[cfg(feature = "local-model")]
pub async fn embed(texts: &[String]) -> Result<Vec<Vec<f64>>, PipelineError> {
    use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

    let owned: Vec<String> = texts.to_vec();
    let rows = tokio::task::spawn_blocking(move || {
        let model = TextEmbedding::try_new(InitOptions::new(EmbeddingModel::AllMiniLML6V2))
            .map_err(|err| err.to_string())?;
        model.embed(owned, None).map_err(|err| err.to_string())
    })
    .await
    .map_err(|err| local_model_error(err.to_string()))?
    .map_err(local_model_error)?;

    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().map(f64::from).collect())
        .collect())
}

#[cfg(not(feature = "local-model"))]
pub async fn embed(_texts: &[String]) -> Result<Vec<Vec<f64>>, PipelineError> {
    Err(local_model_error(format!(
        "built without the local-model feature, {LOCAL_MODEL_NAME} is unavailable"
    )))
}

fn local_model_error(cause: String) -> PipelineError {
    PipelineError::LocalModel {
        cause,
        flag: FAKE_ENV_FLAG,
    }
}
