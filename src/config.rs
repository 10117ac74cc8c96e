//! Run configuration: chunking tunables and a one-shot environment snapshot.

use std::env;
use std::path::PathBuf;

/// Width of deterministic fake vectors, also the reported dimension for
/// zero-row results.
pub const FAKE_DIMENSION: usize = 64;

/// Texts per remote embedding request.
pub const REMOTE_BATCH_SIZE: usize = 20;

/// Identifier of the local sentence-embedding model.
pub const LOCAL_MODEL_NAME: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Remote model used when no override is configured.
pub const DEFAULT_REMOTE_MODEL: &str = "text-embedding-3-small";

/// Label recorded in the vector artifact for fake-embedding runs.
pub const FAKE_MODEL_LABEL: &str = "debug-fake-embeddings";

pub const DEFAULT_REMOTE_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";

/// Set to `1` to force the deterministic fake backend.
pub const FAKE_ENV_FLAG: &str = "RAG_FAKE_EMBEDDINGS";
/// Presence of a non-empty key enables the remote backend.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Overrides the remote model name.
pub const REMOTE_MODEL_ENV: &str = "OPENAI_EMBEDDING_MODEL";
pub const CONTENT_DIR_ENV: &str = "RAG_CONTENT_DIR";
pub const OUTPUT_DIR_ENV: &str = "RAG_OUTPUT_DIR";

/// Word-window chunking parameters.
///
/// The tail ratio has no documented rationale beyond "short trailing
/// remainders after overlap are not worth keeping"; it is kept configurable
/// rather than baked in.
#[derive(Clone, Debug)]
pub struct ChunkingConfig {
    /// Window size in words.
    pub window: usize,
    /// Words shared between consecutive windows.
    pub overlap: usize,
    /// Windows after the first with fewer than `tail_ratio * window` words
    /// are discarded.
    pub tail_ratio: f64,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            window: 600,
            overlap: 120,
            tail_ratio: 0.4,
        }
    }
}

impl ChunkingConfig {
    /// Offset distance between consecutive window starts. Never zero, so
    /// chunking always advances even for degenerate overlap settings.
    pub fn step(&self) -> usize {
        self.window.saturating_sub(self.overlap).max(1)
    }
}

/// Environment captured once at the start of a run.
///
/// Backend selection and directory resolution read only from this snapshot;
/// nothing else in the crate touches process environment state, which keeps
/// the fallback chain deterministic and testable by injection.
#[derive(Clone, Debug)]
pub struct EnvSnapshot {
    /// Deterministic fake backend requested.
    pub fake_embeddings: bool,
    /// Remote API credential, when configured.
    pub api_key: Option<String>,
    pub remote_model: String,
    pub remote_endpoint: String,
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for EnvSnapshot {
    fn default() -> Self {
        Self {
            fake_embeddings: false,
            api_key: None,
            remote_model: DEFAULT_REMOTE_MODEL.to_string(),
            remote_endpoint: DEFAULT_REMOTE_ENDPOINT.to_string(),
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("rag"),
        }
    }
}

impl EnvSnapshot {
    /// Reads the process environment (after loading `.env`, if present) into
    /// a snapshot.
    pub fn capture() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        Self {
            fake_embeddings: env::var(FAKE_ENV_FLAG)
                .map(|value| value == "1")
                .unwrap_or(false),
            api_key: env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()),
            remote_model: env::var(REMOTE_MODEL_ENV).unwrap_or(defaults.remote_model),
            remote_endpoint: defaults.remote_endpoint,
            content_dir: env::var(CONTENT_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.content_dir),
            output_dir: env::var(OUTPUT_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        }
    }
}
