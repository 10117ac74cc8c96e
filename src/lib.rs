//! ```text
//! content/*.{txt,md} ──► ingestion::loader ──► Document records
//!
//! Document ──► ingestion::entries ──► ChunkEntry sequence
//!                      │
//!                      └─► chunking (overlapping word windows)
//!
//! ChunkEntry texts ──► embeddings::generate_embeddings
//!                          ├─ debug flag ──► hash-seeded fake vectors
//!                          ├─ API key    ──► remote batches of 20
//!                          └─ default    ──► local sentence model
//!
//! ChunkEntry + EmbeddingResult ──► output::write_artifacts ──► rag/*.json
//! ```
//!
pub mod chunking;
pub mod config;
pub mod embeddings;
pub mod ingestion;
pub mod output;
pub mod pipeline;
pub mod types;

pub use chunking::chunk_text;
pub use config::{ChunkingConfig, EnvSnapshot};
pub use embeddings::{Backend, generate_embeddings, resolve_backend};
pub use types::{ChunkEntry, Document, EmbeddingResult, PipelineError};
