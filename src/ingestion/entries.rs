//! Expands documents into ordered, uniquely identified chunk entries.

use crate::chunking::chunk_text;
use crate::config::ChunkingConfig;
use crate::types::{ChunkEntry, Document};

/// Chunks every document and emits one [`ChunkEntry`] per chunk.
///
/// Output order is document order, then chunk order within each document.
/// `chunk_index` restarts at 0 per document, so entry ids are unique as long
/// as document ids are. Documents that produce no chunks contribute nothing.
pub fn build_entries(documents: &[Document], config: &ChunkingConfig) -> Vec<ChunkEntry> {
    let mut entries = Vec::new();
    for document in documents {
        for (chunk_index, text) in chunk_text(&document.text, config).into_iter().enumerate() {
            entries.push(ChunkEntry {
                id: format!("{}-{}", document.id, chunk_index),
                source: document.source.display().to_string(),
                chunk_index,
                text,
            });
        }
    }
    entries
}
