//! Turns a content directory into embedding-ready chunk entries.
//!
//! * [`loader`] — reads eligible text files into [`Document`](crate::types::Document) records.
//! * [`entries`] — expands documents into ordered [`ChunkEntry`](crate::types::ChunkEntry) sequences.

pub mod entries;
pub mod loader;

pub use entries::build_entries;
pub use loader::load_documents;
