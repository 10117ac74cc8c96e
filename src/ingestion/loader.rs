//! Loads eligible source files from the content directory.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::types::{Document, PipelineError};

const ELIGIBLE_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Reads every eligible file directly under `dir` into a [`Document`].
///
/// Eligible means a regular file with a `.txt` or `.md` extension
/// (case-insensitive) whose trimmed content is non-empty. Subdirectories are
/// not descended into. Results are ordered by path so repeated runs produce
/// identical document sequences.
pub async fn load_documents(dir: &Path) -> Result<Vec<Document>, PipelineError> {
    let mut paths = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let path = entry.path();
        let eligible = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                ELIGIBLE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false);
        if eligible {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        let raw = fs::read_to_string(&path).await?;
        let text = raw.trim();
        if text.is_empty() {
            debug!(path = %path.display(), "skipping empty document");
            continue;
        }
        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();
        debug!(path = %path.display(), id = %id, "loaded document");
        documents.push(Document {
            id,
            text: text.to_string(),
            source: path,
        });
    }
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).await.unwrap();
    }

    #[tokio::test]
    async fn filters_extensions_and_sorts_by_path() {
        let dir = tempdir().unwrap();
        write(dir.path(), "c.md", "charlie text").await;
        write(dir.path(), "a.txt", "alpha text").await;
        write(dir.path(), "b.TXT", "bravo text").await;
        write(dir.path(), "notes.rs", "not eligible").await;
        write(dir.path(), "noext", "not eligible either").await;

        let docs = load_documents(dir.path()).await.unwrap();
        let ids: Vec<&str> = docs.iter().map(|doc| doc.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn skips_empty_files_and_subdirectories() {
        let dir = tempdir().unwrap();
        write(dir.path(), "kept.md", "some words").await;
        write(dir.path(), "empty.txt", "   \n\t ").await;
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).await.unwrap();
        write(&nested, "hidden.md", "should not be loaded").await;

        let docs = load_documents(dir.path()).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "kept");
    }

    #[tokio::test]
    async fn trims_document_content() {
        let dir = tempdir().unwrap();
        write(dir.path(), "padded.txt", "\n  hello world  \n").await;

        let docs = load_documents(dir.path()).await.unwrap();
        assert_eq!(docs[0].text, "hello world");
        assert!(docs[0].source.ends_with("padded.txt"));
    }

    #[tokio::test]
    async fn missing_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let result = load_documents(&missing).await;
        assert!(matches!(result, Err(PipelineError::Io(_))));
    }
}
