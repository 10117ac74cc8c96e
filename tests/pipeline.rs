//! End-to-end pipeline tests with injected snapshots and fake embeddings.
//!
//! These exercise the full load → chunk → embed → persist flow against
//! temporary directories, suitable for CI and deterministic runs.

use std::path::Path;

use ragpress::config::{EnvSnapshot, FAKE_DIMENSION, FAKE_MODEL_LABEL};
use ragpress::output::{CHUNKS_FILE, VECTORS_FILE};
use ragpress::types::{ChunkEntry, EmbeddingResult, PipelineError};
use ragpress::{Backend, pipeline, resolve_backend};
use tempfile::tempdir;

fn fake_snapshot(content: &Path, output: &Path) -> EnvSnapshot {
    EnvSnapshot {
        fake_embeddings: true,
        content_dir: content.to_path_buf(),
        output_dir: output.to_path_buf(),
        ..EnvSnapshot::default()
    }
}

fn distinct_tokens(count: usize) -> String {
    (0..count)
        .map(|i| format!("token{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[tokio::test]
async fn end_to_end_with_fake_embeddings() {
    let content = tempdir().unwrap();
    let output = tempdir().unwrap();
    std::fs::write(content.path().join("a.md"), distinct_tokens(1000)).unwrap();
    std::fs::write(content.path().join("b.txt"), "").unwrap();

    let snapshot = fake_snapshot(content.path(), output.path());
    let summary = pipeline::run(&snapshot).await.unwrap();

    // The empty file contributes no document; 1000 words chunk into two
    // overlapping windows.
    assert_eq!(summary.documents, 1);
    assert!(summary.chunks >= 2);

    let entries: Vec<ChunkEntry> = serde_json::from_str(
        &std::fs::read_to_string(output.path().join(CHUNKS_FILE)).unwrap(),
    )
    .unwrap();
    assert_eq!(entries.len(), summary.chunks);
    assert_eq!(entries[0].id, "a-0");
    assert_eq!(entries[1].id, "a-1");
    assert_eq!(entries[1].chunk_index, 1);

    let vectors: EmbeddingResult = serde_json::from_str(
        &std::fs::read_to_string(output.path().join(VECTORS_FILE)).unwrap(),
    )
    .unwrap();
    assert_eq!(vectors.model, FAKE_MODEL_LABEL);
    assert_eq!(vectors.dimension, FAKE_DIMENSION);
    assert_eq!(vectors.embeddings.len(), entries.len());
    for row in &vectors.embeddings {
        assert_eq!(row.len(), FAKE_DIMENSION);
    }
}

#[tokio::test]
async fn reruns_produce_identical_vector_artifacts() {
    let content = tempdir().unwrap();
    std::fs::write(content.path().join("doc.md"), distinct_tokens(50)).unwrap();

    let output_one = tempdir().unwrap();
    let output_two = tempdir().unwrap();

    pipeline::run(&fake_snapshot(content.path(), output_one.path()))
        .await
        .unwrap();
    pipeline::run(&fake_snapshot(content.path(), output_two.path()))
        .await
        .unwrap();

    let first = std::fs::read_to_string(output_one.path().join(VECTORS_FILE)).unwrap();
    let second = std::fs::read_to_string(output_two.path().join(VECTORS_FILE)).unwrap();
    assert_eq!(first, second, "fake-embedding runs must be reproducible");
}

#[tokio::test]
async fn empty_content_directory_fails_before_writing() {
    let content = tempdir().unwrap();
    let output = tempdir().unwrap();
    let output_dir = output.path().join("rag");

    let snapshot = fake_snapshot(content.path(), &output_dir);
    let err = pipeline::run(&snapshot).await.unwrap_err();

    assert!(matches!(err, PipelineError::NoDocuments { .. }));
    assert!(
        !output_dir.exists(),
        "no artifacts may be written when there are no documents"
    );
}

#[tokio::test]
async fn ineligible_files_alone_count_as_no_documents() {
    let content = tempdir().unwrap();
    let output = tempdir().unwrap();
    std::fs::write(content.path().join("script.py"), "print('hi')").unwrap();
    std::fs::write(content.path().join("blank.md"), "   ").unwrap();

    let err = pipeline::run(&fake_snapshot(content.path(), output.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::NoDocuments { .. }));
}

#[test]
fn snapshot_injection_drives_backend_selection() {
    let flagged = EnvSnapshot {
        fake_embeddings: true,
        api_key: Some("sk-test".to_string()),
        ..EnvSnapshot::default()
    };
    assert_eq!(resolve_backend(&flagged, false), Backend::Fake);

    let keyed = EnvSnapshot {
        api_key: Some("sk-test".to_string()),
        ..EnvSnapshot::default()
    };
    assert_eq!(resolve_backend(&keyed, false), Backend::Remote);
    assert_eq!(resolve_backend(&keyed, true), Backend::EmptyInput);
    assert_eq!(
        resolve_backend(&EnvSnapshot::default(), false),
        Backend::Local
    );
}
