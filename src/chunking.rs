//! Overlapping word-window chunking.

use crate::config::ChunkingConfig;

/// Splits `text` into overlapping word windows rejoined with single spaces.
///
/// Window starts advance by `window - overlap` words. The first window is
/// always kept, even when the document is shorter than the window; later
/// windows below the tail threshold are discarded and chunking stops, so a
/// short remainder left over after the overlap never becomes its own chunk.
/// Chunking also stops once a window reaches the end of the text.
pub fn chunk_text(text: &str, config: &ChunkingConfig) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let step = config.step();
    let tail_threshold = config.window as f64 * config.tail_ratio;

    let mut chunks = Vec::new();
    let mut start = 0usize;
    while start < words.len() {
        let end = (start + config.window).min(words.len());
        let window = &words[start..end];
        if start != 0 && (window.len() as f64) < tail_threshold {
            break;
        }
        chunks.push(window.join(" "));
        if end == words.len() {
            break;
        }
        start += step;
    }
    chunks
}
