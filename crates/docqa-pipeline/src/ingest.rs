use anyhow::{bail, Context, Result};
use docqa_config::ChunkingConfig;
use docqa_core::chunking::CharacterSplitter;
use docqa_core::extract::extract_text;
use docqa_core::traits::Embedder;
use docqa_index::VectorIndex;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Extract every file in order and concatenate the results.
///
/// Extraction errors and files that yield no text are reported on `out`;
/// such files are skipped. No separator is inserted between documents.
pub fn collect_text<W: Write>(files: &[PathBuf], out: &mut W) -> Result<String> {
    let mut text = String::new();
    for file in files {
        let extracted = extract_text(file, out)?;
        if extracted.is_empty() {
            writeln!(out, "No text extracted from {}.", file.display())?;
            continue;
        }
        debug!("Extracted {} chars from {}", extracted.len(), file.display());
        text.push_str(&extracted);
    }
    info!("Collected {} chars from {} files", text.len(), files.len());
    Ok(text)
}

pub fn split_documents(text: &str, config: &ChunkingConfig) -> Result<Vec<String>> {
    let splitter = CharacterSplitter::from_config(config)?;
    Ok(splitter.split_text(text))
}

/// Embed `chunks` and load them into a fresh index.
pub fn build_index(chunks: &[String], embedder: &dyn Embedder) -> Result<VectorIndex> {
    if chunks.is_empty() {
        bail!("no chunks to index");
    }
    let index = VectorIndex::from_texts(chunks, embedder).context("Failed to build vector index")?;
    info!("Vector index ready with {} entries", index.len());
    Ok(index)
}
