//! Loading the extracted document text the engine analyses.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use tradutor_engine::document::join_pages;

/// Read the document: one page per file, in argument order, or the whole
/// of stdin when no files are given.
pub fn read_document(files: &[PathBuf]) -> anyhow::Result<String> {
    if files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading document text from stdin")?;
        tracing::info!(chars = text.chars().count(), "read document from stdin");
        return Ok(text);
    }

    let mut pages = Vec::with_capacity(files.len());
    for path in files {
        let page = std::fs::read_to_string(path)
            .with_context(|| format!("reading page {}", path.display()))?;
        pages.push(page);
    }
    let text = join_pages(&pages);
    tracing::info!(
        pages = pages.len(),
        chars = text.chars().count(),
        "read document from files"
    );
    Ok(text)
}
