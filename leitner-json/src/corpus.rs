use anyhow::{Context, Result};
use leitner_core::Question;
use std::fs;
use std::path::Path;

pub fn parse_corpus(text: &str) -> Result<Vec<Question>> {
    let v: Vec<Question> = serde_json::from_str(text).context("question list must be a JSON array of {q, a, choices}")?;
    Ok(v)
}

pub fn load_corpus(path: &Path) -> Result<Vec<Question>> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_corpus(&data).with_context(|| format!("parsing {}", path.display()))
}

/// `Ok(None)` when the file does not exist yet.
pub fn load_saved_corpus(path: &Path) -> Result<Option<Vec<Question>>> {
    if !path.exists() {
        return Ok(None);
    }
    load_corpus(path).map(Some)
}

pub fn save_corpus(path: &Path, corpus: &[Question]) -> Result<()> {
    let json = serde_json::to_vec_pretty(corpus)?;
    crate::write_atomic(path, &json).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), questions = corpus.len(), "corpus saved");
    Ok(())
}
