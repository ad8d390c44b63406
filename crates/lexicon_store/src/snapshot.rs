use std::fs;
use std::io::{self, Write};
use std::path::Path;

use lexicon_core::{Vectorizer, VectorizerOptions};
use lexicon_logging::lex_info;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot format error: {0}")]
    Format(#[from] serde_json::Error),
    #[error("unsupported snapshot version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedOptions {
    stop_words: Vec<String>,
    ignore_case: bool,
    char_level: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedTerm {
    term: String,
    count: u64,
}

/// On-disk form of a vectorizer: options plus `(term, count)` pairs in
/// index order, which is enough to rebuild indices deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedVectorizer {
    version: u32,
    options: PersistedOptions,
    terms: Vec<PersistedTerm>,
}

/// Serialize `vectorizer` to pretty JSON at `path`, atomically.
///
/// The parent directory is created if missing; the snapshot is written to a
/// temp file in that directory and renamed over any existing file, so a
/// failed save leaves no partial snapshot behind.
pub fn save_snapshot(path: &Path, vectorizer: &Vectorizer) -> Result<(), StoreError> {
    let state = PersistedVectorizer {
        version: SNAPSHOT_VERSION,
        options: PersistedOptions {
            stop_words: vectorizer.options().stop_words.clone(),
            ignore_case: vectorizer.options().ignore_case,
            char_level: vectorizer.options().char_level,
        },
        terms: vectorizer
            .vocab()
            .entries()
            .map(|(term, count)| PersistedTerm {
                term: term.to_string(),
                count,
            })
            .collect(),
    };
    let content = serde_json::to_string_pretty(&state)?;

    let dir = snapshot_dir(path);
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace existing snapshot if present to keep determinism.
    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;

    lex_info!(
        "saved vocabulary snapshot to {:?} ({} terms)",
        path,
        state.terms.len()
    );
    Ok(())
}

/// Load a vectorizer snapshot written by [`save_snapshot`].
pub fn load_snapshot(path: &Path) -> Result<Vectorizer, StoreError> {
    let content = fs::read_to_string(path)?;
    let state: PersistedVectorizer = serde_json::from_str(&content)?;
    if state.version != SNAPSHOT_VERSION {
        return Err(StoreError::Version {
            found: state.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    let options = VectorizerOptions {
        stop_words: state.options.stop_words,
        ignore_case: state.options.ignore_case,
        char_level: state.options.char_level,
    };
    let term_count = state.terms.len();
    let vectorizer = Vectorizer::from_parts(
        options,
        state.terms.into_iter().map(|entry| (entry.term, entry.count)),
    );

    lex_info!(
        "loaded vocabulary snapshot from {:?} ({} terms)",
        path,
        term_count
    );
    Ok(vectorizer)
}

fn snapshot_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
