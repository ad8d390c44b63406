//! Lexicon store: vectorizer snapshot persistence.
mod snapshot;

pub use snapshot::{load_snapshot, save_snapshot, StoreError, SNAPSHOT_VERSION};
