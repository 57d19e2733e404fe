// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Fatal precondition failures. Per-term problems are `Diagnostic`s instead.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {what} in {}: {source}", .path.display())]
    Json {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("link map entry {term:?} has no links")]
    EmptyLinks { term: String },
    #[error("index snapshot {} failed: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
}

pub type Result<T, E = IndexError> = std::result::Result<T, E>;
