//! blog_io — I/O crate for the blog engine.
//!
//! - Batch file loading with typed decode and size limits (`loader`)
//! - Canonical JSON bytes + atomic file writes (`canonical_json`)
//! - SHA-256 hashing and deterministic document IDs (`hasher`)
//!
//! Shared error type (`IoError`) with `From` conversions used across
//! modules. Strictly local filesystem access; no network I/O.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for blog_io (used by loader/canonical_json/hasher).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (open, read, create_dir_all, rename, fsync).
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON decode errors with line/column context from serde_json.
    #[error("json error at {at}: {msg}")]
    Json { at: String, msg: String },

    /// Input exceeds a configured size limit.
    #[error("limit exceeded: {0}")]
    Limit(String),

    /// Hashing / canonicalization failures.
    #[error("hash error: {0}")]
    Hash(String),

    /// Generic validation / invariants on the I/O surface.
    #[error("invalid: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            at: format!("line {} column {}", e.line(), e.column()),
            msg: e.to_string(),
        }
    }
}

pub mod canonical_json;
pub mod hasher;
pub mod loader;

pub mod prelude {
    pub use crate::hasher::{sha256_canonical, sha256_hex};
    pub use crate::loader::{load_batch, LoadedBatch};
    pub use crate::{IoError, IoResult};
}
