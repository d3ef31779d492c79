//! Loader: read the local batch JSON file ({"Users": [...], "Articles": [...]}),
//! decode into typed entities, and compute the canonical digest for run
//! provenance. Schema/type enforcement is the typed decode itself — content
//! validation is `blog_validate`'s job, not ours. No network I/O.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use blog_core::BlogBatch;

use crate::{hasher, IoError, IoResult};

/// Hard cap on batch file size; a batch near this size is pathological for
/// this loader and should be split upstream.
pub const MAX_BATCH_BYTES: u64 = 256 * 1024 * 1024;

/// A decoded batch plus its provenance digest.
#[derive(Debug, Clone)]
pub struct LoadedBatch {
    pub batch: BlogBatch,
    /// SHA-256 over the canonical JSON bytes of the decoded batch
    /// (stable across reformatting of the input file).
    pub batch_sha256: String,
    pub source: PathBuf,
}

/// Load and decode a batch file. Rejects URLs, oversized files, and
/// malformed JSON; never inspects record content beyond types.
pub fn load_batch(path: &Path) -> IoResult<LoadedBatch> {
    let display = path.display().to_string();
    if display.contains("://") {
        return Err(IoError::Invalid(format!(
            "refusing non-local path '{display}'"
        )));
    }

    let meta = fs::metadata(path)
        .map_err(|e| IoError::Path(format!("{display}: {e}")))?;
    if !meta.is_file() {
        return Err(IoError::Path(format!("{display}: not a regular file")));
    }
    if meta.len() > MAX_BATCH_BYTES {
        return Err(IoError::Limit(format!(
            "{display}: {} bytes exceeds cap of {MAX_BATCH_BYTES}",
            meta.len()
        )));
    }

    let bytes = fs::read(path).map_err(|e| IoError::Path(format!("{display}: {e}")))?;
    let batch: BlogBatch = serde_json::from_slice(&bytes)?;
    let batch_sha256 = hasher::sha256_canonical(&batch)?;

    Ok(LoadedBatch {
        batch,
        batch_sha256,
        source: path.to_path_buf(),
    })
}
