//! crates/blog_io/src/hasher.rs
//! Deterministic hashing for provenance digests and fallback document IDs.
//!
//! - `sha256_canonical(..)` hashes JSON **values/structs** through the
//!   canonical byte form (sorted keys, compact), so a reformatted input
//!   file digests identically.
//! - `sha256_hex(..)` hashes raw bytes.
//! - Hex digests are lowercase throughout.

use sha2::{Digest, Sha256};

use crate::canonical_json::canonical_json_bytes;
use crate::{IoError, IoResult};

/// SHA-256 of raw bytes, lowercase 64-hex.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// SHA-256 of a serializable value's canonical JSON bytes.
pub fn sha256_canonical<T: serde::Serialize>(value: &T) -> IoResult<String> {
    let bytes = canonical_json_bytes(value)
        .map_err(|e| IoError::Hash(format!("canonicalization: {e}")))?;
    Ok(sha256_hex(&bytes))
}

/// Shortened digest for fallback document IDs (first `n` hex chars, n ≤ 64).
pub fn short_digest(input: &str, n: usize) -> String {
    let mut hexed = sha256_hex(input.as_bytes());
    hexed.truncate(n.min(64));
    hexed
}
