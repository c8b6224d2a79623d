//! Content fingerprints for uploaded documents.
//!
//! A fingerprint is the lowercase hex SHA-256 of the raw file bytes. Two
//! uploads with the same fingerprint are the same scan, whatever their names.

use sha2::{Digest, Sha256};

/// Returns a 64-character lowercase hex string.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
