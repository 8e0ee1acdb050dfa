//! Hash helpers
//!
//! Transaction identifiers are double SHA256 over the legacy serialization.

use crate::types::Hash;
use sha2::{Digest, Sha256};

/// Single SHA256 hash
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let hash = hasher.finalize();
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Double SHA256 hash (SHA256(SHA256(data)))
pub fn hash256(data: &[u8]) -> Hash {
    let first = sha256(data);
    sha256(&first)
}
