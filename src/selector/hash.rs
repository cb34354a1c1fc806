//! Stable string hashing for deterministic roster picks
//!
//! The hash is the first 8 bytes of the SHA-256 digest of the UTF-8 input,
//! read as a big-endian `u64`. Any language with a SHA-256 implementation can
//! reproduce it, and it does not change between processes.

use sha2::Digest;
use sha2::Sha256;

/// Hash `text` to a process-independent `u64`
#[must_use]
pub fn stable_hash(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// Map `text` onto `0..len`, `None` when `len` is zero
#[must_use]
pub fn stable_index(text: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((stable_hash(text) % len as u64) as usize)
}
