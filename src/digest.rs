//! Case-insensitive SHA-256 digests
//!
//! The digest of a byte string is the SHA-256 of its lowercased form, so two
//! inputs that differ only in ASCII case share a digest. Folding happens in
//! bounded stack chunks; the input is never copied as a whole.

use sha2::{Digest, Sha256};

use crate::iter::CaseFold;

/// Length of a SHA-256 digest in bytes
pub const DIGEST_LEN: usize = 32;

/// Streaming case-insensitive SHA-256.
#[derive(Clone, Default)]
pub struct CiSha256 {
    hasher: Sha256,
    bytes_seen: u64,
}

impl CiSha256 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `bytes` and feed them to the digest
    pub fn update(&mut self, bytes: &[u8]) {
        let hasher = &mut self.hasher;
        bytes.folded().for_each_chunk(|chunk| hasher.update(chunk));
        self.bytes_seen += bytes.len() as u64;
    }

    /// Number of input bytes hashed so far
    pub fn bytes_seen(&self) -> u64 {
        self.bytes_seen
    }

    pub fn finalize(self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&self.hasher.finalize());
        out
    }

    pub fn finalize_hex(self) -> String {
        hex::encode(self.finalize())
    }
}

/// Case-insensitive SHA-256 of `bytes`
pub fn ci_sha256(bytes: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = CiSha256::new();
    hasher.update(bytes);
    hasher.finalize()
}

/// Lowercase hex form of [`ci_sha256`]
pub fn ci_sha256_hex(bytes: &[u8]) -> String {
    hex::encode(ci_sha256(bytes))
}
