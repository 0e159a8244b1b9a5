use sha2::{Digest, Sha256};

/// SHA-256 of `data` as a lowercase hex string (64 characters).
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
