use sha2::{Digest, Sha256};

/// Hex SHA-256 of raw catalog bytes.
pub fn calculate_bytes_hash(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
