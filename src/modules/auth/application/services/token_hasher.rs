use sha2::{Digest, Sha256};

/// Hash a token using SHA-256 before it is used as a blacklist key.
/// Raw tokens never leave the process.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
