use sha2::{Digest, Sha256};

/// Deterministic one-way digest used to derive obfuscated names.
/// Truncated hex keeps the output readable as an identifier tail.
pub fn digest(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let hex = format!("{:x}", hasher.finalize());
    hex[..16].to_string()
}
