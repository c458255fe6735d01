//! Refresh token digests
//!
//! Refresh tokens are persisted for revocation, but only as SHA-256
//! digests; a leaked table row cannot be replayed as a token.

use sha2::{Digest, Sha256};

/// Compute the lowercase hex SHA-256 digest of a token
pub fn token_digest(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
