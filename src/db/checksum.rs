//! Profile checksums.
//!
//! Submitted profiles are identified by the SHA-256 of their raw JSON, so
//! repeated submissions of the same input dedupe to the same snapshot.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a submitted profile's JSON text.
pub fn profile_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
