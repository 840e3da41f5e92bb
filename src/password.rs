//! Password hashing collaborator used before users are stored.

use sha2::{Digest, Sha256};

/// Turns a plaintext password into the opaque string kept on the [`User`](crate::model::User).
pub trait PasswordHasher: Send + Sync {
    fn encode(&self, plaintext: &str) -> String;
}

/// Unsalted SHA-256, tagged with a `{sha256}` prefix.
///
/// Deterministic on purpose: identical runs must produce identical users.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256PasswordHasher;

impl PasswordHasher for Sha256PasswordHasher {
    fn encode(&self, plaintext: &str) -> String {
        format!("{{sha256}}{:x}", Sha256::digest(plaintext.as_bytes()))
    }
}
