//! Stored password form for registered analysts
//!
//! Passwords are kept as a salted SHA-256 digest. The plain text is
//! dropped as soon as the secret is derived.

use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use sha2::{Digest, Sha256};
use std::fmt;

const SALT_LEN: usize = 16;

#[derive(Clone, PartialEq, Eq)]
pub struct PasswordSecret {
    salt_b64: String,
    digest_b64: String,
}

impl PasswordSecret {
    /// Derive a secret with a fresh random salt
    pub fn derive(password: &str) -> Self {
        let salt: [u8; SALT_LEN] = rand::random();
        Self::with_salt(password, &salt)
    }

    fn with_salt(password: &str, salt: &[u8]) -> Self {
        Self {
            salt_b64: B64.encode(salt),
            digest_b64: B64.encode(digest(salt, password)),
        }
    }

    /// Check a candidate password against the stored digest
    pub fn verify(&self, candidate: &str) -> bool {
        let (Ok(salt), Ok(expected)) = (B64.decode(&self.salt_b64), B64.decode(&self.digest_b64))
        else {
            return false;
        };
        let actual = digest(&salt, candidate);

        // Compare every byte regardless of where the first mismatch is
        actual.len() == expected.len()
            && actual
                .iter()
                .zip(expected.iter())
                .fold(0u8, |acc, (a, b)| acc | (a ^ b))
                == 0
    }
}

fn digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

impl fmt::Debug for PasswordSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordSecret")
            .field("salt_b64", &self.salt_b64)
            .field("digest_b64", &"<redacted>")
            .finish()
    }
}
