//! Argon2id password hashing.
//!
//! Plaintext passwords never reach storage; only the PHC-format hash string
//! (which embeds the salt and parameters) is persisted.

use crate::error::PalmgateError;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;

/// Hash a password with a fresh OS-random salt.
pub fn hash(password: &str) -> Result<String, PalmgateError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| PalmgateError::PasswordHash(e.to_string()))
}

/// Verify a password against a stored PHC hash string.
///
/// A mismatch is `Ok(false)`; only an unparseable stored hash is an error.
pub fn verify(password: &str, stored_hash: &str) -> Result<bool, PalmgateError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| PalmgateError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hashed = hash("hunter2").expect("hashing failed");
        assert_ne!(hashed, "hunter2");
        assert!(verify("hunter2", &hashed).expect("verify failed"));
        assert!(!verify("hunter3", &hashed).expect("verify failed"));
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash("hunter2").expect("hashing failed");
        let b = hash("hunter2").expect("hashing failed");
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(verify("hunter2", "not-a-phc-string").is_err());
    }
}
