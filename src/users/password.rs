//! Password hashing
//!
//! Stores passwords as `salt$digest` where the digest is SHA-256 over the
//! hex-encoded salt followed by the password bytes.

use sha2::{Digest, Sha256};

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    let salt_hex = hex::encode(salt);
    format!("{}${}", salt_hex, digest(&salt_hex, password))
}

/// Verify a password against a stored `salt$digest` value
pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt_hex, expected)) => digest(salt_hex, password) == expected,
        None => false,
    }
}

fn digest(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let stored = hash_password("hunter2");
        assert!(verify_password("hunter2", &stored));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let stored = hash_password("hunter2");
        assert!(!verify_password("hunter3", &stored));
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let a = hash_password("same");
        let b = hash_password("same");
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_stored_value_rejected() {
        assert!(!verify_password("anything", "not-a-valid-record"));
    }
}
