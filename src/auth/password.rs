//! Credential hashing.
//!
//! Argon2id with a per-password random salt. The digest string embeds the
//! algorithm parameters and salt, so verification needs nothing but the
//! digest itself.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a plaintext password into a self-describing PHC digest string.
pub fn hash_password(plaintext: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Hashing failed: {}", e))?
        .to_string();
    Ok(digest)
}

/// Verify a plaintext password against a stored digest.
///
/// A malformed digest verifies `false` rather than erroring, so callers
/// treat every mismatch uniformly as invalid credentials.
pub fn verify_password(plaintext: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let digest = hash_password("secret123").unwrap();
        assert!(verify_password("secret123", &digest));
    }

    #[test]
    fn test_wrong_password_fails() {
        let digest = hash_password("secret123").unwrap();
        assert!(!verify_password("secret124", &digest));
        assert!(!verify_password("", &digest));
    }

    #[test]
    fn test_salts_differ_per_hash() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b, "Each digest must carry a fresh salt");
        assert!(verify_password("same-password", &a));
        assert!(verify_password("same-password", &b));
    }

    #[test]
    fn test_malformed_digest_verifies_false() {
        assert!(!verify_password("secret123", ""));
        assert!(!verify_password("secret123", "not-a-phc-string"));
        assert!(!verify_password("secret123", "$argon2id$garbage"));
    }
}
