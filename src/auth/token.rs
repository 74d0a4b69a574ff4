//! Session token issuance and verification.
//!
//! Stateless HS256 JWTs: the account id rides in `sub`, the expiry in
//! `exp`. There is no revocation store; a token stays valid until its
//! encoded expiry regardless of later account changes.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: String, // account id
    pub iat: i64,    // issued at (UTC timestamp)
    pub exp: i64,    // expiry (UTC timestamp)
}

/// Verification failure. The split between expired and everything else is
/// internal only; callers surface both as unauthenticated.
#[derive(Debug, PartialEq, Eq)]
pub enum TokenError {
    Expired,
    Invalid,
}

/// Signing/verification keys derived from the configured secret.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Issue a token for `account_id`, expiring `ttl` from now.
    pub fn issue(&self, account_id: &str) -> anyhow::Result<String> {
        self.issue_at(account_id, Utc::now())
    }

    /// Issue a token with an explicit issuance instant.
    pub fn issue_at(&self, account_id: &str, issued_at: DateTime<Utc>) -> anyhow::Result<String> {
        let claims = Claims {
            sub: account_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Verify signature and expiry, returning the claims.
    ///
    /// Malformed structure, signature mismatch and past-expiry all reject;
    /// only the two-way split above is preserved for logging.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // "expired" means the encoded instant, not the default 60s grace
        validation.leeway = 0;
        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Invalid),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new("test-secret", 7)
    }

    #[test]
    fn test_issue_then_verify_resolves_account() {
        let token = keys().issue("acct-42").unwrap();
        let claims = keys().verify(&token).unwrap();
        assert_eq!(claims.sub, "acct-42");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        // Issued 8 days ago with a 7 day TTL
        let issued = Utc::now() - Duration::days(8);
        let token = keys().issue_at("acct-42", issued).unwrap();
        assert_eq!(keys().verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = keys().issue("acct-42").unwrap();
        let other = TokenKeys::new("different-secret", 7);
        assert_eq!(other.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert_eq!(keys().verify(""), Err(TokenError::Invalid));
        assert_eq!(keys().verify("not.a.jwt"), Err(TokenError::Invalid));
        assert_eq!(
            keys().verify("eyJhbGciOiJIUzI1NiJ9.e30."),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let token = keys().issue("acct-42").unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = "eyJzdWIiOiJhY2N0LTk5IiwiaWF0IjowLCJleHAiOjk5OTk5OTk5OTl9";
        parts[1] = forged_payload;
        let forged = parts.join(".");
        assert_eq!(keys().verify(&forged), Err(TokenError::Invalid));
    }
}
