//! Session token service — issue and verify signed JWTs.
//!
//! Tokens are HS256 with a fixed two-day lifetime. Verification checks the
//! signature and expiry only; callers re-check the backing user record.

use serde::{Deserialize, Serialize};

/// Claims carried inside a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued to.
    pub sub: String,
    /// Email at issue time; re-checked against the store on every validation.
    pub email: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
}

/// Fixed session lifetime: two days.
pub const SESSION_TTL_SECS: i64 = 2 * 24 * 60 * 60;

#[derive(Clone)]
pub struct TokenService {
    encoding_key: jsonwebtoken::EncodingKey,
    decoding_key: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
    ttl_secs: i64,
}

impl TokenService {
    /// Create a new TokenService with an HMAC secret.
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: jsonwebtoken::DecodingKey::from_secret(secret.as_bytes()),
            validation: jsonwebtoken::Validation::default(),
            ttl_secs,
        }
    }

    /// Create with the standard two-day session lifetime.
    pub fn with_default_ttl(secret: &str) -> Self {
        Self::new(secret, SESSION_TTL_SECS)
    }

    /// Issue a signed session token for a user.
    pub fn issue(&self, user_id: &str, email: &str) -> Result<String, String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), &claims, &self.encoding_key)
            .map_err(|e| format!("token encode: {}", e))
    }

    /// Verify a session token and extract its claims.
    /// Returns Err if the token is invalid, expired, or tampered with.
    pub fn verify(&self, token: &str) -> Result<Claims, String> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| format!("token verify: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-token-secret";

    /// Encode claims directly with the service's secret, so tests can
    /// back-date iat/exp and probe the expiry boundary.
    fn encode_at(issued_at: i64) -> String {
        let claims = Claims {
            sub: "user-1".to_string(),
            email: "a@x.com".to_string(),
            iat: issued_at,
            exp: issued_at + SESSION_TTL_SECS,
        };
        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        let svc = TokenService::with_default_ttl(TEST_SECRET);
        let token = svc.issue("user-1", "a@x.com").unwrap();
        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_SECS);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let svc = TokenService::with_default_ttl(TEST_SECRET);
        assert!(svc.verify("invalid.token.here").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenService::with_default_ttl("secret-a");
        let verifier = TokenService::with_default_ttl("secret-b");
        let token = issuer.issue("user-1", "a@x.com").unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_token_valid_one_day_after_issue() {
        let svc = TokenService::with_default_ttl(TEST_SECRET);
        let one_day_ago = chrono::Utc::now().timestamp() - 24 * 60 * 60;
        let token = encode_at(one_day_ago);
        assert!(svc.verify(&token).is_ok());
    }

    #[test]
    fn test_token_invalid_three_days_after_issue() {
        let svc = TokenService::with_default_ttl(TEST_SECRET);
        let three_days_ago = chrono::Utc::now().timestamp() - 3 * 24 * 60 * 60;
        let token = encode_at(three_days_ago);
        assert!(svc.verify(&token).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let svc = TokenService::with_default_ttl(TEST_SECRET);
        let mut token = svc.issue("user-1", "a@x.com").unwrap();
        token.push('x');
        assert!(svc.verify(&token).is_err());
    }
}
