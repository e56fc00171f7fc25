//! JWT validation against a configured symmetric secret
//!
//! All parse and signature failures are absorbed at [`TokenValidator::parse_claims`]:
//! callers see an absent result or a `false` verdict, never an error. Malformed,
//! tampered, expired, and wrong-subject tokens are indistinguishable to callers.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::config::JwtConfig;
use crate::domain::user::User;
use crate::domain::DomainError;

/// JWT claims consumed by this crate
///
/// Both fields are optional on the wire; unknown claims are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the principal the token was issued for)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiration timestamp (Unix epoch seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// A token is expired only when `exp` is present and strictly in the past.
    /// A token without `exp` never expires.
    pub fn is_expired(&self) -> bool {
        self.exp.is_some_and(|exp| exp < Utc::now().timestamp())
    }
}

/// An identity a token can be checked against
pub trait Principal {
    /// The subject claim this identity is authenticated by
    fn subject(&self) -> &str;
}

impl Principal for User {
    fn subject(&self) -> &str {
        self.email()
    }
}

/// Validates (and issues) HMAC-signed JWTs
///
/// Key material is derived once at construction and never re-derived per
/// call; the validator is immutable and safe to share across tasks.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
    encoding_key: EncodingKey,
    validation: Validation,
    expiration_hours: u64,
}

impl Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("decoding_key", &"[hidden]")
            .field("encoding_key", &"[hidden]")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

impl TokenValidator {
    /// Build a validator from configuration
    ///
    /// The secret must be present and valid standard base64; anything else
    /// is a configuration error and the process should not start.
    pub fn new(config: &JwtConfig) -> Result<Self, DomainError> {
        if config.secret.is_empty() {
            return Err(DomainError::configuration(
                "security.jwt.secret must be configured",
            ));
        }

        let key_bytes = STANDARD.decode(&config.secret).map_err(|e| {
            DomainError::configuration(format!("JWT secret is not valid base64: {}", e))
        })?;

        // Expiry and subject are checked here, not by the decoder, because a
        // token without an exp claim is treated as valid with respect to expiry.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            decoding_key: DecodingKey::from_secret(&key_bytes),
            encoding_key: EncodingKey::from_secret(&key_bytes),
            validation,
            expiration_hours: config.expiration_hours,
        })
    }

    /// Parse and signature-verify a token
    ///
    /// The single fail-closed boundary: any structural or cryptographic
    /// failure yields `None`.
    pub fn parse_claims(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .ok()
    }

    /// Extract the subject from a verified token
    ///
    /// `None` for unparseable tokens and for tokens carrying no subject.
    pub fn extract_subject(&self, token: &str) -> Option<String> {
        self.parse_claims(token).and_then(|claims| claims.sub)
    }

    /// Check a token against an expected subject
    ///
    /// Valid only when the signature verifies, the subject claim equals
    /// `expected_subject` exactly, and the token is not expired.
    pub fn is_token_valid(&self, token: &str, expected_subject: &str) -> bool {
        self.parse_claims(token)
            .filter(|claims| claims.sub.as_deref() == Some(expected_subject))
            .filter(|claims| !claims.is_expired())
            .is_some()
    }

    /// Check a token against a principal's subject
    pub fn is_token_valid_for(&self, token: &str, principal: &impl Principal) -> bool {
        self.is_token_valid(token, principal.subject())
    }

    /// Sign a token for a subject, expiring `expiration_hours` from now
    pub fn issue(&self, subject: &str) -> Result<String, DomainError> {
        let exp = Utc::now() + Duration::hours(self.expiration_hours as i64);
        let claims = Claims {
            sub: Some(subject.to_string()),
            exp: Some(exp.timestamp()),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign JWT: {}", e)))
    }
}
