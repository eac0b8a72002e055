use crate::{AuthError, JwtAlgorithm, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde_json::{Map, Value};

/// Verified ID token claims, as a mapping
pub type IdTokenClaims = Map<String, Value>;

const CLOCK_SKEW_LEEWAY_SECS: u64 = 30;

/// Verifies OIDC ID tokens issued by the identity platform
pub struct IdTokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

impl IdTokenValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::build(DecodingKey::from_secret(secret), Algorithm::HS256)
    }

    /// Create validator with RS256 (asymmetric public key)
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(|e| AuthError::invalid_token(format!("Invalid RSA public key: {e}")))?;

        Ok(Self::build(decoding_key, Algorithm::RS256))
    }

    #[track_caller]
    pub fn from_algorithm(algorithm: &JwtAlgorithm) -> AuthErrorResult<Self> {
        match algorithm {
            JwtAlgorithm::HS256 { secret } => Ok(Self::with_hs256(secret)),
            JwtAlgorithm::RS256 { public_key_pem } => Self::with_rs256(public_key_pem),
        }
    }

    fn build(decoding_key: DecodingKey, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = CLOCK_SKEW_LEEWAY_SECS;
        // ID tokens always carry `aud`; only check it when an audience is configured
        validation.validate_aud = false;

        Self {
            decoding_key,
            validation,
            algorithm,
        }
    }

    /// Require the `iss` claim to match
    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self
    }

    /// Require the `aud` claim to contain this audience
    pub fn with_audience(mut self, audience: &str) -> Self {
        self.validation.set_audience(&[audience]);
        self.validation.validate_aud = true;
        self
    }

    /// Validate an ID token and return all of its claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<IdTokenClaims> {
        let token_data = decode::<IdTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        Ok(token_data.claims)
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &str {
        match self.algorithm {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
            _ => "unknown",
        }
    }
}
