//! Signed session cookies as HS256 JWTs.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use quill_core::domain::AdminSession;
use quill_core::ports::{AuthError, SessionCodec};

const DEFAULT_SECRET: &str = "dev-secret-key-change-in-production";

/// Session signing configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl_hours: i64,
    pub issuer: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            ttl_hours: 24,
            issuer: "quill".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());

        // Warn if using default secret in production
        if secret == DEFAULT_SECRET {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default session secret in production! Set SESSION_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default session secret. Set SESSION_SECRET for production use.");
            }
        }

        Self {
            secret,
            ttl_hours: std::env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(24),
            issuer: std::env::var("SESSION_ISSUER").unwrap_or_else(|_| "quill".to_string()),
        }
    }
}

/// Claims carried in the session cookie.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    session: AdminSession,
    exp: i64,
    iat: i64,
    iss: String,
}

/// JWT-based session codec.
pub struct JwtSessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: SessionConfig,
}

impl JwtSessionCodec {
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }
}

impl SessionCodec for JwtSessionCodec {
    fn encode(&self, session: &AdminSession) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.config.ttl_hours);

        let claims = Claims {
            session: session.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidSession(e.to_string()))
    }

    fn decode(&self, token: &str) -> Result<AdminSession, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::SessionExpired,
                _ => AuthError::InvalidSession(e.to_string()),
            }
        })?;

        Ok(token_data.claims.session)
    }

    fn max_age_seconds(&self) -> i64 {
        self.config.ttl_hours * 3600
    }
}

#[cfg(test)]
mod tests {
    use quill_core::domain::Flash;

    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            secret: "test-secret-key".to_string(),
            ttl_hours: 1,
            issuer: "test-issuer".to_string(),
        }
    }

    #[test]
    fn test_session_survives_encoding() {
        let codec = JwtSessionCodec::new(test_config());
        let mut session = AdminSession::anonymous();
        session.push_flash(Flash::error("Invalid credentials!"));

        let token = codec.encode(&session).unwrap();
        let decoded = codec.decode(&token).unwrap();

        assert_eq!(decoded, session);
    }

    #[test]
    fn test_decode_garbage() {
        let codec = JwtSessionCodec::new(test_config());

        let result = codec.decode("not-a-session");

        assert!(matches!(result, Err(AuthError::InvalidSession(_))));
    }

    #[test]
    fn test_decode_rejects_other_secret() {
        let codec = JwtSessionCodec::new(test_config());
        let forger = JwtSessionCodec::new(SessionConfig {
            secret: "guessed".to_string(),
            ..test_config()
        });

        let token = forger.encode(&AdminSession::anonymous()).unwrap();

        assert!(codec.decode(&token).is_err());
    }

    #[test]
    fn test_decode_expired() {
        let codec = JwtSessionCodec::new(SessionConfig {
            ttl_hours: -2,
            ..test_config()
        });

        let token = codec.encode(&AdminSession::anonymous()).unwrap();

        assert!(matches!(codec.decode(&token), Err(AuthError::SessionExpired)));
    }

    #[test]
    fn test_max_age_seconds() {
        let codec = JwtSessionCodec::new(SessionConfig {
            ttl_hours: 24,
            ..test_config()
        });

        assert_eq!(codec.max_age_seconds(), 86400);
    }
}
