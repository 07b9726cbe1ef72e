//! Application configuration loaded from environment variables.

use std::env;

use quill_core::domain::{AdminIdentity, AdminSecret};
use quill_core::ports::AuthError;
use quill_infra::{Argon2PasswordService, DatabaseConfig, SessionConfig};

const DEFAULT_KEYNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "changeme123";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the in-memory post store.
    pub database: Option<DatabaseConfig>,
    pub admin: AdminIdentity,
    pub session: SessionConfig,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());
        config.session = SessionConfig::from_env();
        config
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = var("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: var("DB_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
                min_connections: var("DB_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1),
            });

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database,
            admin: Self::admin_identity(&var),
            session: SessionConfig::default(),
            cookie_secure: var("COOKIE_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Reject settings that would only fail later, at request time.
    pub fn validate(&self) -> Result<(), AuthError> {
        if let AdminSecret::Hashed(hash) = &self.admin.secret {
            Argon2PasswordService::parse_hash(hash)?;
        }
        Ok(())
    }

    /// `ADMIN_PASSWORD_HASH` (Argon2 PHC string) wins over `ADMIN_PASSWORD`.
    fn admin_identity(var: &impl Fn(&str) -> Option<String>) -> AdminIdentity {
        let keyname = var("ADMIN_KEYNAME").unwrap_or_else(|| DEFAULT_KEYNAME.to_string());

        let secret = match var("ADMIN_PASSWORD_HASH").filter(|h| !h.is_empty()) {
            Some(hash) => AdminSecret::Hashed(hash),
            None => {
                let password =
                    var("ADMIN_PASSWORD").unwrap_or_else(|| DEFAULT_PASSWORD.to_string());
                if password == DEFAULT_PASSWORD {
                    tracing::warn!(
                        "Using default admin password. Set ADMIN_PASSWORD or ADMIN_PASSWORD_HASH."
                    );
                }
                AdminSecret::Plain(password)
            }
        };

        AdminIdentity::new(keyname, secret)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const VALID_HASH: &str =
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA";

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
        assert!(!config.cookie_secure);
        assert_eq!(config.admin.keyname, "admin");
        assert!(matches!(&config.admin.secret, AdminSecret::Plain(p) if p == "changeme123"));
    }

    #[test]
    fn test_database_and_pool() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://blog.db?mode=rwc"),
            ("DB_MAX_CONNECTIONS", "4"),
        ]));

        let database = config.database.unwrap();
        assert_eq!(database.url, "sqlite://blog.db?mode=rwc");
        assert_eq!(database.max_connections, 4);
        assert_eq!(database.min_connections, 1);
    }

    #[test]
    fn test_password_hash_wins() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ADMIN_KEYNAME", "editor"),
            ("ADMIN_PASSWORD", "plain"),
            ("ADMIN_PASSWORD_HASH", VALID_HASH),
        ]));

        assert_eq!(config.admin.keyname, "editor");
        assert!(matches!(config.admin.secret, AdminSecret::Hashed(_)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_password_hash_fails_validation() {
        let config = AppConfig::from_lookup(lookup(&[("ADMIN_PASSWORD_HASH", "changeme123")]));

        assert!(matches!(config.validate(), Err(AuthError::HashingError(_))));
    }

    #[test]
    fn test_plain_password_always_validates() {
        let config = AppConfig::from_lookup(lookup(&[("ADMIN_PASSWORD", "s3cret")]));

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = AppConfig::from_lookup(lookup(&[("PORT", "eighty"), ("COOKIE_SECURE", "1")]));

        assert_eq!(config.port, 8080);
        assert!(config.cookie_secure);
    }
}
