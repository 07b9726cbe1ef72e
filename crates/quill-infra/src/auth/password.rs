//! Argon2id hashing for the admin secret.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use quill_core::ports::{AuthError, PasswordService};

/// Password service backed by Argon2id with the crate's default parameters.
#[derive(Default)]
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored PHC string, rejecting anything that is not an Argon2 hash.
    pub fn parse_hash(hash: &str) -> Result<PasswordHash<'_>, AuthError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AuthError::HashingError(format!("malformed password hash: {e}")))?;

        if !parsed.algorithm.as_str().starts_with("argon2") {
            return Err(AuthError::HashingError(format!(
                "unsupported hash algorithm: {}",
                parsed.algorithm
            )));
        }
        Ok(parsed)
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = Self::parse_hash(hash)?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::HashingError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use quill_core::domain::{AdminIdentity, AdminSecret};

    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("changeme123").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(service.verify("changeme123", &hash).unwrap());
        assert!(!service.verify("changeme124", &hash).unwrap());
    }

    #[test]
    fn test_hashed_admin_identity() {
        let service = Argon2PasswordService::new();
        let identity = AdminIdentity::new(
            "admin",
            AdminSecret::Hashed(service.hash("changeme123").unwrap()),
        );

        assert!(identity.verify("admin", "changeme123", &service).unwrap());
        assert!(!identity.verify("admin", "wrong", &service).unwrap());
        assert!(!identity.verify("root", "changeme123", &service).unwrap());
    }

    #[test]
    fn test_parse_hash_rejects_garbage_and_other_algorithms() {
        assert!(Argon2PasswordService::parse_hash("not-a-phc-string").is_err());
        let pbkdf2 = "$pbkdf2-sha256$i=1000$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA";
        assert!(matches!(
            Argon2PasswordService::parse_hash(pbkdf2),
            Err(AuthError::HashingError(msg)) if msg.starts_with("unsupported")
        ));

        let service = Argon2PasswordService::new();
        assert!(service.verify("changeme123", "not-a-phc-string").is_err());
    }
}
