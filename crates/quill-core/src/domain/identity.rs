use std::fmt;

use crate::ports::{AuthError, PasswordService};

/// Secret half of the admin identity.
#[derive(Clone)]
pub enum AdminSecret {
    /// Plain password, compared exactly.
    Plain(String),
    /// Argon2 PHC string.
    Hashed(String),
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminSecret::Plain(_) => f.write_str("Plain(***)"),
            AdminSecret::Hashed(_) => f.write_str("Hashed(***)"),
        }
    }
}

/// The single keyname/secret pair allowed to manage posts.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub keyname: String,
    pub secret: AdminSecret,
}

impl AdminIdentity {
    pub fn new(keyname: impl Into<String>, secret: AdminSecret) -> Self {
        Self {
            keyname: keyname.into(),
            secret,
        }
    }

    /// Check a keyname/password pair against this identity.
    pub fn verify(
        &self,
        keyname: &str,
        password: &str,
        passwords: &dyn PasswordService,
    ) -> Result<bool, AuthError> {
        if keyname != self.keyname {
            return Ok(false);
        }

        match &self.secret {
            AdminSecret::Plain(expected) => Ok(password == expected),
            AdminSecret::Hashed(hash) => passwords.verify(password, hash),
        }
    }
}
