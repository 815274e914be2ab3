/*
[INPUT]:  Public key and hex secret key from the embedding application
[OUTPUT]: Validated, immutable API credentials
[POS]:    Auth layer - credential holder for signed requests
[UPDATE]: When credential sources or validation rules change
*/

use secrecy::{ExposeSecret, SecretString};

use crate::http::{DmarketError, Result};

pub const PUBLIC_KEY_ENV: &str = "DMARKET_PUBLIC_KEY";
pub const SECRET_KEY_ENV: &str = "DMARKET_SECRET_KEY";

/// API credentials for signed requests.
///
/// The secret key is wrapped in `SecretString`, so it never shows up in
/// `Debug` output and is zeroed on drop.
#[derive(Clone)]
pub struct Credentials {
    public_key: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create credentials from explicit values.
    ///
    /// # Errors
    /// Returns `DmarketError::Config` if either key is empty.
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        let public_key = public_key.into();
        let secret_key = secret_key.into();

        if public_key.trim().is_empty() {
            return Err(DmarketError::Config("public key must be provided".into()));
        }
        if secret_key.trim().is_empty() {
            return Err(DmarketError::Config("secret key must be provided".into()));
        }

        Ok(Self {
            public_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Load credentials from `DMARKET_PUBLIC_KEY` and `DMARKET_SECRET_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load credentials through a variable lookup. Both variables must be
    /// set and non-empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let public_key = lookup(PUBLIC_KEY_ENV)
            .ok_or_else(|| DmarketError::Config(format!("{PUBLIC_KEY_ENV} is not set")))?;
        let secret_key = lookup(SECRET_KEY_ENV)
            .ok_or_else(|| DmarketError::Config(format!("{SECRET_KEY_ENV} is not set")))?;
        Self::new(public_key, secret_key)
    }

    /// Public API key, sent as `X-Api-Key`
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Expose the secret key hex for signing. Never log the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// Shortened public key suitable for log fields
    pub fn redacted_public_key(&self) -> String {
        let prefix: String = self.public_key.chars().take(8).collect();
        format!("{prefix}...")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
