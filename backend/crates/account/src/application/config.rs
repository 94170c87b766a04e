//! Application Configuration
//!
//! Configuration for the Account application layer.

use std::time::Duration;

/// Account application configuration
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Secret key for HMAC token signing (any length)
    pub token_secret: Vec<u8>,
    /// Optional token lifetime; `None` issues tokens without an expiry
    /// claim, matching clients that hold a token indefinitely
    pub token_ttl: Option<Duration>,
}

impl AccountConfig {
    /// Create config with an externally supplied secret
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: None,
        }
    }

    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret.to_vec())
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Set a token lifetime; issued tokens then carry an `exp` claim
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }
}
