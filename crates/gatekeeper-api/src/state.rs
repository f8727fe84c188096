//! Application state management
//!
//! All mutable shared state lives here and is injected into handlers and
//! middleware through axum's `State`, never reached through globals. Fresh
//! state per test comes for free.

use crate::auth::password::PasswordError;
use crate::auth::{CredentialStore, RevocationList};
use gatekeeper_core::config::AppConfig;
use std::time::Instant;

/// Application state shared across handlers
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Server start time
    pub start_time: Instant,
    /// Immutable credential table seeded at startup
    pub credentials: CredentialStore,
    /// Tokens invalidated by logout
    pub revoked: RevocationList,
}

impl AppState {
    /// Create new application state, hashing the configured credential seeds
    pub fn new(config: AppConfig) -> Result<Self, PasswordError> {
        let credentials = CredentialStore::from_seeds(&config.auth.seed_credentials)?;

        Ok(Self {
            config,
            start_time: Instant::now(),
            credentials,
            revoked: RevocationList::new(),
        })
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
