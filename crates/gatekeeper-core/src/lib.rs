//! Gatekeeper Core - configuration and shared domain models
//!
//! This crate holds what the API server consumes but does not own:
//! - Configuration management (environment variables, TOML files)
//! - Demo catalog models (users, products) served by the read-only endpoints

pub mod config;
pub mod models;

pub use config::{AppConfig, AuthConfig, ConfigError, ServerConfig, UploadConfig};
pub use models::{Product, User};
