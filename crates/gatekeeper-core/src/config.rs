//! Gatekeeper configuration management
//!
//! Handles configuration from environment variables and TOML files with
//! sensible defaults for development. Secrets (the JWT signing key) are
//! startup inputs, never literals at the point of use.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// File upload configuration
    pub upload: UploadConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Server
        if let Ok(host) = std::env::var("API_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("API_PORT") {
            config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "API_PORT".to_string(),
                value: port,
            })?;
        }

        // CORS origins from environment variable (comma-separated)
        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.server.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Auth
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.auth.jwt_secret = secret;
        }
        if let Ok(ttl) = std::env::var("JWT_TTL_SECS") {
            config.auth.token_ttl_secs = ttl.parse().map_err(|_| ConfigError::InvalidValue {
                key: "JWT_TTL_SECS".to_string(),
                value: ttl,
            })?;
        }

        // Uploads
        if let Ok(dir) = std::env::var("UPLOAD_DIR") {
            config.upload.dir = PathBuf::from(dir);
        }
        if let Ok(max) = std::env::var("MAX_UPLOAD_BYTES") {
            config.upload.max_bytes = max.parse().map_err(|_| ConfigError::InvalidValue {
                key: "MAX_UPLOAD_BYTES".to_string(),
                value: max,
            })?;
        }

        // Logging
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origins; empty means permissive
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Secret key for HMAC signing of access tokens
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    pub token_ttl_secs: u64,

    /// Fixed credential seeds loaded into the store at startup
    pub seed_credentials: Vec<SeedCredential>,
}

/// A username/password pair loaded into the credential store at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCredential {
    pub username: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-key-change-in-production".to_string(),
            token_ttl_secs: 3600, // 1 hour
            seed_credentials: vec![
                SeedCredential {
                    username: "admin".to_string(),
                    password: "admin123".to_string(),
                },
                SeedCredential {
                    username: "user".to_string(),
                    password: "user123".to_string(),
                },
                SeedCredential {
                    username: "test".to_string(),
                    password: "test123".to_string(),
                },
            ],
        }
    }
}

/// File upload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Directory files are stored under; created at startup
    pub dir: PathBuf,

    /// Maximum accepted request body size in bytes
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./uploads"),
            max_bytes: 10 * 1024 * 1024, // 10 MB
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter directive when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "gatekeeper_api=debug,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}
