//! Authentication subsystem
//!
//! Components, leaves first:
//! - `credentials` — static username/secret table checked during login
//! - `jwt` — stateless issuance and validation of signed bearer tokens
//! - `revocation` — shared set of tokens invalidated by logout
//! - `middleware` — the auth gate composing revocation lookup with token
//!   validation on every protected request
//! - `password` — Argon2id hashing for stored secrets

pub mod credentials;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod revocation;

pub use credentials::CredentialStore;
pub use jwt::{issue_token, validate_token, Claims, TokenError};
pub use middleware::{auth_middleware, AuthError, AuthenticatedUser};
pub use password::{hash_password, verify_password, PasswordError};
pub use revocation::RevocationList;
