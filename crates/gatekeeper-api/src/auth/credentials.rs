//! Static credential store
//!
//! An immutable username -> secret mapping checked during login. Seeds come
//! from configuration at process start; nothing mutates the table afterwards.

use super::password::{hash_password, verify_password, PasswordError};
use gatekeeper_core::config::SeedCredential;
use std::collections::HashMap;

/// Immutable credential table, seeded once at startup
///
/// Secrets are kept as Argon2id hashes; the plaintext seeds are dropped as
/// soon as construction finishes.
pub struct CredentialStore {
    records: HashMap<String, String>,
}

impl CredentialStore {
    /// Build the store from configuration seeds, hashing each secret
    ///
    /// Later seeds with a duplicate username replace earlier ones, keeping
    /// the username-uniqueness invariant.
    pub fn from_seeds(seeds: &[SeedCredential]) -> Result<Self, PasswordError> {
        let mut records = HashMap::with_capacity(seeds.len());
        for seed in seeds {
            let hash = hash_password(&seed.password)?;
            records.insert(seed.username.clone(), hash);
        }
        Ok(Self { records })
    }

    /// Check a username/password pair against the table
    ///
    /// Pure lookup, no side effects. Returns false for unknown users and for
    /// wrong passwords alike; callers must not expose which case occurred.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.records.get(username) {
            Some(hash) => verify_password(password, hash).is_ok(),
            None => false,
        }
    }

    /// Number of seeded credentials
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds() -> Vec<SeedCredential> {
        vec![
            SeedCredential {
                username: "admin".to_string(),
                password: "admin123".to_string(),
            },
            SeedCredential {
                username: "user".to_string(),
                password: "user123".to_string(),
            },
        ]
    }

    #[test]
    fn test_verify_known_credentials() {
        let store = CredentialStore::from_seeds(&seeds()).unwrap();

        assert!(store.verify("admin", "admin123"));
        assert!(store.verify("user", "user123"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let store = CredentialStore::from_seeds(&seeds()).unwrap();
        assert!(!store.verify("admin", "wrong"));
    }

    #[test]
    fn test_unknown_user_rejected() {
        let store = CredentialStore::from_seeds(&seeds()).unwrap();
        assert!(!store.verify("nobody", "admin123"));
    }

    #[test]
    fn test_duplicate_seed_last_wins() {
        let mut dup = seeds();
        dup.push(SeedCredential {
            username: "admin".to_string(),
            password: "rotated".to_string(),
        });

        let store = CredentialStore::from_seeds(&dup).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.verify("admin", "rotated"));
        assert!(!store.verify("admin", "admin123"));
    }
}
