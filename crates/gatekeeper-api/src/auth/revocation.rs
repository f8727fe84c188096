//! Token revocation list
//!
//! Shared, mutable set of raw token strings that have been invalidated by
//! logout. The tokens themselves stay cryptographically valid until expiry;
//! membership here is what makes the auth gate reject them anyway.
//!
//! The list is owned by `AppState` and injected where needed, so each test
//! gets fresh state and nothing lives in a process-wide global. Entries are
//! process-lifetime: there is no un-revoke, and no eviction of expired
//! entries (single-instance deployments restart before this matters; a
//! multi-instance setup would need an external store anyway).

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

/// In-memory revocation list with reader/writer exclusion
///
/// Many concurrent `is_revoked` checks proceed in parallel; a `revoke` call
/// briefly excludes all other access. A completed `revoke` is visible to
/// every subsequent check.
#[derive(Debug, Default)]
pub struct RevocationList {
    inner: RwLock<HashSet<String>>,
}

impl RevocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke a token. Idempotent: revoking twice observably equals once.
    pub fn revoke(&self, token: &str) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.to_string());
    }

    /// Membership test. Monotonic: once true, true forever.
    pub fn is_revoked(&self, token: &str) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(token)
    }

    /// Number of revoked tokens currently held
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_revoke_and_check() {
        let list = RevocationList::new();

        assert!(!list.is_revoked("token-a"));
        list.revoke("token-a");

        assert!(list.is_revoked("token-a"));
        assert!(!list.is_revoked("token-b"));
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let list = RevocationList::new();

        list.revoke("token-a");
        list.revoke("token-a");

        assert!(list.is_revoked("token-a"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_revocation_is_monotonic() {
        let list = RevocationList::new();
        list.revoke("token-a");

        for _ in 0..100 {
            assert!(list.is_revoked("token-a"));
        }
    }

    #[test]
    fn test_concurrent_revoke_and_check() {
        let list = Arc::new(RevocationList::new());

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let list = Arc::clone(&list);
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        // Either answer is fine while the writer races us;
                        // the call itself must never corrupt the set.
                        let _ = list.is_revoked("contended");
                    }
                })
            })
            .collect();

        let writer = {
            let list = Arc::clone(&list);
            thread::spawn(move || list.revoke("contended"))
        };

        writer.join().unwrap();
        // The write has completed: every check from here on must see it.
        assert!(list.is_revoked("contended"));

        for reader in readers {
            reader.join().unwrap();
        }
        assert!(list.is_revoked("contended"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_concurrent_distinct_revocations() {
        let list = Arc::new(RevocationList::new());

        let writers: Vec<_> = (0..8)
            .map(|i| {
                let list = Arc::clone(&list);
                thread::spawn(move || list.revoke(&format!("token-{i}")))
            })
            .collect();

        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(list.len(), 8);
        for i in 0..8 {
            assert!(list.is_revoked(&format!("token-{i}")));
        }
    }
}
