//! Local auth session keys.
//!
//! The storefront keeps its bearer token and display username in the same
//! flat storage namespace as the collections, as raw strings rather than JSON
//! snapshots. This module does no authentication itself; it only remembers
//! what the auth endpoints handed back.

use crate::storage::{StorageBackend, StorageError};

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

/// Token and username storage for the current profile.
pub struct Session<B> {
    backend: B,
}

impl<B: StorageBackend> Session<B> {
    /// Bind the session to a storage backend.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The stored bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    /// Persist a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when persisting fails.
    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.backend.put(TOKEN_KEY, token)
    }

    /// Forget the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the removal fails.
    pub fn clear_token(&self) -> Result<(), StorageError> {
        self.backend.delete(TOKEN_KEY)
    }

    /// Whether a non-empty token is stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }

    /// The stored display username, if any.
    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.backend.get(USERNAME_KEY)
    }

    /// Persist the display username.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when persisting fails.
    pub fn set_username(&self, username: &str) -> Result<(), StorageError> {
        self.backend.put(USERNAME_KEY, username)
    }

    /// Forget the stored username.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the removal fails.
    pub fn clear_username(&self) -> Result<(), StorageError> {
        self.backend.delete(USERNAME_KEY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_token_round_trip() {
        let session = Session::new(MemoryStore::new());
        assert!(!session.is_authenticated());

        session.set_token("jwt-abc").unwrap();
        assert_eq!(session.token().unwrap(), "jwt-abc");
        assert!(session.is_authenticated());

        session.clear_token().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let session = Session::new(MemoryStore::new());
        session.set_token("").unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_username_round_trip() {
        let session = Session::new(MemoryStore::new());
        session.set_username("ada").unwrap();
        assert_eq!(session.username().unwrap(), "ada");
        session.clear_username().unwrap();
        assert!(session.username().is_none());
    }
}
