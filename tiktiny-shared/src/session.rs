//! Client session: who is signed in, with which bearer token, against which API.
//!
//! A [`Session`] is either anonymous or fully authenticated. The user and the
//! token are only ever replaced together, through [`Session::set_auth`] and
//! [`Session::logout`], and both mutators persist through a
//! [`SessionStorage`] before touching memory.

use std::{cell::RefCell, collections::HashMap};

use thiserror::Error;

use crate::models::User;

/// Storage key holding the serialized [`User`].
pub const USER_KEY: &str = "user";

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write `{key}` to storage: {reason}")]
    Write { key: &'static str, reason: String },
    #[error("failed to serialize the session user: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable key/value storage that survives reloads.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns [`StorageError::Write`] when the backend rejects the value.
    fn set(&self, key: &'static str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// In-memory [`SessionStorage`], used when no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Credentials {
    user: User,
    token: String,
}

/// Current identity as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    credentials: Option<Credentials>,
    api_base: String,
}

impl Session {
    /// Anonymous session talking to `api_base`.
    pub fn anonymous(api_base: impl Into<String>) -> Self {
        Self {
            credentials: None,
            api_base: api_base.into(),
        }
    }

    /// Rehydrate from storage. Missing, partial, or corrupt entries yield an
    /// anonymous session.
    pub fn restore(storage: &dyn SessionStorage, api_base: impl Into<String>) -> Self {
        let user = storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<Option<User>>(&raw).ok())
            .flatten();
        let token = storage.get(TOKEN_KEY).filter(|token| !token.is_empty());

        let credentials = match (user, token) {
            (Some(user), Some(token)) => Some(Credentials { user, token }),
            _ => None,
        };

        Self {
            credentials,
            api_base: api_base.into(),
        }
    }

    /// Replace the signed-in identity.
    ///
    /// # Errors
    /// Returns a [`StorageError`] if either value cannot be persisted; memory
    /// is left untouched in that case and the previously stored user is put
    /// back.
    pub fn set_auth(
        &mut self,
        storage: &dyn SessionStorage,
        user: User,
        token: String,
    ) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&user)?;
        let previous_user = storage.get(USER_KEY);
        storage.set(USER_KEY, &serialized)?;
        if let Err(err) = storage.set(TOKEN_KEY, &token) {
            // Put the stored user back so it still pairs with the stored token.
            match previous_user {
                Some(previous) => {
                    if storage.set(USER_KEY, &previous).is_err() {
                        storage.remove(USER_KEY);
                    }
                }
                None => storage.remove(USER_KEY),
            }
            return Err(err);
        }
        self.credentials = Some(Credentials { user, token });
        Ok(())
    }

    /// Forget the signed-in identity, in storage and in memory.
    pub fn logout(&mut self, storage: &dyn SessionStorage) {
        storage.remove(USER_KEY);
        storage.remove(TOKEN_KEY);
        self.credentials = None;
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|credentials| &credentials.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.credentials
            .as_ref()
            .map(|credentials| credentials.token.as_str())
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    #[must_use]
    pub fn is_creator(&self) -> bool {
        self.user().is_some_and(User::is_creator)
    }
}
