//! Session establishment after a successful registration
//!
//! The controller never touches ambient globals. It receives a
//! [`SessionContext`] at construction, which bundles the key/value
//! [`SessionStore`] with the application's [`LoginState`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Storage key for the authentication token
pub const AUTH_TOKEN_KEY: &str = "auth-token";
/// Storage key for the display name
pub const NAME_KEY: &str = "name";
/// Storage key for the canonical email
pub const EMAIL_KEY: &str = "email";

/// Key/value store scoped to the browsing session.
///
/// Writes cannot fail from the caller's point of view; implementations log
/// and drop errors from the underlying storage.
pub trait SessionStore {
    fn set(&self, key: &str, value: &str);
}

/// Application-wide "is the user logged in" flag.
pub trait LoginState {
    fn set_logged_in(&self, logged_in: bool);
}

/// Credentials established by a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub auth_token: String,
    pub display_name: String,
    pub email: String,
    pub is_logged_in: bool,
}

/// Session store plus login flag, handed to the controller by reference.
#[derive(Debug, Clone)]
pub struct SessionContext<S, L> {
    store: S,
    login: L,
}

impl<S: SessionStore, L: LoginState> SessionContext<S, L> {
    pub fn new(store: S, login: L) -> Self {
        Self { store, login }
    }

    /// Write the session keys, then raise the login flag.
    ///
    /// Effects are ordered and not transactional.
    pub fn establish(&self, session: &Session) {
        self.store.set(AUTH_TOKEN_KEY, &session.auth_token);
        self.store.set(NAME_KEY, &session.display_name);
        self.store.set(EMAIL_KEY, &session.email);
        self.login.set_logged_in(session.is_logged_in);
    }
}

/// In-memory session store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

/// Login flag backed by an atomic, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct LoginFlag(Arc<AtomicBool>);

impl LoginFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl LoginState for LoginFlag {
    fn set_logged_in(&self, logged_in: bool) {
        self.0.store(logged_in, Ordering::SeqCst);
    }
}
