//! Persisted user session
//!
//! The session lives in a key-value store behind a trait, and all access goes
//! through an explicit [`SessionContext`] handed to the caller — there is no
//! process-wide session singleton. Malformed stored data is discarded and the
//! user treated as unauthenticated; it is never an error.

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

/// Store key holding the serialized [`UserIdentity`]
pub const USER_KEY: &str = "fleet_sim_user";
/// Store key holding the auth token
pub const TOKEN_KEY: &str = "fleet_sim_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Driver,
    Customer,
    Passenger,
}

/// The serialized identity stored alongside the auth token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

/// Boundary contract for the persisted session store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory store, the default backing for tests and the CLI
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Explicit session state wrapper around a key-value store
pub struct SessionContext<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a successful login
    pub fn login(&mut self, user: &UserIdentity, token: &str) {
        let serialized = serde_json::to_string(user).expect("serialize user identity");
        self.store.set(USER_KEY, serialized);
        self.store.set(TOKEN_KEY, token.to_string());
    }

    /// Clear the stored identity and token
    pub fn logout(&mut self) {
        self.store.remove(USER_KEY);
        self.store.remove(TOKEN_KEY);
    }

    /// Read the stored identity. Malformed data is discarded and the caller
    /// sees an unauthenticated session.
    pub fn current_user(&mut self) -> Option<UserIdentity> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("discarding malformed stored session: {err}");
                self.store.remove(USER_KEY);
                None
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    pub fn is_authenticated(&mut self) -> bool {
        self.current_user().is_some()
    }
}
