use std::fmt;

use crate::db::SharedStorage;
use crate::models::{Identity, SessionStatus};

use super::StoreError;

/// Storage key holding the serialized [`Identity`].
pub const SESSION_KEY: &str = "portfolio_user";

/// The one accepted username/password pair.
///
/// Compared in plaintext. Anyone who can read the configuration can sign in,
/// so this gates navigation only. Real access control needs a server-side
/// check against a proper credential store.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("admin", "stark2024")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Tracks at most one signed-in [`Identity`].
///
/// A stored identity is adopted at load without checking it against the
/// credentials and never expires.
pub struct SessionStore {
    storage: SharedStorage,
    credentials: Credentials,
    identity: Option<Identity>,
}

impl SessionStore {
    pub fn load(storage: SharedStorage, credentials: Credentials) -> Result<Self, StoreError> {
        let identity = match storage.get_item(SESSION_KEY)? {
            Some(raw) => Some(serde_json::from_str(&raw).map_err(|error| {
                StoreError::Corrupt {
                    key: SESSION_KEY,
                    error,
                }
            })?),
            None => None,
        };

        Ok(Self {
            storage,
            credentials,
            identity,
        })
    }

    /// Sign in. Returns `false` on a credential mismatch, leaving any existing
    /// session in place. The caller cannot tell which half was wrong.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool, StoreError> {
        if !self.credentials.matches(username, password) {
            tracing::warn!("Rejected login attempt");
            return Ok(false);
        }

        let identity = Identity {
            id: "1".to_string(),
            username: username.to_string(),
            is_admin: true,
        };
        let raw = serde_json::to_string(&identity).map_err(|error| StoreError::Serialize {
            key: SESSION_KEY,
            error,
        })?;
        self.storage.set_item(SESSION_KEY, &raw)?;
        self.identity = Some(identity);

        tracing::info!("Admin signed in as {}", username);
        Ok(true)
    }

    /// Sign out. The stored entry goes first, so a failed removal leaves the
    /// session signed in rather than half cleared.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.storage.remove_item(SESSION_KEY)?;
        self.identity = None;
        tracing::info!("Signed out");
        Ok(())
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(|i| i.is_admin)
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            is_authenticated: self.is_authenticated(),
            is_admin: self.is_admin(),
            user: self.identity.clone(),
        }
    }
}
