//! Demo sign-in session.
//!
//! The store holds at most one signed-in user and changes only through [`SessionStore::login`]
//! and [`SessionStore::logout`]. Passwords are accepted and ignored; accounts are matched on
//! email alone.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use super::catalog::JobCatalog;
use super::domain::User;
use super::notify::{Notice, Notifier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Please enter an email address")]
    EmailRequired,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("session storage unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("saved session is not valid JSON: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Where the signed-in user survives a restart of the presentation layer.
pub trait SessionPersistence: Send + Sync {
    fn load(&self) -> Result<Option<User>, PersistenceError>;
    fn save(&self, user: &User) -> Result<(), PersistenceError>;
    fn clear(&self) -> Result<(), PersistenceError>;
}

/// Keeps the serialized user in memory, like tab-scoped storage.
#[derive(Debug, Default, Clone)]
pub struct MemorySessionPersistence {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemorySessionPersistence {
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }

    pub fn payload(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl SessionPersistence for MemorySessionPersistence {
    fn load(&self) -> Result<Option<User>, PersistenceError> {
        let guard = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match guard.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, user: &User) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(user)?;
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        Ok(())
    }
}

/// Stores the signed-in user as JSON in a single file.
#[derive(Debug, Clone)]
pub struct FileSessionPersistence {
    path: PathBuf,
}

impl FileSessionPersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionPersistence for FileSessionPersistence {
    fn load(&self) -> Result<Option<User>, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, user: &User) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string_pretty(user)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Session state machine backed by a persistence slot and a notifier.
pub struct SessionStore<P, N> {
    state: SessionState,
    persistence: Arc<P>,
    notifier: Arc<N>,
}

impl<P, N> SessionStore<P, N>
where
    P: SessionPersistence,
    N: Notifier,
{
    /// Start from the saved user if there is one. Unreadable saves start anonymous.
    pub fn restore(persistence: Arc<P>, notifier: Arc<N>) -> Self {
        let state = match persistence.load() {
            Ok(Some(user)) => {
                info!(email = %user.email, role = user.role.as_str(), "restored saved session");
                SessionState::Authenticated(user)
            }
            Ok(None) => SessionState::Anonymous,
            Err(err) => {
                warn!(error = %err, "ignoring unreadable saved session");
                SessionState::Anonymous
            }
        };

        Self {
            state,
            persistence,
            notifier,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Sign in as the account registered under `email`. The password is not checked.
    pub fn login(
        &mut self,
        directory: &JobCatalog,
        email: &str,
        _password: &str,
    ) -> Result<User, LoginError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(self.reject(LoginError::EmailRequired));
        }

        let Some(user) = directory.user_by_email(email).cloned() else {
            warn!(%email, "sign-in rejected: unknown email");
            return Err(self.reject(LoginError::InvalidCredentials));
        };

        if let Err(err) = self.persistence.save(&user) {
            warn!(error = %err, "signed in without persisting the session");
        }
        info!(email = %user.email, role = user.role.as_str(), "signed in");
        self.notifier.notify(Notice::success("Login successful"));
        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.state.user() {
            info!(email = %user.email, "signed out");
        }
        self.state = SessionState::Anonymous;
        if let Err(err) = self.persistence.clear() {
            warn!(error = %err, "failed to clear saved session");
        }
        self.notifier.notify(Notice::success("Logged out successfully"));
    }

    fn reject(&self, error: LoginError) -> LoginError {
        self.notifier.notify(Notice::error(error.to_string()));
        error
    }
}
