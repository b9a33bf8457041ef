//! The session store: owns the current user and keeps durable storage in
//! sync with every change.

use tracing::{info, warn};

use skybook_core::{Profile, UserSession};

use crate::storage::LocalStorage;
use crate::StoreError;

/// Storage key holding the serialized session. Absence means no active
/// session.
pub const SESSION_KEY: &str = "currentUser";

/// Storage key holding the count of accounts ever created
pub const ACCOUNT_COUNT_KEY: &str = "accountCount";

const DEFAULT_NAME: &str = "User";

pub struct SessionStore {
    storage: LocalStorage,
    current: Option<UserSession>,
    accounts_created: u64,
}

impl SessionStore {
    /// Open the store and re-hydrate state persisted by an earlier run.
    /// An unreadable or corrupted document is treated as absent, never as
    /// a failure.
    pub fn open(storage: LocalStorage) -> Self {
        let current = match storage.get::<UserSession>(SESSION_KEY) {
            Ok(session) => session,
            Err(e) => {
                warn!("Discarding unreadable session: {}", e);
                None
            }
        };

        let accounts_created = match storage.get::<u64>(ACCOUNT_COUNT_KEY) {
            Ok(count) => count.unwrap_or(0),
            Err(e) => {
                warn!("Discarding unreadable account counter: {}", e);
                0
            }
        };

        Self {
            storage,
            current,
            accounts_created,
        }
    }

    /// The single source of truth for "is a user logged in"
    pub fn current(&self) -> Option<&UserSession> {
        self.current.as_ref()
    }

    /// Replace the session. The change is persisted before it becomes
    /// visible: the document is written on `Some`, deleted on `None`.
    pub fn set_session(&mut self, session: Option<UserSession>) -> Result<(), StoreError> {
        match &session {
            Some(user) => self.storage.put(SESSION_KEY, user)?,
            None => self.storage.remove(SESSION_KEY)?,
        }
        self.current = session;
        Ok(())
    }

    /// Create a session for a validated profile. Account ids are
    /// sequential over the life of the storage directory; there is no
    /// uniqueness check and no password involved.
    pub fn login(&mut self, profile: Profile) -> Result<UserSession, StoreError> {
        self.accounts_created += 1;
        self.storage.put(ACCOUNT_COUNT_KEY, &self.accounts_created)?;

        let session = UserSession {
            id: self.accounts_created,
            name: profile.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            email: profile.email,
        };

        self.set_session(Some(session.clone()))?;
        info!(user_id = session.id, "Session created");
        Ok(session)
    }

    /// Drop the current session and clear it from storage
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.set_session(None)
    }
}
