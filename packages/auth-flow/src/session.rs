//! Process-wide auth session.
//!
//! Holds the authenticated user's profile for the lifetime of the process.
//! The store is a cheap-to-clone shared handle; wizards write it on
//! successful authentication and collaborators (navigation guard, profile
//! screens) read it. Reads are synchronous: a read immediately after a
//! transition observes the new state.

use std::sync::{Arc, PoisonError, RwLock};

use matchbook_client::UserProfile;
use tracing::info;

/// Shared holder of the current identity. Created empty at process start;
/// mutated only through `login` and `logout`.
#[derive(Clone, Default)]
pub struct AuthSession {
    inner: Arc<RwLock<Option<UserProfile>>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an identity, overwriting any previous one.
    pub fn login(&self, profile: UserProfile) {
        info!(user_id = profile.id, "session authenticated");
        // A poisoned lock still holds a valid Option; keep going.
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(profile);
    }

    /// Reset to anonymous. Always succeeds; calling it twice is the same
    /// as calling it once.
    pub fn logout(&self) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            info!("session cleared");
        }
    }

    /// The current identity, if any.
    pub fn current(&self) -> Option<UserProfile> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.is_some()
    }
}
