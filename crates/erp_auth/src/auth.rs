use crate::permission::{allowed_actions, has_access};
use crate::schema::UserDirectory;
use erp_error::AuthError;
use erp_storage::ClientStorage;
use erp_types::{Action, User, AUTH_USER_KEY};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Holds the logged-in user in durable storage under `auth_user`
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn ClientStorage>,
    directory: Arc<UserDirectory>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn ClientStorage>, directory: Arc<UserDirectory>) -> Self {
        Self { storage, directory }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Log a user in.
    ///
    /// Both inputs are trimmed, the username match is exact and case-sensitive.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - the stored user (no credentials) on success
    /// * `Ok(None)` - unknown user or wrong password; storage is untouched
    pub fn login(&self, username: &str, password: &str) -> Result<Option<User>, AuthError> {
        let username = username.trim();
        let password = password.trim();

        let stored = match self.directory.find(username) {
            Some(stored) if stored.verify(password) => stored,
            _ => {
                warn!("Failed login attempt for {}", username);
                return Ok(None);
            }
        };

        let user = stored.user.clone();
        let serialized = serde_json::to_string(&user).map_err(|_| AuthError::SerializationError)?;
        self.storage.set_item(AUTH_USER_KEY, &serialized)?;

        info!("User {} logged in", user.username);
        Ok(Some(user))
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.storage.remove_item(AUTH_USER_KEY)?;
        info!("User logged out");
        Ok(())
    }

    /// The logged-in user, or `None` when absent or unreadable
    pub fn current_user(&self) -> Option<User> {
        let raw = match self.storage.get_item(AUTH_USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Session storage unavailable: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Discarding unreadable session: {}", e);
                None
            }
        }
    }

    /// Whether the current user may perform `action` on `module`. False when nobody is logged in.
    pub fn check_access(&self, module: &str, action: Action) -> bool {
        let allowed = self
            .current_user()
            .map(|user| has_access(&user, module, action))
            .unwrap_or(false);

        debug!("check_access {}.{} -> {}", module, action, allowed);
        allowed
    }

    pub fn allowed_actions(&self, module: &str) -> Vec<Action> {
        self.current_user()
            .map(|user| allowed_actions(&user, module))
            .unwrap_or_default()
    }
}
