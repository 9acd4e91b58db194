//! Mock session engine.
//!
//! Not a real authentication system: there is no password, no server round
//! trip, and login always succeeds for any structurally valid email. The
//! only async behavior in the storefront lives here, as a simulated
//! network delay.
//!
//! Cancellation: `login` and `register` touch no state until the delay has
//! elapsed, so dropping the returned future (the caller navigated away)
//! discards the attempt entirely. There is no retry.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use mercato_core::{Email, EmailError};

use crate::storage::{self, KeyValueStore, keys};

/// Errors that can occur in session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The supplied email failed structural validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// The active user, at most one process-wide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: Email,
    /// Display name: the email's local part on login, or the name given
    /// at registration.
    pub name: String,
}

/// The persisted session engine.
pub struct SessionStore {
    user: Option<SessionUser>,
    store: Arc<dyn KeyValueStore>,
    delay: Duration,
}

impl SessionStore {
    /// Load any persisted session from the store.
    ///
    /// `delay` is the simulated network latency applied to `login` and
    /// `register`.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>, delay: Duration) -> Self {
        let user = storage::load_json_or_default(store.as_ref(), keys::USER);
        Self { user, store, delay }
    }

    /// The active user, if any.
    #[must_use]
    pub fn current(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Whether a session is active. Views use this as their gate; the
    /// engine itself enforces nothing.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Log in with an email, deriving the display name from its local
    /// part. Always succeeds after the simulated delay.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidEmail`] if the email is structurally
    /// invalid.
    pub async fn login(&mut self, email: &str) -> Result<SessionUser, SessionError> {
        let email = Email::parse(email)?;

        // Simulated server round trip; the only suspension point.
        tokio::time::sleep(self.delay).await;

        let user = SessionUser {
            name: email.local_part().to_owned(),
            email,
        };
        self.activate(user.clone());
        Ok(user)
    }

    /// Register with an email and an explicit display name. Always
    /// succeeds after the simulated delay.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidEmail`] if the email is structurally
    /// invalid.
    pub async fn register(&mut self, email: &str, name: &str) -> Result<SessionUser, SessionError> {
        let email = Email::parse(email)?;

        tokio::time::sleep(self.delay).await;

        let user = SessionUser {
            email,
            name: name.to_owned(),
        };
        self.activate(user.clone());
        Ok(user)
    }

    /// End the session, clearing memory and the persisted entry.
    pub fn logout(&mut self) {
        tracing::info!("Logging out");
        self.user = None;
        if let Err(e) = self.store.remove(keys::USER) {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }
    }

    fn activate(&mut self, user: SessionUser) {
        tracing::info!(email = %user.email, "Session activated");
        self.user = Some(user);
        // Persisted as `Option` so the snapshot shape matches rehydration.
        storage::persist_json(self.store.as_ref(), keys::USER, &self.user);
    }
}
