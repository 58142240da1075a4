//! Capability-typed session handling.
//!
//! The hosted auth provider itself stays external; this module holds the
//! session value it produces and pushes changes to subscribers. Guest mode is
//! a local synthetic identity the app can fall back to without credentials.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Owner id recorded for plants created in guest mode.
pub const GUEST_OWNER_ID: &str = "guest";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Session {
    /// No identity at all; storage is unreachable.
    #[default]
    Anonymous,
    /// Local synthetic identity, no credentials behind it.
    Guest,
    #[serde(rename_all = "camelCase")]
    Authenticated { user_id: String, email: String },
}

impl Session {
    /// The id plants are keyed by in storage. Anonymous sessions have none
    /// and therefore no storage access.
    pub fn owner_id(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Guest => Some(GUEST_OWNER_ID),
            Session::Authenticated { user_id, .. } => Some(user_id),
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Session::Guest)
    }
}

/// Holds the current session and broadcasts every change to subscribers.
pub struct SessionStore {
    tx: watch::Sender<Session>,
}

impl SessionStore {
    pub fn new(initial: Session) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Subscribe to session changes. The receiver observes the value at
    /// subscription time plus every later [`SessionStore::set`].
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Replace the session, as pushed by the auth collaborator or a local
    /// guest/sign-out action.
    pub fn set(&self, session: Session) {
        self.tx.send_replace(session);
    }

    pub fn sign_in_as_guest(&self) {
        self.set(Session::Guest);
    }

    pub fn sign_out(&self) {
        self.set(Session::Anonymous);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Session::Anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_ids_by_capability() {
        assert_eq!(Session::Anonymous.owner_id(), None);
        assert_eq!(Session::Guest.owner_id(), Some(GUEST_OWNER_ID));
        let user = Session::Authenticated {
            user_id: "u-42".into(),
            email: "fern@example.com".into(),
        };
        assert_eq!(user.owner_id(), Some("u-42"));
    }

    #[tokio::test]
    async fn subscribers_observe_session_changes() {
        let store = SessionStore::default();
        let mut rx = store.subscribe();
        assert_eq!(*rx.borrow(), Session::Anonymous);

        store.sign_in_as_guest();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Session::Guest);

        store.sign_out();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Session::Anonymous);
    }
}
