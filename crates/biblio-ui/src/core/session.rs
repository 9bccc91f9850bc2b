//! Client session state and its durable write-through store.
//!
//! # Design
//! - A session is authenticated only while both the identity and the bearer
//!   token are present; either half may exist alone as a transient state.
//! - Every mutation persists before the call returns, so memory and durable
//!   storage never disagree after a store operation.
//! - Storage is a trait seam: the browser backs it with `LocalStorage`,
//!   tests with an in-memory map.

use biblio_api_models::UserProfile;

/// Storage key holding the serialized identity record.
pub const IDENTITY_KEY: &str = "biblio.session.user";
/// Storage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "biblio.session.token";

/// Key-value persistence consumed by [`SessionStore`].
///
/// Write failures are the implementation's concern (the browser backend logs
/// and continues); reads of absent or unreadable keys yield `None`.
pub trait SessionStorage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`.
    fn set(&self, key: &str, value: &str);
    /// Erase `key`.
    fn remove(&self, key: &str);
}

/// The (identity, token) pair representing the current user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    identity: Option<UserProfile>,
    token: Option<String>,
}

impl Session {
    /// Whether this session holds usable credentials: an identity plus a
    /// non-empty token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some() && self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// The identity of the current user, when one is held.
    #[must_use]
    pub const fn identity(&self) -> Option<&UserProfile> {
        self.identity.as_ref()
    }

    /// The bearer token to attach to outbound requests, when one is held.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Write-through session store over a [`SessionStorage`] backend.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S> PartialEq for SessionStore<S> {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
    }
}

impl<S: SessionStorage + Default> Default for SessionStore<S> {
    fn default() -> Self {
        Self::restore(S::default())
    }
}

impl<S: SessionStorage> SessionStore<S> {
    /// Hydrate a store from durable storage.
    ///
    /// A stored identity that no longer parses is discarded and erased; the
    /// session then starts without it. Corrupt storage never propagates an
    /// error out of this constructor.
    pub fn restore(storage: S) -> Self {
        let identity = storage.get(IDENTITY_KEY).and_then(|raw| {
            match serde_json::from_str::<UserProfile>(&raw) {
                Ok(identity) => Some(identity),
                Err(_) => {
                    storage.remove(IDENTITY_KEY);
                    None
                }
            }
        });
        let token = storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        Self {
            storage,
            session: Session { identity, token },
        }
    }

    /// The current session state.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the current session is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Install a freshly authenticated session, replacing any prior one.
    ///
    /// Sets and persists both halves together; re-login always succeeds
    /// client-side.
    pub fn login_success(&mut self, identity: UserProfile, token: String) {
        if let Ok(raw) = serde_json::to_string(&identity) {
            self.storage.set(IDENTITY_KEY, &raw);
        }
        self.storage.set(TOKEN_KEY, &token);
        self.session.identity = Some(identity);
        self.session.token = Some(token);
    }

    /// Replace the identity record only, e.g. after a profile refresh.
    ///
    /// The token is left untouched: an identity may transiently exist
    /// without one, and the session stays unauthenticated until a token is
    /// installed via [`Self::login_success`].
    pub fn set_identity(&mut self, identity: UserProfile) {
        if let Ok(raw) = serde_json::to_string(&identity) {
            self.storage.set(IDENTITY_KEY, &raw);
        }
        self.session.identity = Some(identity);
    }

    /// Tear the session down: clear both halves and erase them from storage.
    ///
    /// Idempotent; invalidating an anonymous session is a no-op.
    pub fn invalidate(&mut self) {
        self.session = Session::default();
        self.storage.remove(IDENTITY_KEY);
        self.storage.remove(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::{IDENTITY_KEY, SessionStorage, SessionStore, TOKEN_KEY};
    use biblio_api_models::{Role, UserProfile};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

    impl SessionStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    fn reader(role: Role) -> UserProfile {
        UserProfile {
            id: 1,
            username: "reader".to_string(),
            name: None,
            email: None,
            phone: None,
            role,
            status: None,
        }
    }

    #[test]
    fn fresh_storage_starts_anonymous() {
        let store = SessionStore::restore(MemoryStorage::default());
        assert!(!store.is_authenticated());
        assert!(store.session().identity().is_none());
        assert!(store.session().token().is_none());
    }

    #[test]
    fn login_then_restore_round_trips() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::restore(storage.clone());
        store.login_success(reader(Role::User), "tok1".to_string());
        assert!(store.is_authenticated());

        // Simulate a reload: a fresh store over the same storage.
        let restored = SessionStore::restore(storage);
        assert_eq!(restored.session(), store.session());
        assert!(restored.is_authenticated());
    }

    #[test]
    fn invalidate_is_idempotent() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::restore(storage.clone());
        store.login_success(reader(Role::User), "tok1".to_string());

        store.invalidate();
        assert!(!store.is_authenticated());
        assert!(storage.get(TOKEN_KEY).is_none());

        store.invalidate();
        assert!(!store.is_authenticated());
        assert!(store.session().identity().is_none());
    }

    #[test]
    fn malformed_stored_identity_is_discarded() {
        let storage = MemoryStorage::default();
        storage.set(IDENTITY_KEY, "{not json");
        storage.set(TOKEN_KEY, "tok1");

        let store = SessionStore::restore(storage.clone());
        assert!(store.session().identity().is_none());
        assert!(!store.is_authenticated());
        assert!(storage.get(IDENTITY_KEY).is_none());
    }

    #[test]
    fn blank_stored_token_reads_as_absent() {
        let storage = MemoryStorage::default();
        storage.set(TOKEN_KEY, "   ");
        let store = SessionStore::restore(storage);
        assert!(store.session().token().is_none());
    }

    #[test]
    fn relogin_overwrites_prior_session() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::restore(storage);
        store.login_success(reader(Role::User), "tok1".to_string());
        store.login_success(reader(Role::Admin), "tok2".to_string());
        assert_eq!(store.session().token(), Some("tok2"));
        assert_eq!(
            store.session().identity().map(|identity| identity.role),
            Some(Role::Admin)
        );
    }

    #[test]
    fn set_identity_alone_leaves_session_unauthenticated() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::restore(storage.clone());
        store.set_identity(reader(Role::User));
        assert!(store.session().identity().is_some());
        assert!(!store.is_authenticated());
        // The refreshed identity is persisted even without a token.
        assert!(storage.get(IDENTITY_KEY).is_some());
    }
}
