// ============================================================================
// SESSION STORE - Authenticated identity and token
// ============================================================================
// Pure state container: it never talks to the network. The login flow and
// the API client are the only callers of set_auth / clear_auth.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{Role, User};
use crate::state::ChangeNotifier;
use crate::utils::storage::{load_json, save_json, KeyValueStore};

const TOKEN_KEY: &str = "clinic.auth.token";
const USER_KEY: &str = "clinic.auth.user";

/// `is_authenticated` is true iff `token` is present
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Reads and writes the session in local storage
#[derive(Clone)]
pub struct SessionPersistence {
    store: Rc<dyn KeyValueStore>,
}

impl SessionPersistence {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save(&self, session: &Session) {
        let result = match (&session.token, &session.user) {
            (Some(token), user) => self.store.set(TOKEN_KEY, token).and_then(|_| match user {
                Some(user) => save_json(self.store.as_ref(), USER_KEY, user),
                None => self.store.remove(USER_KEY),
            }),
            (None, _) => return self.clear(),
        };
        if let Err(e) = result {
            log::error!("❌ [SESSION] Could not persist session: {}", e);
        }
    }

    /// A corrupt user entry is dropped and treated as signed out
    pub fn load(&self) -> (Option<User>, Option<String>) {
        let token = match self.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("⚠️ [SESSION] Could not read stored token: {}", e);
                None
            }
        };
        let user = match load_json::<User>(self.store.as_ref(), USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("⚠️ [SESSION] Discarding stored user: {}", e);
                self.clear();
                return (None, None);
            }
        };
        (user, token)
    }

    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.remove(key) {
                log::error!("❌ [SESSION] Could not remove {}: {}", key, e);
            }
        }
    }
}

#[derive(Clone)]
pub struct SessionStore {
    session: Rc<RefCell<Session>>,
    persistence: Option<SessionPersistence>,
    notifier: ChangeNotifier,
}

impl SessionStore {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session::default())),
            persistence: None,
            notifier,
        }
    }

    /// Every transition except `restore_auth` is written through to storage
    pub fn with_persistence(notifier: ChangeNotifier, persistence: SessionPersistence) -> Self {
        Self { persistence: Some(persistence), ..Self::new(notifier) }
    }

    pub fn set_auth(&self, user: User, token: String) {
        log::info!("🔐 [SESSION] Signed in as {} ({})", user.email, user.role.as_str());
        self.replace(Session { user: Some(user), is_authenticated: true, token: Some(token) }, true);
    }

    pub fn clear_auth(&self) {
        log::info!("👋 [SESSION] Session cleared");
        self.replace(Session::default(), true);
    }

    /// Patch the identity, the token is left alone
    pub fn update_user(&self, user: User) {
        let mut session = self.snapshot();
        session.user = Some(user);
        self.replace(session, true);
    }

    /// Initialise from what was persisted at startup
    pub fn restore_auth(&self, user: Option<User>, token: Option<String>) {
        let is_authenticated = token.is_some();
        if is_authenticated {
            log::info!("💾 [SESSION] Session restored from storage");
        }
        self.replace(Session { user, token, is_authenticated }, false);
    }

    /// Restore from the attached persistence, if any
    pub fn restore_from_storage(&self) {
        if let Some(persistence) = &self.persistence {
            let (user, token) = persistence.load();
            self.restore_auth(user, token);
        }
    }

    fn replace(&self, session: Session, persist: bool) {
        if persist {
            if let Some(persistence) = &self.persistence {
                persistence.save(&session);
            }
        }
        *self.session.borrow_mut() = session;
        self.notifier.notify();
    }

    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.session.borrow().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.borrow().token.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.borrow().role()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    fn nurse() -> User {
        User {
            id: 7,
            full_name: "Tran Thi Lan".into(),
            email: "lan@clinic.vn".into(),
            role: Role::Nurse,
            avatar: None,
            phone: None,
        }
    }

    #[test]
    fn restore_sets_authentication_from_token_presence() {
        let store = SessionStore::new(ChangeNotifier::new());
        store.restore_auth(None, None);
        assert!(!store.is_authenticated());

        store.restore_auth(Some(nurse()), Some("t".into()));
        assert!(store.is_authenticated());
        assert_eq!(store.role(), Some(Role::Nurse));
    }

    #[test]
    fn update_user_keeps_token() {
        let store = SessionStore::new(ChangeNotifier::new());
        store.set_auth(nurse(), "abc".into());

        let mut renamed = nurse();
        renamed.full_name = "Tran Lan".into();
        store.update_user(renamed);

        assert_eq!(store.token().as_deref(), Some("abc"));
        assert_eq!(store.user().map(|u| u.full_name), Some("Tran Lan".to_string()));
        assert!(store.is_authenticated());
    }

    #[test]
    fn clear_auth_resets_to_anonymous() {
        let store = SessionStore::new(ChangeNotifier::new());
        store.set_auth(nurse(), "abc".into());
        store.clear_auth();
        assert_eq!(store.snapshot(), Session::default());
    }

    #[test]
    fn persistence_round_trips_and_clears() {
        let memory = MemoryStorage::new();
        let persistence = SessionPersistence::new(Rc::new(memory.clone()));
        let store = SessionStore::with_persistence(ChangeNotifier::new(), persistence.clone());

        store.set_auth(nurse(), "abc".into());
        assert_eq!(persistence.load(), (Some(nurse()), Some("abc".to_string())));

        let restored = SessionStore::with_persistence(ChangeNotifier::new(), persistence.clone());
        restored.restore_from_storage();
        assert!(restored.is_authenticated());

        store.clear_auth();
        assert!(memory.is_empty());
    }

    #[test]
    fn corrupt_stored_user_restores_anonymous() {
        let memory = MemoryStorage::new();
        memory.set(TOKEN_KEY, "abc").unwrap();
        memory.set(USER_KEY, "{broken").unwrap();
        let persistence = SessionPersistence::new(Rc::new(memory.clone()));

        assert_eq!(persistence.load(), (None, None));
        assert!(memory.is_empty());
    }

    #[test]
    fn transitions_notify_subscribers() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(std::cell::Cell::new(0));
        let counter = hits.clone();
        notifier.subscribe(move || counter.set(counter.get() + 1));

        let store = SessionStore::new(notifier);
        store.set_auth(nurse(), "abc".into());
        store.clear_auth();
        assert_eq!(hits.get(), 2);
    }
}
