// ============================================================================
// AUTH MODAL COORDINATOR - Which auth modal (if any) is on screen
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::state::ChangeNotifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthModal {
    #[default]
    None,
    Login,
    Signup,
}

/// Flag view of the coordinator; at most one flag is ever set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthModalVisibility {
    pub login_open: bool,
    pub signup_open: bool,
}

#[derive(Clone)]
pub struct AuthModalCoordinator {
    current: Rc<Cell<AuthModal>>,
    notifier: ChangeNotifier,
}

impl AuthModalCoordinator {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self { current: Rc::new(Cell::new(AuthModal::None)), notifier }
    }

    pub fn open_login_modal(&self) {
        self.set(AuthModal::Login);
    }

    pub fn open_signup_modal(&self) {
        self.set(AuthModal::Signup);
    }

    pub fn close_modals(&self) {
        self.set(AuthModal::None);
    }

    fn set(&self, modal: AuthModal) {
        if self.current.replace(modal) != modal {
            self.notifier.notify();
        }
    }

    pub fn is_login_modal_open(&self) -> bool {
        self.current.get() == AuthModal::Login
    }

    pub fn is_signup_modal_open(&self) -> bool {
        self.current.get() == AuthModal::Signup
    }

    pub fn visibility(&self) -> AuthModalVisibility {
        AuthModalVisibility {
            login_open: self.is_login_modal_open(),
            signup_open: self.is_signup_modal_open(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_modal_closes_the_other() {
        let modals = AuthModalCoordinator::new(ChangeNotifier::new());

        modals.open_signup_modal();
        modals.open_login_modal();
        assert!(modals.is_login_modal_open());
        assert!(!modals.is_signup_modal_open());

        modals.open_signup_modal();
        assert_eq!(modals.visibility(), AuthModalVisibility { login_open: false, signup_open: true });

        modals.close_modals();
        assert_eq!(modals.visibility(), AuthModalVisibility::default());
    }

    #[test]
    fn only_real_changes_trigger_a_repaint() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        notifier.subscribe(move || counter.set(counter.get() + 1));

        let modals = AuthModalCoordinator::new(notifier);
        modals.close_modals();
        modals.open_login_modal();
        modals.open_login_modal();
        assert_eq!(hits.get(), 1);
    }
}
