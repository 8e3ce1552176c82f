// Transient success / error messages

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::error::AppError;
use crate::state::ChangeNotifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

type PushHook = Rc<dyn Fn(u64)>;

#[derive(Clone)]
pub struct Toasts {
    items: Rc<RefCell<Vec<Toast>>>,
    next_id: Rc<Cell<u64>>,
    on_push: Rc<RefCell<Option<PushHook>>>,
    notifier: ChangeNotifier,
}

impl Toasts {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(1)),
            on_push: Rc::new(RefCell::new(None)),
            notifier,
        }
    }

    /// Called with the id of every new toast (the app schedules auto-dismiss)
    pub fn set_on_push<F>(&self, hook: F)
    where
        F: Fn(u64) + 'static,
    {
        *self.on_push.borrow_mut() = Some(Rc::new(hook));
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.items.borrow_mut().push(Toast { id, kind, message: message.into() });

        let hook = self.on_push.borrow().clone();
        if let Some(hook) = hook {
            hook(id);
        }
        self.notifier.notify();
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    /// Error toast with the error's user-facing text
    pub fn app_error(&self, context: &str, error: &AppError) -> u64 {
        log::error!("❌ [{}] {}", context, error);
        self.error(error.user_message())
    }

    pub fn dismiss(&self, id: u64) {
        let removed = {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|toast| toast.id != id);
            items.len() != before
        };
        if removed {
            self.notifier.notify();
        }
    }

    pub fn list(&self) -> Vec<Toast> {
        self.items.borrow().clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.items.borrow().last().cloned()
    }
}
