// ============================================================================
// FORM MODAL - Shared open / edit / validate / submit machine
// ============================================================================
// Fields reset on open. Validation messages stay hidden until the first
// submit attempt. One request at a time; while it is in flight the modal
// cannot be closed. Success closes the modal and hands the result back,
// failure leaves it open with the user's input intact.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use crate::error::{AppError, AppResult, FieldErrors};
use crate::state::{ChangeNotifier, Toasts};

/// Raw input of one form; `validate` normalizes it into the request payload
pub trait FormFields: Clone + Default {
    type Payload;

    fn validate(&self) -> Result<Self::Payload, FieldErrors>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModalState<F> {
    pub open: bool,
    pub fields: F,
    pub show_validation: bool,
    pub submitting: bool,
}

#[derive(Clone)]
pub struct FormModal<F: FormFields> {
    state: Rc<RefCell<FormModalState<F>>>,
    notifier: ChangeNotifier,
}

impl<F: FormFields> FormModal<F> {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self { state: Rc::new(RefCell::new(FormModalState::default())), notifier }
    }

    pub fn open(&self) {
        self.open_with(F::default());
    }

    /// Open pre-filled (profile edit)
    pub fn open_with(&self, fields: F) {
        *self.state.borrow_mut() = FormModalState { open: true, fields, show_validation: false, submitting: false };
        self.notifier.notify();
    }

    /// Refused while a submission is in flight
    pub fn close(&self) -> bool {
        {
            let mut state = self.state.borrow_mut();
            if state.submitting {
                return false;
            }
            if !state.open {
                return true;
            }
            state.open = false;
        }
        self.notifier.notify();
        true
    }

    /// Field edits do not repaint; the inputs already show what was typed
    pub fn update(&self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.state.borrow_mut().fields);
    }

    /// Same as `update` but repaints (selects that drive other inputs)
    pub fn update_and_refresh(&self, edit: impl FnOnce(&mut F)) {
        self.update(edit);
        self.notifier.notify();
    }

    pub fn snapshot(&self) -> FormModalState<F> {
        self.state.borrow().clone()
    }

    pub fn fields(&self) -> F {
        self.state.borrow().fields.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().submitting
    }

    pub fn shows_validation(&self) -> bool {
        self.state.borrow().show_validation
    }

    /// Errors to render inline; empty until the first submit attempt
    pub fn visible_errors(&self) -> FieldErrors {
        let state = self.state.borrow();
        if !state.show_validation {
            return FieldErrors::new();
        }
        state.fields.validate().err().unwrap_or_default()
    }

    /// Validate, send, and settle the modal. `success` builds the toast text
    /// from the result. Returns the result on success.
    pub async fn submit<T, Fut, S>(
        &self,
        toasts: &Toasts,
        context: &str,
        success: S,
        send: impl FnOnce(F::Payload) -> Fut,
    ) -> Option<T>
    where
        Fut: Future<Output = AppResult<T>>,
        S: FnOnce(&T) -> String,
    {
        let validated = {
            let mut state = self.state.borrow_mut();
            if state.submitting || !state.open {
                return None;
            }
            state.show_validation = true;
            state.fields.validate()
        };

        let payload = match validated {
            Ok(payload) => payload,
            Err(errors) => {
                log::debug!("📝 [{}] Submission blocked: {}", context, errors);
                self.notifier.notify();
                return None;
            }
        };

        self.state.borrow_mut().submitting = true;
        self.notifier.notify();

        let result = send(payload).await;
        self.state.borrow_mut().submitting = false;

        match result {
            Ok(value) => {
                self.state.borrow_mut().open = false;
                toasts.success(success(&value));
                self.notifier.notify();
                Some(value)
            }
            Err(AppError::Validation(errors)) => {
                log::warn!("⚠️ [{}] Rejected: {}", context, errors);
                toasts.error(AppError::Validation(errors).user_message());
                self.notifier.notify();
                None
            }
            Err(e) => {
                toasts.app_error(context, &e);
                self.notifier.notify();
                None
            }
        }
    }
}
