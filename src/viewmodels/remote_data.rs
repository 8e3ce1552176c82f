// ============================================================================
// REMOTE DATA - Loading state of one backend-fed value
// ============================================================================

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use crate::error::AppResult;
use crate::state::{ChangeNotifier, Toasts};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RemoteData<T> {
    #[default]
    NotAsked,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> RemoteData<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            RemoteData::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteData::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A `RemoteData` cell that only accepts the answer to its latest request
#[derive(Clone)]
pub struct Resource<T> {
    data: Rc<RefCell<RemoteData<T>>>,
    ticket: Rc<Cell<u64>>,
    notifier: ChangeNotifier,
}

impl<T: Clone> Resource<T> {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            data: Rc::new(RefCell::new(RemoteData::NotAsked)),
            ticket: Rc::new(Cell::new(0)),
            notifier,
        }
    }

    pub fn get(&self) -> RemoteData<T> {
        self.data.borrow().clone()
    }

    pub fn value(&self) -> Option<T> {
        self.data.borrow().value().cloned()
    }

    pub fn set(&self, data: RemoteData<T>) {
        *self.data.borrow_mut() = data;
        self.notifier.notify();
    }

    /// Await `request` and store its outcome; failures are toasted.
    /// Returns false when the request failed or was superseded.
    pub async fn load<Fut>(&self, toasts: &Toasts, context: &str, request: Fut) -> bool
    where
        Fut: Future<Output = AppResult<T>>,
    {
        let ticket = self.ticket.get() + 1;
        self.ticket.set(ticket);
        self.set(RemoteData::Loading);

        let result = request.await;
        if self.ticket.get() != ticket {
            log::debug!("🔁 [{}] Dropping superseded response", context);
            return false;
        }

        match result {
            Ok(value) => {
                self.set(RemoteData::Loaded(value));
                true
            }
            Err(e) => {
                toasts.app_error(context, &e);
                self.set(RemoteData::Failed(e.user_message()));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join;

    #[test]
    fn failure_is_stored_and_toasted() {
        let notifier = ChangeNotifier::new();
        let toasts = Toasts::new(notifier.clone());
        let resource: Resource<u32> = Resource::new(notifier);

        let ok = block_on(resource.load(&toasts, "TEST", async { Err(AppError::Business("Nope".into())) }));
        assert!(!ok);
        assert_eq!(resource.get(), RemoteData::Failed("Nope".into()));
        assert_eq!(toasts.list().len(), 1);
    }

    #[test]
    fn superseded_response_is_dropped() {
        let notifier = ChangeNotifier::new();
        let toasts = Toasts::new(notifier.clone());
        let resource: Resource<&'static str> = Resource::new(notifier);
        let (slow_tx, slow_rx) = oneshot::channel::<&'static str>();

        let slow = resource.load(&toasts, "TEST", async move { Ok(slow_rx.await.unwrap_or("cancelled")) });
        let fast = async {
            let loaded = resource.load(&toasts, "TEST", async { Ok("fresh") }).await;
            let _ = slow_tx.send("stale");
            loaded
        };

        let (slow_applied, fast_applied) = block_on(join(slow, fast));
        assert!(!slow_applied);
        assert!(fast_applied);
        assert_eq!(resource.value(), Some("fresh"));
    }
}
