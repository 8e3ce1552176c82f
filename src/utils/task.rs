// ============================================================================
// TASK SCOPE - Async work tied to the lifetime of a view
// ============================================================================
// Every fetch started by a page goes through the page's scope. Leaving the
// page (or signing out) cancels the scope and aborts whatever is still in
// flight, so a late response never writes into a view that is gone.
// ============================================================================

use futures::future::{abortable, AbortHandle};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct TaskScope {
    inner: Rc<ScopeInner>,
}

#[derive(Default)]
struct ScopeInner {
    handles: RefCell<HashMap<u64, AbortHandle>>,
    next_id: Cell<u64>,
    cancelled: Cell<bool>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `future` so it resolves to `None` once the scope is cancelled
    pub fn guard<F>(&self, future: F) -> impl Future<Output = Option<F::Output>>
    where
        F: Future,
    {
        let (task, handle) = abortable(future);
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        if self.inner.cancelled.get() {
            handle.abort();
        } else {
            self.inner.handles.borrow_mut().insert(id, handle);
        }

        let inner = self.inner.clone();
        async move {
            let result = task.await.ok();
            inner.handles.borrow_mut().remove(&id);
            result
        }
    }

    /// Run `future` on the browser event loop under this scope
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let guarded = self.guard(future);
        wasm_bindgen_futures::spawn_local(async move {
            if guarded.await.is_none() {
                log::debug!("⏹️ [TASK] Task cancelled before completion");
            }
        });
    }

    /// Abort everything in flight; later `guard`/`spawn` calls never run
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let handles: Vec<AbortHandle> = self.inner.handles.borrow_mut().drain().map(|(_, h)| h).collect();
        if !handles.is_empty() {
            log::info!("⏹️ [TASK] Cancelling {} pending task(s)", handles.len());
        }
        for handle in handles {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    pub fn pending(&self) -> usize {
        self.inner.handles.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    #[test]
    fn guarded_future_completes_while_scope_is_live() {
        let scope = TaskScope::new();
        let value = block_on(scope.guard(async { 42 }));
        assert_eq!(value, Some(42));
        assert_eq!(scope.pending(), 0);
    }

    #[test]
    fn cancel_aborts_in_flight_work() {
        let scope = TaskScope::new();
        let (tx, rx) = oneshot::channel::<u32>();
        let written = Rc::new(Cell::new(false));

        let flag = written.clone();
        let task = scope.guard(async move {
            let _ = rx.await;
            flag.set(true);
        });
        assert_eq!(scope.pending(), 1);

        scope.cancel();
        let _ = tx.send(1);
        assert_eq!(block_on(task), None);
        assert!(!written.get());
        assert_eq!(scope.pending(), 0);
    }

    #[test]
    fn work_guarded_after_cancel_never_runs() {
        let scope = TaskScope::new();
        scope.cancel();
        assert!(scope.is_cancelled());
        assert_eq!(block_on(scope.guard(async { "late" })), None);
    }
}
