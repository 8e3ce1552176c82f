// ============================================================================
// STATE MODULE - Rc<RefCell> state objects plus change notifications
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod auth_modal_state;
pub mod toast_state;
pub mod notification_state;
pub mod app_state;

pub use reactivity::ChangeNotifier;
pub use session_state::{Session, SessionPersistence, SessionStore};
pub use auth_modal_state::AuthModalCoordinator;
pub use toast_state::{ToastKind, Toasts};
pub use notification_state::NotificationFeed;
pub use app_state::{AppState, Backends};
