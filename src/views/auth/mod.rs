mod login_modal;
mod signup_modal;

pub use login_modal::render_login_modal;
pub use signup_modal::render_signup_modal;
