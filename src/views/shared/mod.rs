pub mod forms;
pub mod modal;
pub mod feedback;

pub use forms::*;
pub use modal::render_modal;
pub use feedback::*;
