mod page;
mod booking_modal;
mod reassign_modal;
mod detail_modal;

pub use page::render_scheduling_page;
