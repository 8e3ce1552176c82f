// ============================================================================
// CLINIC PORTAL - Rust/wasm MVVM client
// ============================================================================
// - Views: functions that build DOM from view model snapshots
// - ViewModels: page state and UI logic
// - Services: backend communication only
// - State: Rc<RefCell> stores plus a change notifier
// - Models: wire types shared with the backend
// ============================================================================

mod config;
mod error;
mod models;
mod services;
mod state;
mod router;
mod viewmodels;
mod views;
mod dom;
mod utils;
mod app;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 [APP] Clinic portal starting ({})", CONFIG.environment);

    let mut app = App::new()?;
    let router = app.router();
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Back / forward; registered once here
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
            router.sync_from_location();
        }) as Box<dyn FnMut(web_sys::PopStateEvent)>);
        win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Full re-render of `#app`. A call made while a render is running is skipped;
/// the change that caused it schedules another one.
pub fn rerender_app() {
    APP.with(|cell| match cell.try_borrow_mut() {
        Ok(mut app) => match app.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Render failed: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App not initialised"),
        },
        Err(_) => log::debug!("⏭️ [RERENDER] Render already in progress"),
    });
}
