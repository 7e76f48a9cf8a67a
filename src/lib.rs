//! Interaction layer for the marketing landing page.
//!
//! Wires up sticky-navigation styling, the mobile menu toggle,
//! scroll-triggered reveal animations, smooth anchor scrolling and
//! staggered card transition delays over the page's static markup. All
//! state lives in the DOM as class markers; this crate only reacts to
//! browser events. See [`PageController`] for the lifecycle.

use std::cell::RefCell;

use log::{error, info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod anchors;
mod cards;
mod config;
mod controller;
mod dom;
pub mod nav;
mod reveal;

pub use config::ControllerOptions;
pub use controller::PageController;

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = RefCell::new(None);
}

fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        error!("no document; nothing to wire up");
        return;
    };
    match PageController::attach(&document, ControllerOptions::default()) {
        Ok(controller) => {
            CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
            info!("page interactions attached");
        }
        Err(err) => error!("failed to attach page interactions: {:?}", err),
    }
}

/// Detach the controller installed by [`start`], removing every listener
/// it registered. A no-op when nothing is attached.
#[wasm_bindgen]
pub fn detach() {
    CONTROLLER.with(|slot| {
        if let Some(controller) = slot.borrow_mut().take() {
            controller.detach();
        }
    });
}

/// Module entry point: attaches the controller once the document's
/// structure is available, immediately if it already is.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };
    if document.ready_state() == "loading" {
        let once = Closure::once(boot);
        document
            .add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref())?;
        once.forget();
    } else {
        boot();
    }
    Ok(())
}
