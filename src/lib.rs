#![cfg(target_arch = "wasm32")]
//! Browser front-end: binds the lunar-core view controllers to the page.
use lunar_core::{ViewKind, ViewSet};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod listener;
mod readout;
mod surfaces;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lunar-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn initial_view(window: &web::Window) -> ViewKind {
    let path = window.location().pathname().unwrap_or_default();
    match ViewKind::from_route(&path) {
        Ok(kind) => kind,
        Err(e) => {
            log::warn!("{e}; starting on the globe");
            ViewKind::Globe
        }
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let surfaces = surfaces::Surfaces::find(&document)?;
    let initial = initial_view(&window);
    log::info!("[view] initial {}", initial.route());

    let wiring = events::Wiring {
        views: Rc::new(RefCell::new(ViewSet::new(initial))),
        surfaces: Rc::new(surfaces),
        drag: Rc::new(RefCell::new(listener::DragListeners::default())),
    };

    events::wire_controls(&wiring);
    events::wire_pointer_handlers(&wiring);
    frame::publish_graticule(&wiring);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(wiring)));
    frame::start_loop(frame_ctx);
    Ok(())
}
