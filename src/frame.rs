use crate::constants::{GRATICULE_PROP, SPIN_ATTR, TEXTURE_ATTR};
use crate::events::{self, Wiring};
use crate::surfaces::ViewDom;
use crate::{dom, readout};
use instant::Instant;
use lunar_core::{ViewController, ViewKind};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct FrameContext {
    pub wiring: Wiring,
    pub last_instant: Instant,
    /// View whose container is currently visible.
    pub shown: Option<ViewKind>,
}

impl FrameContext {
    pub fn new(wiring: Wiring) -> Self {
        Self {
            wiring,
            last_instant: Instant::now(),
            shown: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let navigated = {
            let mut set = self.wiring.views.borrow_mut();
            let navigated = set.pump_navigation();
            set.active_mut().on_frame(dt);
            navigated
        };
        if let Some(kind) = navigated {
            push_route(kind);
        }

        // pan handlers outlive their gesture when the view switched mid-drag
        {
            let mut drag = self.wiring.drag.borrow_mut();
            if drag.is_attached() && !self.wiring.views.borrow().active().is_dragging() {
                drag.release();
            }
            drag.collect();
        }

        let active = self.wiring.views.borrow().active_kind();
        if self.shown != Some(active) {
            self.wiring.surfaces.show_only(active);
            self.shown = Some(active);
            events::resize_active(&self.wiring);
        }

        let set = self.wiring.views.borrow();
        if let Some(view) = self.wiring.surfaces.get(active) {
            present(view, set.active());
        }
    }
}

/// Mirror controller state onto the DOM.
fn present(view: &ViewDom, controller: &ViewController) {
    if let Some(el) = &view.readout {
        readout::render(el, controller.current_coordinate());
    }
    if let Some(img) = &view.image {
        dom::set_image_src(img, controller.current_resource());
        dom::set_css_transform(img, &controller.current_transform().to_css());
    }
    if let Some(canvas) = &view.canvas {
        let resource = controller.current_resource();
        if canvas.get_attribute(TEXTURE_ATTR).as_deref() != Some(resource) {
            _ = canvas.set_attribute(TEXTURE_ATTR, resource);
        }
        _ = canvas.set_attribute(SPIN_ATTR, &format!("{:.4}", controller.spin_radians()));
    }
}

/// Hand the globe's reference lines to the renderer. They never change, so
/// this runs once at startup rather than per frame.
pub fn publish_graticule(w: &Wiring) {
    let Some(canvas) = w.surfaces.get(ViewKind::Globe).and_then(|v| v.canvas.as_ref()) else {
        return;
    };
    let set = w.views.borrow();
    let Some(graticule) = set.get(ViewKind::Globe).graticule() else {
        return;
    };
    dom::set_polylines(canvas, GRATICULE_PROP, &graticule.flat_polylines());
    log::info!(
        "[globe] graticule {} lines, {} vertices",
        graticule.parallels.len() + graticule.meridians.len(),
        graticule.vertex_count()
    );
}

fn push_route(kind: ViewKind) {
    let Some(window) = web::window() else {
        return;
    };
    let current = window.location().pathname().ok();
    if current.as_deref() == Some(kind.route()) {
        return;
    }
    match window.history() {
        Ok(h) => {
            if let Err(e) = h.push_state_with_url(&JsValue::NULL, "", Some(kind.route())) {
                log::warn!("[nav] pushState {}: {:?}", kind.route(), e);
            }
        }
        Err(e) => log::warn!("[nav] no history: {:?}", e),
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
