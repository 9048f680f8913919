use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Subscribe to a pointer event; other event types are ignored.
pub fn pointer(
    target: &web::EventTarget,
    event: &'static str,
    mut handler: impl FnMut(&web::PointerEvent) + 'static,
) -> EventListener {
    EventListener::new(target, event, move |ev: &web::Event| {
        if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
            handler(pe);
        }
    })
}

/// Window-level move/up handlers that exist only while a pan is in progress.
///
/// A listener must not be dropped from inside its own callback, so releasing
/// only parks them; the frame loop drops parked listeners via [`DragListeners::collect`].
/// Handlers stay attached until then and must tolerate firing after the pan ended.
#[derive(Default)]
pub struct DragListeners {
    active: Vec<EventListener>,
    retired: Vec<EventListener>,
}

impl DragListeners {
    pub fn is_attached(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn attach(&mut self, listeners: Vec<EventListener>) {
        self.release();
        self.active = listeners;
    }

    pub fn release(&mut self) {
        self.retired.append(&mut self.active);
    }

    /// Drop parked listeners. Called from outside any of their callbacks.
    pub fn collect(&mut self) {
        self.retired.clear();
    }
}
