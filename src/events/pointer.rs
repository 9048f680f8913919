use super::Wiring;
use crate::input;
use crate::listener::{self, DragListeners};
use gloo::events::EventListener;
use lunar_core::{ViewKind, ViewSet};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_pointer_handlers(w: &Wiring) {
    for view in w.surfaces.iter() {
        wire_pointermove(w, view.kind, &view.surface);
        wire_pointerdown(w, view.kind, &view.surface);
        wire_pointerleave(w, view.kind, &view.surface);
    }
}

fn wire_pointermove(w: &Wiring, kind: ViewKind, surface: &web::Element) {
    let views = w.views.clone();
    let surface_m = surface.clone();
    listener::pointer(surface, "pointermove", move |ev| {
        let mut set = views.borrow_mut();
        let view = set.get_mut(kind);
        // while panning, the window-level handler owns pointer motion
        if view.is_dragging() {
            return;
        }
        let (pos, size) = input::pointer_on(ev, &surface_m);
        view.sync_viewport(size);
        view.on_pointer_move(pos);
    })
    .forget();
}

fn wire_pointerdown(w: &Wiring, kind: ViewKind, surface: &web::Element) {
    let views = w.views.clone();
    let drag = w.drag.clone();
    let surface_d = surface.clone();
    listener::pointer(surface, "pointerdown", move |ev| {
        let (pos, size) = input::pointer_on(ev, &surface_d);
        let opened = {
            let mut set = views.borrow_mut();
            let view = set.get_mut(kind);
            view.sync_viewport(size);
            view.on_pointer_down(pos)
        };
        if opened {
            let scoped = drag_listeners(&views, &drag, kind, &surface_d);
            drag.borrow_mut().attach(scoped);
            log::info!("[mouse] begin pan on {}", kind.route());
        }
        // keep the browser from starting a native image drag
        ev.prevent_default();
    })
    .forget();
}

fn wire_pointerleave(w: &Wiring, kind: ViewKind, surface: &web::Element) {
    let views = w.views.clone();
    listener::pointer(surface, "pointerleave", move |_| {
        views.borrow_mut().get_mut(kind).on_pointer_leave();
    })
    .forget();
}

/// Window-level move/up/cancel handlers for one pan gesture.
fn drag_listeners(
    views: &Rc<RefCell<ViewSet>>,
    drag: &Rc<RefCell<DragListeners>>,
    kind: ViewKind,
    surface: &web::Element,
) -> Vec<EventListener> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(3);

    let views_m = views.clone();
    let surface_m = surface.clone();
    out.push(listener::pointer(&window, "pointermove", move |ev| {
        let mut set = views_m.borrow_mut();
        let view = set.get_mut(kind);
        if view.is_dragging() {
            let (pos, size) = input::pointer_on(ev, &surface_m);
            view.sync_viewport(size);
            view.on_pointer_move(pos);
        }
    }));

    for event in ["pointerup", "pointercancel"] {
        let views_u = views.clone();
        let drag_u = drag.clone();
        out.push(listener::pointer(&window, event, move |_| {
            let mut set = views_u.borrow_mut();
            let view = set.get_mut(kind);
            if !view.is_dragging() {
                return;
            }
            view.on_pointer_up();
            drag_u.borrow_mut().release();
            log::info!("[mouse] end pan on {}", kind.route());
        }));
    }
    out
}
