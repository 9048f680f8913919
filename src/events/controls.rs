use super::Wiring;
use crate::constants::{NAV_ATTR, TEXTURE_ERROR_EVENT, ZOOM_IN_CLASS, ZOOM_OUT_CLASS};
use crate::{dom, input};
use gloo::events::EventListener;
use lunar_core::ViewKind;
use web_sys as web;

pub fn wire_controls(w: &Wiring) {
    for view in w.surfaces.iter() {
        wire_overlay_select(w, view.kind, view.select.as_ref());
        wire_zoom_buttons(w, view.kind, &view.root);
        wire_nav_buttons(w, view.kind, &view.root);
        if let Some(img) = &view.image {
            wire_load_failure(w, view.kind, img, "error");
            wire_image_load(w, img);
        }
        // The globe texture is fetched by the external renderer, not an <img>.
        // It reports failures by dispatching TEXTURE_ERROR_EVENT on the canvas;
        // the view then falls back to the base texture once, same as planar images.
        if let Some(canvas) = &view.canvas {
            wire_load_failure(w, view.kind, canvas, TEXTURE_ERROR_EVENT);
        }
    }
    wire_window(w);
}

/// Measure the active surface and hand the size to its controller.
pub fn resize_active(w: &Wiring) {
    let mut set = w.views.borrow_mut();
    let kind = set.active_kind();
    let Some(view) = w.surfaces.get(kind) else {
        return;
    };
    let size = input::element_size(&view.surface);
    if let Some(canvas) = &view.canvas {
        canvas.set_width(size.x as u32);
        canvas.set_height(size.y as u32);
    }
    set.get_mut(kind).on_resize(size);
    log::debug!("[resize] {} {}x{}", kind.route(), size.x, size.y);
}

fn wire_overlay_select(w: &Wiring, kind: ViewKind, select: Option<&web::HtmlSelectElement>) {
    let Some(select) = select else {
        return;
    };
    {
        let set = w.views.borrow();
        dom::fill_overlay_select(select, set.get(kind).overlay_entries());
    }
    let views = w.views.clone();
    let select_c = select.clone();
    EventListener::new(select, "change", move |_| {
        let key = select_c.value();
        let mut set = views.borrow_mut();
        let resource = set.get_mut(kind).on_select_overlay(&key);
        log::info!("[overlay] {} -> {}", key, resource);
    })
    .forget();
}

fn wire_zoom_buttons(w: &Wiring, kind: ViewKind, root: &web::Element) {
    let offered = w.views.borrow().get(kind).zoom_controls();
    for (class, enabled, zoom_in) in [
        (ZOOM_IN_CLASS, offered.zoom_in, true),
        (ZOOM_OUT_CLASS, offered.zoom_out, false),
    ] {
        for button in dom::query_all(root, &format!(".{class}")) {
            if !enabled {
                dom::hide(&button);
                continue;
            }
            let views = w.views.clone();
            dom::add_click_listener(&button, move || {
                let mut set = views.borrow_mut();
                let view = set.get_mut(kind);
                if zoom_in {
                    view.on_zoom_in();
                } else {
                    view.on_zoom_out();
                }
            });
        }
    }
}

fn wire_nav_buttons(w: &Wiring, kind: ViewKind, root: &web::Element) {
    for button in dom::query_all(root, &format!("[{NAV_ATTR}]")) {
        let value = button.get_attribute(NAV_ATTR).unwrap_or_default();
        let Some(request) = input::parse_nav(&value) else {
            log::warn!("[nav] unrecognised {NAV_ATTR}=\"{value}\"");
            dom::hide(&button);
            continue;
        };
        if !w.views.borrow().get(kind).navigation_targets().contains(&request) {
            dom::hide(&button);
            continue;
        }
        let views = w.views.clone();
        dom::add_click_listener(&button, move || {
            views.borrow_mut().get_mut(kind).request_navigation(request);
        });
    }
}

fn wire_load_failure(w: &Wiring, kind: ViewKind, target: &web::EventTarget, event: &'static str) {
    let views = w.views.clone();
    EventListener::new(target, event, move |_| {
        let mut set = views.borrow_mut();
        let view = set.get_mut(kind);
        let before = view.current_resource().to_owned();
        let after = view.on_resource_load_failure();
        if after == before {
            // the fallback itself is what failed; retrying would loop
            log::error!("[overlay] default image {} failed to load", after);
        } else {
            log::warn!("[overlay] {} failed, falling back to {}", before, after);
        }
    })
    .forget();
}

/// A loaded image changes the container's height; measure again.
fn wire_image_load(w: &Wiring, img: &web::HtmlImageElement) {
    let wl = w.clone();
    EventListener::new(img, "load", move |_| resize_active(&wl)).forget();
}

fn wire_window(w: &Wiring) {
    let Some(window) = web::window() else {
        return;
    };

    let wr = w.clone();
    EventListener::new(&window, "resize", move |_| resize_active(&wr)).forget();

    // browser back/forward: follow the URL without pushing a new entry
    let wp = w.clone();
    EventListener::new(&window, "popstate", move |_| {
        let Some(path) = web::window().and_then(|win| win.location().pathname().ok()) else {
            return;
        };
        match ViewKind::from_route(&path) {
            Ok(kind) => {
                wp.drag.borrow_mut().release();
                wp.views.borrow_mut().follow_route(kind);
            }
            Err(e) => log::warn!("[nav] popstate: {e}"),
        }
    })
    .forget();
}
