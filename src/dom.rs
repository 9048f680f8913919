use crate::constants::HIDDEN_CLASS;
use gloo::events::EventListener;
use lunar_core::OverlayEntry;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Hidden means the `hidden` class plus an inline `display: none`, so the
/// page needs no stylesheet rule. Other inline style is left untouched.
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("display", "none");
    }
}

pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().remove_property("display");
    }
}

pub fn is_hidden(el: &web::Element) -> bool {
    if el.class_list().contains(HIDDEN_CLASS) {
        return true;
    }
    el.dyn_ref::<web::HtmlElement>()
        .and_then(|html| html.style().get_property_value("display").ok())
        .is_some_and(|d| d == "none")
}

/// Page-lifetime click handler on `el`.
#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    EventListener::new(el, "click", move |_| handler()).forget();
}

/// All descendants of `root` matching `selector`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn fill_overlay_select(select: &web::HtmlSelectElement, entries: &[OverlayEntry]) {
    select.set_inner_html("");
    for e in entries {
        match web::HtmlOptionElement::new_with_text_and_value(&e.label, &e.key) {
            Ok(opt) => {
                _ = select.append_child(&opt);
            }
            Err(err) => log::error!("[dom] option {}: {:?}", e.key, err),
        }
    }
}

#[inline]
pub fn set_css_transform(el: &web::HtmlElement, css: &str) {
    _ = el.style().set_property("transform", css);
}

/// Change an image source only when it differs, so the load/error cycle
/// is not restarted every frame.
#[inline]
pub fn set_image_src(img: &web::HtmlImageElement, src: &str) {
    if img.get_attribute("src").as_deref() != Some(src) {
        img.set_src(src);
    }
}

/// Expose polylines on `target` as an array of `Float32Array`s under `prop`.
pub fn set_polylines(target: &web::Element, prop: &str, lines: &[Vec<f32>]) {
    let out = js_sys::Array::new_with_length(lines.len() as u32);
    for (i, line) in lines.iter().enumerate() {
        out.set(i as u32, js_sys::Float32Array::from(line.as_slice()).into());
    }
    if let Err(e) = js_sys::Reflect::set(target, &JsValue::from_str(prop), &out) {
        log::warn!("[dom] set {prop}: {:?}", e);
    }
}
