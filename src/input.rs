use glam::Vec2;
use lunar_core::{NavRequest, ViewKind};
use web_sys as web;

#[inline]
pub fn client_to_local(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}

/// Extent of a bounding box; NaN or negative sides count as zero.
#[inline]
pub fn rect_size(width: f64, height: f64) -> Vec2 {
    let side = |v: f64| if v.is_finite() && v > 0.0 { v as f32 } else { 0.0 };
    Vec2::new(side(width), side(height))
}

/// Pointer position relative to the top-left of `el`, and the size of `el`.
///
/// Both come from the same bounding box, so the position is always measured
/// against the extent it is divided by. Surfaces are never CSS-transformed
/// themselves (planar images move inside them), so the box is the layout box.
#[inline]
pub fn pointer_on(ev: &web::MouseEvent, el: &web::Element) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    let local = client_to_local(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    );
    (local, rect_size(rect.width(), rect.height()))
}

/// Size of `el` in CSS pixels, from the same box [`pointer_on`] uses.
#[inline]
pub fn element_size(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    rect_size(rect.width(), rect.height())
}

/// Interpret a `data-nav` value: `back`, or the route of a view.
pub fn parse_nav(value: &str) -> Option<NavRequest> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if value.eq_ignore_ascii_case("back") {
        return Some(NavRequest::Back);
    }
    ViewKind::from_route(value).ok().map(NavRequest::Goto)
}
