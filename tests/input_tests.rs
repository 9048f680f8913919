// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use lunar_core::{NavRequest, ViewKind};

#[test]
fn client_to_local_subtracts_rect_origin() {
    let local = client_to_local(Vec2::new(250.0, 130.0), Vec2::new(50.0, 30.0));
    assert_eq!(local, Vec2::new(200.0, 100.0));
}

#[test]
fn client_to_local_can_go_negative_outside_the_element() {
    let local = client_to_local(Vec2::new(10.0, 10.0), Vec2::new(50.0, 30.0));
    assert!(local.x < 0.0 && local.y < 0.0);
}

#[test]
fn rect_size_keeps_fractional_css_pixels() {
    assert_eq!(rect_size(800.5, 400.25), Vec2::new(800.5, 400.25));
}

#[test]
fn rect_size_of_collapsed_or_broken_box_is_zero() {
    assert_eq!(rect_size(800.0, 0.0), Vec2::new(800.0, 0.0));
    assert_eq!(rect_size(-3.0, f64::NAN), Vec2::ZERO);
    assert_eq!(rect_size(f64::INFINITY, 10.0), Vec2::new(0.0, 10.0));
}

#[test]
fn parse_nav_accepts_back_in_any_case() {
    assert_eq!(parse_nav("back"), Some(NavRequest::Back));
    assert_eq!(parse_nav(" Back "), Some(NavRequest::Back));
}

#[test]
fn parse_nav_maps_routes_to_views() {
    assert_eq!(parse_nav("/"), Some(NavRequest::Goto(ViewKind::Globe)));
    assert_eq!(parse_nav("/2d"), Some(NavRequest::Goto(ViewKind::Planar)));
    assert_eq!(
        parse_nav("/subpixel"),
        Some(NavRequest::Goto(ViewKind::SubPixel))
    );
}

#[test]
fn parse_nav_rejects_unknown_values() {
    assert_eq!(parse_nav("/3d"), None);
    assert_eq!(parse_nav(""), None);
}
