// Host-side tests for view controllers: zoom/pan gating, overlays and view switching.

use glam::Vec2;
use lunar_core::*;
use std::time::Duration;

const VIEWPORT: Vec2 = Vec2::new(800.0, 400.0);

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn subpixel() -> ViewController {
    init_logs();
    let mut v = ViewController::new(ViewConfig::subpixel());
    v.on_resize(VIEWPORT);
    v
}

#[test]
fn zoom_in_five_times_clamps_at_three() {
    let mut v = subpixel();
    for _ in 0..5 {
        v.on_zoom_in();
    }
    assert_eq!(v.zoom(), ZOOM_MAX);
    assert_eq!(v.current_transform().scale, 3.0);
}

#[test]
fn zoom_out_at_floor_stays_at_one() {
    let mut v = subpixel();
    assert!(!v.on_zoom_out());
    assert_eq!(v.zoom(), 1.0);
}

#[test]
fn drag_at_base_zoom_is_inert() {
    let mut v = subpixel();
    assert!(!v.on_pointer_down(Vec2::new(100.0, 100.0)));
    v.on_pointer_move(Vec2::new(300.0, 250.0));
    assert!(!v.is_dragging());
    assert!(v.current_transform().is_identity());
}

#[test]
fn move_before_down_and_up_without_down_are_noops() {
    let mut v = subpixel();
    v.on_zoom_in();
    v.on_pointer_move(Vec2::new(50.0, 50.0));
    v.on_pointer_up();
    assert_eq!(v.current_transform().translate, Vec2::ZERO);
}

#[test]
fn drag_pans_zoomed_image() {
    let mut v = subpixel();
    v.on_zoom_in();
    assert!(v.on_pointer_down(Vec2::new(400.0, 200.0)));
    v.on_pointer_move(Vec2::new(500.0, 200.0));
    v.on_pointer_up();
    let t = v.current_transform();
    assert_eq!(t.scale, 2.0);
    assert_eq!(t.translate, Vec2::new(100.0, 0.0));
    // after panning right by 100px, the centre of the container shows image x=350
    v.on_pointer_move(VIEWPORT * 0.5);
    let g = v.current_coordinate().unwrap();
    assert!((g.longitude + 22.5).abs() < 1e-3, "{g:?}");
}

#[test]
fn planar_coordinate_accounts_for_zoom() {
    let mut v = subpixel();
    v.on_pointer_move(Vec2::new(200.0, 100.0));
    let flat = v.current_coordinate().unwrap();
    assert!((flat.longitude + 90.0).abs() < 1e-3);
    assert!((flat.latitude + 45.0).abs() < 1e-3);

    v.on_zoom_in();
    let zoomed = v.current_coordinate().unwrap();
    assert!((zoomed.longitude + 45.0).abs() < 1e-3, "{zoomed:?}");
    assert!((zoomed.latitude + 22.5).abs() < 1e-3, "{zoomed:?}");
}

#[test]
fn planar_pointer_off_image_has_no_coordinate() {
    let mut v = subpixel();
    v.on_pointer_move(Vec2::new(900.0, 10.0));
    assert!(v.current_coordinate().is_none());
}

#[test]
fn planar_without_size_has_no_coordinate() {
    init_logs();
    let mut v = ViewController::new(ViewConfig::planar());
    v.on_pointer_move(Vec2::new(10.0, 10.0));
    assert!(v.current_coordinate().is_none());
}

#[test]
fn planar_measured_before_image_load_recovers_on_next_move() {
    init_logs();
    let mut v = ViewController::new(ViewConfig::planar());
    // container measured while the image was still zero-height
    v.on_resize(Vec2::new(800.0, 0.0));
    v.on_pointer_move(Vec2::new(400.0, 200.0));
    assert!(v.current_coordinate().is_none());

    // the image has loaded; the next move re-measures first
    assert!(v.sync_viewport(VIEWPORT));
    v.on_pointer_move(Vec2::new(400.0, 200.0));
    let c = v.current_coordinate().expect("coordinate after re-measure");
    assert!(c.latitude.abs() < 1e-3 && c.longitude.abs() < 1e-3, "{c:?}");
    assert!(!v.sync_viewport(VIEWPORT));
}

#[test]
fn globe_texture_failure_falls_back_to_default_once() {
    init_logs();
    let mut v = ViewController::new(ViewConfig::globe());
    assert_ne!(v.current_resource(), DEFAULT_TEXTURE);
    assert_eq!(v.on_resource_load_failure(), DEFAULT_TEXTURE);
    // a failing default stays put rather than cycling
    assert_eq!(v.on_resource_load_failure(), DEFAULT_TEXTURE);
}

#[test]
fn unknown_overlay_and_load_failure_share_default() {
    let mut v = ViewController::new(ViewConfig::planar());
    let unknown = v.on_select_overlay("unknown-key").to_string();
    v.on_select_overlay("FeO");
    let fallback = v.on_resource_load_failure().to_string();
    assert_eq!(unknown, fallback);
    assert_eq!(fallback, DEFAULT_TEXTURE);
}

#[test]
fn every_overlay_key_resolves_distinctly_and_stably() {
    for table in [
        OverlayTable::globe(),
        OverlayTable::oxides(),
        OverlayTable::elements(),
    ] {
        let first: Vec<String> = table
            .entries()
            .iter()
            .map(|e| table.resolve(&e.key).to_string())
            .collect();
        let second: Vec<String> = table
            .entries()
            .iter()
            .map(|e| table.resolve(&e.key).to_string())
            .collect();
        assert_eq!(first, second);
        let mut unique = first.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), first.len());
        assert!(!first.iter().any(|r| r == table.default_resource()));
    }
}

#[test]
fn globe_starts_on_first_ratio_map() {
    let v = ViewController::new(ViewConfig::globe());
    assert_eq!(v.current_resource(), OverlayTable::globe().resolve("Al/Mg"));
}

#[test]
fn globe_hover_clears_when_pointer_leaves_silhouette() {
    init_logs();
    let mut v = ViewController::new(ViewConfig::globe());
    v.on_resize(Vec2::new(800.0, 800.0));
    v.on_pointer_move(Vec2::new(400.0, 400.0));
    assert!(v.current_coordinate().is_some());
    v.on_pointer_move(Vec2::new(5.0, 5.0));
    assert!(v.current_coordinate().is_none());
}

#[test]
fn globe_spin_moves_surface_under_still_pointer() {
    init_logs();
    let mut v = ViewController::new(ViewConfig::globe());
    v.on_resize(Vec2::new(800.0, 800.0));
    v.on_pointer_move(Vec2::new(400.0, 400.0));
    let before = v.current_coordinate().unwrap();
    v.on_frame(Duration::from_secs(1));
    let after = v.current_coordinate().unwrap();
    let expected = -AUTO_ROTATE_RAD_PER_SEC.to_degrees();
    assert!(before.longitude.abs() < 1e-3);
    assert!((after.longitude - expected).abs() < 0.05, "{after:?}");
}

#[test]
fn switching_away_mid_drag_drops_the_gesture() {
    init_logs();
    let mut set = ViewSet::new(ViewKind::SubPixel);
    set.on_resize(VIEWPORT);
    {
        let v = set.active_mut();
        v.on_zoom_in();
        assert!(v.on_pointer_down(Vec2::new(10.0, 10.0)));
        v.on_pointer_move(Vec2::new(20.0, 20.0));
        assert!(v.current_coordinate().is_some());
    }
    set.active_mut().request_navigation(NavRequest::Back);
    assert_eq!(set.pump_navigation(), Some(ViewKind::Globe));

    let left = set.get(ViewKind::SubPixel);
    assert!(!left.is_dragging());
    assert!(left.current_coordinate().is_none());

    set.switch_to(ViewKind::SubPixel);
    let back = set.active_mut();
    assert!(!back.is_dragging());
    back.on_pointer_move(Vec2::new(60.0, 60.0));
    // no gesture, so the offset from before is unchanged
    assert_eq!(back.current_transform().translate, Vec2::new(10.0, 10.0));
}

#[test]
fn inactive_views_ignore_pointer_events() {
    init_logs();
    let mut set = ViewSet::new(ViewKind::Globe);
    set.on_resize(VIEWPORT);
    let planar = set.get_mut(ViewKind::Planar);
    planar.on_pointer_move(Vec2::new(10.0, 10.0));
    assert!(planar.current_coordinate().is_none());
}
