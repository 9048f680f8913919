//! Per-view composition of projection, picking, zoom/pan and overlay state.
//!
//! Front-ends forward raw events here and read back the coordinate,
//! transform and resource to draw. Navigation is only ever requested;
//! the router that owns the views decides what happens.

use crate::camera::Camera;
use crate::constants::{
    AUTO_ROTATE_RAD_PER_SEC, GRATICULE_LINES, GRATICULE_SEGMENTS, MOON_RADIUS,
};
use crate::error::{LunarError, Result};
use crate::geo::{planar_to_geo, GeoCoordinate};
use crate::graticule::Graticule;
use crate::overlay::{OverlayEntry, OverlaySelector, OverlayTable};
use crate::picking::{pick_oriented, SphereModel};
use crate::transform::{DragMode, Transform2D, ViewTransform2D};
use glam::{Quat, Vec2};
use smallvec::SmallVec;
use std::f32::consts::TAU;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Globe,
    Planar,
    SubPixel,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Globe, ViewKind::Planar, ViewKind::SubPixel];

    pub fn route(self) -> &'static str {
        match self {
            ViewKind::Globe => "/",
            ViewKind::Planar => "/2d",
            ViewKind::SubPixel => "/subpixel",
        }
    }

    pub fn from_route(route: &str) -> Result<Self> {
        let trimmed = route.trim_end_matches('/');
        match trimmed {
            "" => Ok(ViewKind::Globe),
            "/2d" => Ok(ViewKind::Planar),
            "/subpixel" => Ok(ViewKind::SubPixel),
            _ => Err(LunarError::UnknownRoute(route.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Globe => "Lunar 3D",
            ViewKind::Planar => "Lunar 2D",
            ViewKind::SubPixel => "Sub-Pixel",
        }
    }
}

/// A navigation the controller asks its router to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavRequest {
    Goto(ViewKind),
    Back,
}

/// Which zoom buttons a planar view offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZoomControls {
    pub zoom_in: bool,
    pub zoom_out: bool,
}

#[derive(Clone, Debug)]
pub struct ViewConfig {
    pub kind: ViewKind,
    pub overlays: OverlayTable,
    pub initial_overlay: Option<&'static str>,
    pub zoom: ZoomControls,
    pub drag_mode: DragMode,
    pub sphere_radius: f32,
    pub auto_rotate_rad_per_sec: f32,
    pub navigation: Vec<NavRequest>,
}

impl ViewConfig {
    pub fn globe() -> Self {
        Self {
            kind: ViewKind::Globe,
            overlays: OverlayTable::globe(),
            initial_overlay: Some("Al/Mg"),
            zoom: ZoomControls::default(),
            drag_mode: DragMode::default(),
            sphere_radius: MOON_RADIUS,
            auto_rotate_rad_per_sec: AUTO_ROTATE_RAD_PER_SEC,
            navigation: vec![
                NavRequest::Goto(ViewKind::Planar),
                NavRequest::Goto(ViewKind::SubPixel),
            ],
        }
    }

    pub fn planar() -> Self {
        Self {
            kind: ViewKind::Planar,
            overlays: OverlayTable::oxides(),
            initial_overlay: None,
            zoom: ZoomControls {
                zoom_in: true,
                zoom_out: false,
            },
            drag_mode: DragMode::default(),
            sphere_radius: MOON_RADIUS,
            auto_rotate_rad_per_sec: 0.0,
            navigation: vec![NavRequest::Back],
        }
    }

    pub fn subpixel() -> Self {
        Self {
            kind: ViewKind::SubPixel,
            overlays: OverlayTable::elements(),
            zoom: ZoomControls {
                zoom_in: true,
                zoom_out: true,
            },
            ..Self::planar()
        }
    }
}

#[derive(Clone, Debug)]
enum Surface {
    Sphere {
        camera: Camera,
        sphere: SphereModel,
        spin: f32,
        graticule: Graticule,
    },
    Image {
        transform: ViewTransform2D,
    },
}

#[derive(Clone, Debug)]
pub struct ViewController {
    kind: ViewKind,
    zoom_controls: ZoomControls,
    navigation: Vec<NavRequest>,
    auto_rotate_rad_per_sec: f32,
    overlay: OverlaySelector,
    surface: Surface,
    viewport: Vec2,
    pointer: Option<Vec2>,
    coordinate: Option<GeoCoordinate>,
    pending_nav: SmallVec<[NavRequest; 4]>,
    active: bool,
}

impl ViewController {
    pub fn new(config: ViewConfig) -> Self {
        let surface = match config.kind {
            ViewKind::Globe => Surface::Sphere {
                camera: Camera::default(),
                sphere: SphereModel::centered(config.sphere_radius),
                spin: 0.0,
                graticule: Graticule::build(
                    config.sphere_radius,
                    GRATICULE_LINES,
                    GRATICULE_SEGMENTS,
                ),
            },
            ViewKind::Planar | ViewKind::SubPixel => Surface::Image {
                transform: ViewTransform2D::new(config.drag_mode),
            },
        };
        Self {
            kind: config.kind,
            zoom_controls: config.zoom,
            navigation: config.navigation,
            auto_rotate_rad_per_sec: config.auto_rotate_rad_per_sec,
            overlay: OverlaySelector::new(config.overlays, config.initial_overlay),
            surface,
            viewport: Vec2::ZERO,
            pointer: None,
            coordinate: None,
            pending_nav: SmallVec::new(),
            active: true,
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn zoom_controls(&self) -> ZoomControls {
        self.zoom_controls
    }

    pub fn navigation_targets(&self) -> &[NavRequest] {
        &self.navigation
    }

    pub fn overlay_entries(&self) -> &[OverlayEntry] {
        self.overlay.table().entries()
    }

    /// Reference lines the renderer draws over the globe, sized to its sphere.
    pub fn graticule(&self) -> Option<&Graticule> {
        match &self.surface {
            Surface::Sphere { graticule, .. } => Some(graticule),
            Surface::Image { .. } => None,
        }
    }

    /// Size of the canvas (globe) or image container (planar views) in pixels.
    pub fn on_resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        if let Surface::Sphere { camera, .. } = &mut self.surface {
            camera.set_viewport(viewport);
        }
        self.refresh_coordinate();
    }

    /// Re-measure from an event: resizes only when the size moved.
    ///
    /// Layout can settle after the last resize (an image finishing its load,
    /// a stylesheet arriving), so pointer handlers call this before picking.
    pub fn sync_viewport(&mut self, viewport: Vec2) -> bool {
        if viewport == self.viewport {
            return false;
        }
        log::debug!(
            "[resize] {:?} {}x{} -> {}x{}",
            self.kind,
            self.viewport.x,
            self.viewport.y,
            viewport.x,
            viewport.y
        );
        self.on_resize(viewport);
        true
    }

    pub fn on_pointer_move(&mut self, pos: Vec2) {
        if !self.active {
            return;
        }
        self.pointer = Some(pos);
        if let Surface::Image { transform } = &mut self.surface {
            transform.update_drag(pos);
        }
        self.refresh_coordinate();
        log::trace!("[pointer] {:?} -> {:?}", pos, self.coordinate);
    }

    /// Returns true when a pan gesture was opened.
    pub fn on_pointer_down(&mut self, pos: Vec2) -> bool {
        if !self.active {
            return false;
        }
        match &mut self.surface {
            Surface::Image { transform } => {
                let opened = transform.begin_drag(pos);
                if opened {
                    log::debug!("[drag] begin at ({:.0},{:.0})", pos.x, pos.y);
                }
                opened
            }
            Surface::Sphere { .. } => false,
        }
    }

    pub fn on_pointer_up(&mut self) {
        if let Surface::Image { transform } = &mut self.surface {
            if transform.end_drag() {
                log::debug!("[drag] end offset={:?}", transform.pan_offset());
            }
        }
    }

    /// Pointer left the surface. Hover is dropped unless a pan is in progress.
    pub fn on_pointer_leave(&mut self) {
        if self.is_dragging() {
            return;
        }
        self.pointer = None;
        self.coordinate = None;
    }

    pub fn on_select_overlay(&mut self, key: &str) -> &str {
        self.overlay.select(key)
    }

    pub fn on_resource_load_failure(&mut self) -> &str {
        self.overlay.on_resource_load_failure()
    }

    /// Returns true when the zoom level changed.
    pub fn on_zoom_in(&mut self) -> bool {
        if !self.zoom_controls.zoom_in {
            return false;
        }
        self.change_zoom(ViewTransform2D::zoom_in)
    }

    /// Returns true when the zoom level changed.
    pub fn on_zoom_out(&mut self) -> bool {
        if !self.zoom_controls.zoom_out {
            return false;
        }
        self.change_zoom(ViewTransform2D::zoom_out)
    }

    fn change_zoom(&mut self, step: fn(&mut ViewTransform2D) -> bool) -> bool {
        let Surface::Image { transform } = &mut self.surface else {
            return false;
        };
        let changed = step(transform);
        if changed {
            log::debug!("[zoom] {}", transform.zoom());
            self.refresh_coordinate();
        }
        changed
    }

    /// Advance time-driven state (globe spin) by `dt`.
    pub fn on_frame(&mut self, dt: Duration) {
        if !self.active {
            return;
        }
        if let Surface::Sphere { spin, .. } = &mut self.surface {
            if self.auto_rotate_rad_per_sec != 0.0 {
                *spin = (*spin + self.auto_rotate_rad_per_sec * dt.as_secs_f32()).rem_euclid(TAU);
                self.refresh_coordinate();
            }
        }
    }

    /// Queue a navigation if this view offers it; returns whether it was queued.
    pub fn request_navigation(&mut self, request: NavRequest) -> bool {
        if !self.navigation.contains(&request) {
            log::warn!("[nav] {:?} not offered by {:?}", request, self.kind);
            return false;
        }
        self.pending_nav.push(request);
        true
    }

    pub fn take_navigation_requests(&mut self) -> SmallVec<[NavRequest; 4]> {
        std::mem::take(&mut self.pending_nav)
    }

    /// Leaving the view: close any gesture and forget hover state.
    pub fn deactivate(&mut self) {
        self.on_pointer_up();
        self.pointer = None;
        self.coordinate = None;
        self.pending_nav.clear();
        self.active = false;
        log::debug!("[view] {:?} inactive", self.kind);
    }

    pub fn activate(&mut self) {
        self.active = true;
        log::debug!("[view] {:?} active", self.kind);
    }

    pub fn is_dragging(&self) -> bool {
        match &self.surface {
            Surface::Image { transform } => transform.is_dragging(),
            Surface::Sphere { .. } => false,
        }
    }

    pub fn zoom(&self) -> f32 {
        match &self.surface {
            Surface::Image { transform } => transform.zoom(),
            Surface::Sphere { .. } => 1.0,
        }
    }

    /// Globe spin about +Y in radians, 0 for planar views.
    pub fn spin_radians(&self) -> f32 {
        match &self.surface {
            Surface::Sphere { spin, .. } => *spin,
            Surface::Image { .. } => 0.0,
        }
    }

    pub fn current_coordinate(&self) -> Option<GeoCoordinate> {
        self.coordinate
    }

    pub fn current_transform(&self) -> Transform2D {
        match &self.surface {
            Surface::Image { transform } => transform.effective_transform(),
            Surface::Sphere { .. } => Transform2D::IDENTITY,
        }
    }

    pub fn current_resource(&self) -> &str {
        self.overlay.current()
    }

    fn refresh_coordinate(&mut self) {
        let Some(pos) = self.pointer else {
            self.coordinate = None;
            return;
        };
        self.coordinate = match &self.surface {
            Surface::Sphere {
                camera,
                sphere,
                spin,
                ..
            } => camera
                .ray_from_screen(pos, self.viewport)
                .and_then(|ray| pick_oriented(&ray, sphere, Quat::from_rotation_y(*spin))),
            Surface::Image { transform } => {
                let image_px = transform
                    .effective_transform()
                    .unproject(pos, self.viewport);
                planar_to_geo(image_px, self.viewport).filter(GeoCoordinate::in_range)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip() {
        for kind in ViewKind::ALL {
            assert_eq!(ViewKind::from_route(kind.route()), Ok(kind));
        }
        assert_eq!(ViewKind::from_route("/2d/"), Ok(ViewKind::Planar));
        assert!(ViewKind::from_route("/3d").is_err());
    }

    #[test]
    fn plain_planar_view_has_no_zoom_out() {
        let mut v = ViewController::new(ViewConfig::planar());
        assert!(v.on_zoom_in());
        assert!(!v.on_zoom_out());
        assert_eq!(v.zoom(), 2.0);
    }

    #[test]
    fn globe_ignores_zoom_and_drag() {
        let mut v = ViewController::new(ViewConfig::globe());
        assert!(!v.on_zoom_in());
        assert!(!v.on_pointer_down(Vec2::new(1.0, 1.0)));
        assert!(v.current_transform().is_identity());
    }

    #[test]
    fn navigation_is_only_queued_when_offered() {
        let mut v = ViewController::new(ViewConfig::planar());
        assert!(!v.request_navigation(NavRequest::Goto(ViewKind::SubPixel)));
        assert!(v.request_navigation(NavRequest::Back));
        let reqs = v.take_navigation_requests();
        assert_eq!(reqs.as_slice(), &[NavRequest::Back]);
        assert!(v.take_navigation_requests().is_empty());
    }

    #[test]
    fn spin_wraps() {
        let mut v = ViewController::new(ViewConfig::globe());
        v.on_frame(Duration::from_secs(60));
        let expected = (60.0 * AUTO_ROTATE_RAD_PER_SEC).rem_euclid(TAU);
        assert!((v.spin_radians() - expected).abs() < 1e-3);
        assert!(v.spin_radians() < TAU);
    }

    #[test]
    fn only_the_globe_carries_a_graticule() {
        let globe = ViewController::new(ViewConfig::globe());
        let g = globe.graticule().expect("globe graticule");
        assert_eq!(g.parallels.len(), GRATICULE_LINES);
        assert_eq!(g.meridians.len(), GRATICULE_LINES);
        assert_eq!(g.vertex_count(), 2 * GRATICULE_LINES * (GRATICULE_SEGMENTS + 1));
        for kind in [ViewConfig::planar(), ViewConfig::subpixel()] {
            assert!(ViewController::new(kind).graticule().is_none());
        }
    }

    #[test]
    fn sync_viewport_only_reports_changes() {
        let mut v = ViewController::new(ViewConfig::planar());
        assert!(v.sync_viewport(Vec2::new(800.0, 400.0)));
        assert!(!v.sync_viewport(Vec2::new(800.0, 400.0)));
        assert!(v.sync_viewport(Vec2::new(800.0, 0.0)));
    }
}
