use glam::Vec3;

// Shared geometry and interaction tuning used by both web and native frontends.

// Globe scene
pub const MOON_RADIUS: f32 = 5.0; // sphere radius in world units
pub const CAMERA_Z: f32 = 10.0; // camera eye distance along +Z
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Globe spin, 0.01 rad per frame at 60 Hz
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = 0.6;

// Planar zoom
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 3.0;
pub const ZOOM_STEP: f32 = 1.0;

// Back-history entries kept by a view set; older ones are dropped
pub const NAV_HISTORY_LIMIT: usize = 32;

// Graticule density
pub const GRATICULE_LINES: usize = 8;
pub const GRATICULE_SEGMENTS: usize = 32;

// Rays shorter than this are treated as degenerate
pub const MIN_RAY_DIR_LEN: f32 = 1e-6;

// Base imagery shown when nothing else resolves
pub const DEFAULT_TEXTURE: &str = "/assets/lunar_texture8k.jpg";

#[inline]
pub fn camera_eye() -> Vec3 {
    Vec3::new(0.0, 0.0, CAMERA_Z)
}
