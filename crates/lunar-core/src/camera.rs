//! Perspective camera for the globe view and pointer-to-ray construction.

use crate::constants::{camera_eye, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::picking::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Track a resized viewport. Empty viewports leave the aspect untouched.
    pub fn set_viewport(&mut self, viewport: Vec2) -> bool {
        if viewport.is_finite() && viewport.x > 0.0 && viewport.y > 0.0 {
            self.aspect = viewport.x / viewport.y;
            true
        } else {
            false
        }
    }

    /// World-space ray through a normalized device coordinate (x right, y up).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray> {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        if p_near.w.abs() < f32::EPSILON || p_far.w.abs() < f32::EPSILON {
            return None;
        }
        let p0: Vec3 = p_near.truncate() / p_near.w;
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, p1 - p0)
    }

    /// World-space ray under a pointer given in viewport pixels (origin top-left).
    pub fn ray_from_screen(&self, pointer: Vec2, viewport: Vec2) -> Option<Ray> {
        self.ray_from_ndc(screen_to_ndc(pointer, viewport)?)
    }
}

/// Pixels (origin top-left, y down) to NDC (centre origin, y up).
#[inline]
pub fn screen_to_ndc(pointer: Vec2, viewport: Vec2) -> Option<Vec2> {
    if !viewport.is_finite() || viewport.x <= 0.0 || viewport.y <= 0.0 || !pointer.is_finite() {
        return None;
    }
    Some(Vec2::new(
        (pointer.x / viewport.x) * 2.0 - 1.0,
        1.0 - (pointer.y / viewport.y) * 2.0,
    ))
}
