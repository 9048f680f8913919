//! Ray/sphere picking for the globe view.
//!
//! Every call is independent; nothing is cached between pointer moves.

use crate::geo::{sphere_hit_to_geo, GeoCoordinate};
use glam::{Quat, Vec3};

use crate::constants::MIN_RAY_DIR_LEN;

/// World-space ray with a unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`. Degenerate directions yield `None`.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        if !origin.is_finite() || !direction.is_finite() {
            return None;
        }
        let len = direction.length();
        if len < MIN_RAY_DIR_LEN {
            return None;
        }
        Some(Self {
            origin,
            direction: direction / len,
        })
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Sphere geometry, fixed for the lifetime of a view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereModel {
    pub center: Vec3,
    pub radius: f32,
}

impl SphereModel {
    pub fn centered(radius: f32) -> Self {
        Self {
            center: Vec3::ZERO,
            radius,
        }
    }
}

/// Nearest non-negative parametric distance at which the ray meets the sphere.
///
/// A ray starting inside the sphere reports the exit point.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + root;
    (far >= 0.0).then_some(far)
}

/// Distance along the ray and the coordinate found there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereHit {
    pub distance: f32,
    pub coordinate: GeoCoordinate,
}

/// Intersect `ray` with `sphere` whose surface is rotated by `orientation`
/// (local to world). The hit is expressed in the sphere's unrotated frame
/// before converting it to a coordinate.
pub fn intersect(ray: &Ray, sphere: &SphereModel, orientation: Quat) -> Option<SphereHit> {
    if !(sphere.radius > 0.0) {
        return None;
    }
    let t = ray_sphere(ray.origin, ray.direction, sphere.center, sphere.radius)?;
    let local = orientation.inverse() * (ray.at(t) - sphere.center);
    Some(SphereHit {
        distance: t,
        coordinate: sphere_hit_to_geo(local, sphere.radius),
    })
}

/// Coordinate under `ray` for an unrotated sphere, or `None` on a miss.
pub fn pick(ray: &Ray, sphere: &SphereModel) -> Option<GeoCoordinate> {
    pick_oriented(ray, sphere, Quat::IDENTITY)
}

/// Coordinate under `ray` for a sphere spun by `orientation`.
pub fn pick_oriented(ray: &Ray, sphere: &SphereModel, orientation: Quat) -> Option<GeoCoordinate> {
    intersect(ray, sphere, orientation).map(|hit| hit.coordinate)
}
