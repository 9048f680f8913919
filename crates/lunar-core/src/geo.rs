//! Screen and surface positions to selenographic latitude/longitude.
//!
//! Two models are supported: a flat equirectangular image where x maps
//! linearly to longitude and y to latitude, and a sphere centred at its
//! local origin where latitude comes from the height of the surface point
//! and longitude from its bearing around +Y measured from +Z.
//!
//! The planar mapping puts latitude -90 at the top edge (y = 0). That
//! orientation is what the overlay imagery and readouts are built against.

use glam::{Vec2, Vec3};
use std::fmt;

/// Latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f32,
    pub longitude: f32,
}

impl GeoCoordinate {
    pub const fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// True when both components are inside their nominal ranges.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}, {:.2}", self.latitude, self.longitude)
    }
}

#[inline]
fn usable_extent(container: Vec2) -> bool {
    container.is_finite() && container.x > 0.0 && container.y > 0.0
}

/// Map a pointer position inside an equirectangular image to a coordinate.
///
/// `pointer` is relative to the top-left corner of the image container in
/// pixels. Returns `None` when the container has no usable extent or the
/// pointer is not finite.
pub fn planar_to_geo(pointer: Vec2, container: Vec2) -> Option<GeoCoordinate> {
    if !usable_extent(container) || !pointer.is_finite() {
        return None;
    }
    let longitude = (pointer.x / container.x) * 360.0 - 180.0;
    let latitude = (pointer.y / container.y) * 180.0 - 90.0;
    Some(GeoCoordinate::new(latitude, longitude))
}

/// Inverse of [`planar_to_geo`].
pub fn geo_to_planar(geo: GeoCoordinate, container: Vec2) -> Vec2 {
    Vec2::new(
        (geo.longitude + 180.0) / 360.0 * container.x,
        (geo.latitude + 90.0) / 180.0 * container.y,
    )
}

/// Convert a point on the sphere surface (local frame) to a coordinate.
///
/// The caller guarantees `hit` lies on the surface; only rounding error is
/// absorbed here.
pub fn sphere_hit_to_geo(hit: Vec3, radius: f32) -> GeoCoordinate {
    let sin_lat = (hit.y / radius).clamp(-1.0, 1.0);
    let latitude = sin_lat.asin().to_degrees();
    let longitude = hit.x.atan2(hit.z).to_degrees();
    GeoCoordinate::new(latitude, longitude)
}

/// Inverse of [`sphere_hit_to_geo`].
pub fn geo_to_sphere_point(geo: GeoCoordinate, radius: f32) -> Vec3 {
    let lat = geo.latitude.to_radians();
    let lon = geo.longitude.to_radians();
    let ring = radius * lat.cos();
    Vec3::new(ring * lon.sin(), radius * lat.sin(), ring * lon.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn planar_corners_and_centre() {
        let size = Vec2::new(800.0, 400.0);
        let tl = planar_to_geo(Vec2::ZERO, size).unwrap();
        assert!(close(tl.latitude, -90.0) && close(tl.longitude, -180.0));
        let mid = planar_to_geo(size * 0.5, size).unwrap();
        assert!(close(mid.latitude, 0.0) && close(mid.longitude, 0.0));
        let br = planar_to_geo(size, size).unwrap();
        assert!(close(br.latitude, 90.0) && close(br.longitude, 180.0));
    }

    #[test]
    fn planar_rejects_empty_container() {
        assert!(planar_to_geo(Vec2::new(10.0, 10.0), Vec2::new(0.0, 100.0)).is_none());
        assert!(planar_to_geo(Vec2::new(10.0, 10.0), Vec2::new(100.0, 0.0)).is_none());
        assert!(planar_to_geo(Vec2::new(f32::NAN, 1.0), Vec2::new(100.0, 100.0)).is_none());
    }

    #[test]
    fn sphere_front_point_is_origin() {
        let g = sphere_hit_to_geo(Vec3::new(0.0, 0.0, 5.0), 5.0);
        assert!(close(g.latitude, 0.0) && close(g.longitude, 0.0));
    }

    #[test]
    fn sphere_poles_and_east() {
        let north = sphere_hit_to_geo(Vec3::new(0.0, 5.0, 0.0), 5.0);
        assert!(close(north.latitude, 90.0));
        let east = sphere_hit_to_geo(Vec3::new(5.0, 0.0, 0.0), 5.0);
        assert!(close(east.longitude, 90.0));
    }

    #[test]
    fn slightly_outside_surface_does_not_produce_nan() {
        let g = sphere_hit_to_geo(Vec3::new(0.0, 5.000_01, 0.0), 5.0);
        assert!(g.is_finite());
    }

    #[test]
    fn sphere_point_inverts_hit_mapping() {
        let geo = GeoCoordinate::new(33.0, -120.0);
        let p = geo_to_sphere_point(geo, 5.0);
        assert!(close(p.length(), 5.0));
        let back = sphere_hit_to_geo(p, 5.0);
        assert!((back.latitude - geo.latitude).abs() < 1e-3);
        assert!((back.longitude - geo.longitude).abs() < 1e-3);
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(GeoCoordinate::new(1.234, -5.678).to_string(), "1.23, -5.68");
    }
}
