//! Latitude/longitude reference lines for the globe.

use crate::geo::{geo_to_sphere_point, GeoCoordinate};
use glam::Vec3;

#[derive(Clone, Debug, Default)]
pub struct Graticule {
    /// Closed rings of constant latitude; first and last vertex coincide.
    pub parallels: Vec<Vec<Vec3>>,
    /// Pole-to-pole arcs of constant longitude.
    pub meridians: Vec<Vec<Vec3>>,
}

impl Graticule {
    /// `lines` parallels strictly between the poles and `lines` meridians,
    /// each sampled with `segments` segments.
    pub fn build(radius: f32, lines: usize, segments: usize) -> Self {
        if lines == 0 || segments == 0 {
            return Self::default();
        }
        let parallels = (1..=lines)
            .map(|i| {
                let lat = (i as f32 / (lines + 1) as f32) * 180.0 - 90.0;
                (0..=segments)
                    .map(|j| {
                        let lon = (j as f32 / segments as f32) * 360.0 - 180.0;
                        geo_to_sphere_point(GeoCoordinate::new(lat, lon), radius)
                    })
                    .collect()
            })
            .collect();
        let meridians = (0..lines)
            .map(|i| {
                let lon = (i as f32 / lines as f32) * 360.0 - 180.0;
                (0..=segments)
                    .map(|j| {
                        let lat = (j as f32 / segments as f32) * 180.0 - 90.0;
                        geo_to_sphere_point(GeoCoordinate::new(lat, lon), radius)
                    })
                    .collect()
            })
            .collect();
        Self {
            parallels,
            meridians,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.parallels
            .iter()
            .chain(self.meridians.iter())
            .map(Vec::len)
            .sum()
    }

    /// Every line as packed `x, y, z` floats, parallels first.
    pub fn flat_polylines(&self) -> Vec<Vec<f32>> {
        self.parallels
            .iter()
            .chain(self.meridians.iter())
            .map(|line| line.iter().flat_map(|v| v.to_array()).collect())
            .collect()
    }
}
