use bevy::math::{Quat, Vec3};
use bevy::transform::components::Transform;
use serde::{Deserialize, Serialize};

use crate::error::{BuoyancyError, Result};

/// One triangle of a buoyant mesh, with everything the force model needs.
///
/// Vertices and centre are in the body's local frame. The area is measured in
/// world scale: the body transform is applied to the vertices only to measure
/// edge lengths.
///
/// The normal follows the winding of the input vertices and is not forced to
/// face out of the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleGeometry {
    vertices: [Vec3; 3],
    distances: [f32; 3],
    normal: Vec3,
    center: Vec3,
    mean_distance: f32,
    area: f32,
}

impl TriangleGeometry {
    /// Build from loose slices, checking that there are exactly three of each.
    pub fn new(vertices: &[Vec3], distances: &[f32], transform: &Transform) -> Result<Self> {
        let vertices: [Vec3; 3] = vertices.try_into().map_err(|_| {
            BuoyancyError::InvalidArgument(format!(
                "A triangle needs exactly 3 vertices, got {}",
                vertices.len()
            ))
        })?;
        let distances: [f32; 3] = distances.try_into().map_err(|_| {
            BuoyancyError::InvalidArgument(format!(
                "A triangle needs exactly 3 water distances, got {}",
                distances.len()
            ))
        })?;

        Ok(Self::from_arrays(vertices, distances, transform))
    }

    pub(crate) fn from_arrays(
        vertices: [Vec3; 3],
        distances: [f32; 3],
        transform: &Transform,
    ) -> Self {
        let [v0, v1, v2] = vertices;
        let normal = (v1 - v0).cross(v2 - v1).normalize_or_zero();
        let center = (v0 + v1 + v2) / 3.0;
        let mean_distance = (distances[0] + distances[1] + distances[2]) / 3.0;

        // Heron's formula on world-space edge lengths
        let [w0, w1, w2] = vertices.map(|v| transform.transform_point(v));
        let a = w0.distance(w1);
        let b = w1.distance(w2);
        let c = w2.distance(w0);
        let p = (a + b + c) / 2.0;
        let area = (p * (p - a) * (p - b) * (p - c)).max(0.0).sqrt();

        Self {
            vertices,
            distances,
            normal,
            center,
            mean_distance,
            area,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    /// Per-vertex signed water distances, in vertex order.
    #[inline]
    pub fn distances(&self) -> &[f32; 3] {
        &self.distances
    }

    /// Unit normal in the local frame (zero for a degenerate triangle).
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Mean of the three signed water distances; negative when submerged.
    #[inline]
    pub fn mean_distance(&self) -> f32 {
        self.mean_distance
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.area
    }

    /// Centroid in world space, where the host applies this fragment's force.
    pub fn world_center(&self, transform: &Transform) -> Vec3 {
        transform.transform_point(self.center)
    }

    pub fn world_normal(&self, rotation: Quat) -> Vec3 {
        rotation * self.normal
    }
}
