//! The seam between the clipper and whatever knows where the water is.

use bevy::math::Vec3;

/// Signed vertical distance from a world-space point to the fluid surface.
///
/// Negative below the surface, positive above. Implementations must return a
/// finite value for every point in the simulated volume; `0.0` is the
/// "no water here" answer.
pub trait WaterSurfaceQuery {
    fn signed_distance(&self, point: Vec3) -> f32;

    /// Whether `point` counts as submerged (strictly below the surface).
    #[inline]
    fn is_submerged(&self, point: Vec3) -> bool {
        self.signed_distance(point) < 0.0
    }
}

impl<F> WaterSurfaceQuery for F
where
    F: Fn(Vec3) -> f32,
{
    #[inline]
    fn signed_distance(&self, point: Vec3) -> f32 {
        self(point)
    }
}

/// An infinite horizontal water plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatWater {
    pub level: f32,
}

impl FlatWater {
    pub fn new(level: f32) -> Self {
        Self { level }
    }
}

impl WaterSurfaceQuery for FlatWater {
    #[inline]
    fn signed_distance(&self, point: Vec3) -> f32 {
        point.y - self.level
    }
}
