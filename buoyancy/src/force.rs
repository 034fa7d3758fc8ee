//! Hydrostatic force on submerged fragments.
//!
//! Each fragment contributes `ρ · g_y · |h̄| · A · n`, where `h̄` is its mean
//! depth, `A` its area and `n` its normal. Horizontal pressure components
//! cancel over a closed hull, so only the vertical part of each contribution
//! is kept.

use bevy::math::{Quat, Vec3};
use bevy::transform::components::Transform;

use crate::config::BuoyancyConfig;
use crate::mesh::{Partition, TriangleGeometry};

/// A force and the world-space point it acts at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AppliedForce {
    pub force: Vec3,
    pub point: Vec3,
}

/// Net force and torque about a reference point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Wrench {
    pub force: Vec3,
    pub torque: Vec3,
}

impl Wrench {
    pub fn add_at(&mut self, applied: AppliedForce, reference: Vec3) {
        self.force += applied.force;
        self.torque += (applied.point - reference).cross(applied.force);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuoyancyForceModel {
    /// Fluid density (kg/m³)
    pub fluid_density: f32,
    /// Vertical component of gravity, negative when gravity points down
    pub gravity: f32,
}

impl BuoyancyForceModel {
    pub fn new(fluid_density: f32, gravity: Vec3) -> Self {
        Self {
            fluid_density,
            gravity: gravity.y,
        }
    }

    pub fn from_config(config: &BuoyancyConfig) -> Self {
        Self::new(config.fluid_density, config.gravity)
    }

    /// Force on a fragment, using its normal as stored.
    pub fn force(&self, fragment: &TriangleGeometry) -> Vec3 {
        self.force_in_frame(fragment, Quat::IDENTITY)
    }

    /// Force on a fragment of a body rotated by `rotation`.
    ///
    /// The normal is taken to world space before the horizontal components
    /// are dropped.
    pub fn force_in_frame(&self, fragment: &TriangleGeometry, rotation: Quat) -> Vec3 {
        let mut force = self.fluid_density
            * self.gravity
            * fragment.mean_distance().abs()
            * fragment.area()
            * fragment.world_normal(rotation);
        force.x = 0.0;
        force.z = 0.0;
        force
    }

    /// Every submerged fragment's force, paired with its world-space centroid.
    pub fn apply(&self, partition: &Partition, transform: &Transform) -> Vec<AppliedForce> {
        partition
            .submerged_fragments()
            .map(|fragment| AppliedForce {
                force: self.force_in_frame(fragment, transform.rotation),
                point: fragment.world_center(transform),
            })
            .collect()
    }

    /// Sum of all fragment forces and their torque about `center_of_mass`.
    pub fn wrench(
        &self,
        partition: &Partition,
        transform: &Transform,
        center_of_mass: Vec3,
    ) -> Wrench {
        self.apply(partition, transform)
            .into_iter()
            .fold(Wrench::default(), |mut wrench, applied| {
                wrench.add_at(applied, center_of_mass);
                wrench
            })
    }
}

impl Default for BuoyancyForceModel {
    fn default() -> Self {
        Self::from_config(&BuoyancyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FRESH_WATER_DENSITY;
    use crate::mesh::{shapes, BuoyantMesh};
    use crate::water::FlatWater;

    fn fragment(vertices: [Vec3; 3], distances: [f32; 3]) -> TriangleGeometry {
        TriangleGeometry::new(&vertices, &distances, &Transform::IDENTITY).unwrap()
    }

    fn floor_piece() -> [Vec3; 3] {
        // normal points down
        [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)]
    }

    #[test]
    fn test_downward_facing_fragment_is_pushed_up() {
        let model = BuoyancyForceModel::new(FRESH_WATER_DENSITY, Vec3::new(0.0, -10.0, 0.0));
        let force = model.force(&fragment(floor_piece(), [-2.0; 3]));

        // 1000 * 10 * 2 * 0.5
        assert!((force.y - 10_000.0).abs() < 1e-2);
        assert_eq!(force.x, 0.0);
        assert_eq!(force.z, 0.0);
    }

    #[test]
    fn test_force_is_always_vertical() {
        let model = BuoyancyForceModel::default();
        let slanted = [
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-0.3, -1.5, 1.0),
        ];
        let rotation = Quat::from_rotation_z(0.7) * Quat::from_rotation_x(-0.3);

        for gravity in [-9.81, -20.0, 3.0] {
            let model = BuoyancyForceModel { gravity, ..model };
            let force = model.force_in_frame(&fragment(slanted, [-0.4, -1.3, -0.9]), rotation);
            assert_eq!(force.x, 0.0);
            assert_eq!(force.z, 0.0);
            assert!(force.y != 0.0);
        }
    }

    #[test]
    fn test_gravity_sign_is_preserved() {
        let piece = fragment(floor_piece(), [-1.0; 3]);
        let down = BuoyancyForceModel::new(1000.0, Vec3::new(0.0, -9.81, 0.0)).force(&piece);
        let up = BuoyancyForceModel::new(1000.0, Vec3::new(0.0, 9.81, 0.0)).force(&piece);
        assert!(down.y > 0.0);
        assert!((down.y + up.y).abs() < 1e-3);
    }

    #[test]
    fn test_fragment_on_surface_has_no_force() {
        let model = BuoyancyForceModel::default();
        assert_eq!(model.force(&fragment(floor_piece(), [0.0; 3])), Vec3::ZERO);
    }

    #[test]
    fn test_box_at_rest_displaces_its_volume() {
        let half_extents = Vec3::new(1.0, 0.5, 1.0);
        let (vertices, indices) = shapes::box_hull(half_extents);
        let mut hull = BuoyantMesh::new(vertices, indices).unwrap();
        hull.update(&Transform::IDENTITY, &FlatWater::new(0.0)).unwrap();

        let model = BuoyancyForceModel::new(FRESH_WATER_DENSITY, Vec3::new(0.0, -10.0, 0.0));
        let wrench = model.wrench(hull.partition().unwrap(), &Transform::IDENTITY, Vec3::ZERO);

        // lower half of a 2 x 1 x 2 box is 2 m³ of water
        let expected = FRESH_WATER_DENSITY * 10.0 * 2.0;
        assert!((wrench.force.y - expected).abs() < expected * 1e-4);
        assert!(wrench.torque.length() < expected * 1e-4);
    }

    #[test]
    fn test_forces_act_at_world_centroids() {
        let (vertices, indices) = shapes::box_hull(Vec3::ONE);
        let mut hull = BuoyantMesh::new(vertices, indices).unwrap();
        let transform = Transform::from_xyz(5.0, 0.0, -3.0);
        hull.update(&transform, &FlatWater::new(0.5)).unwrap();

        let model = BuoyancyForceModel::default();
        let applied = model.apply(hull.partition().unwrap(), &transform);
        assert_eq!(applied.len(), hull.partition().unwrap().submerged_fragments().count());
        for a in &applied {
            assert!(a.point.y < 0.5);
            assert!((a.point.x - 5.0).abs() <= 1.0 + 1e-5);
        }
    }
}
