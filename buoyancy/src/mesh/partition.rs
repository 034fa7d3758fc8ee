//! Per-step partition of a whole mesh into submerged and dry fragments.

use bevy::math::Vec3;
use bevy::transform::components::Transform;
use bevy_log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::clip::{clip_triangle, FragmentSet};
use super::triangle::TriangleGeometry;
use crate::constants::INVALID_INDEX_BUFFER_ERROR;
use crate::error::{BuoyancyError, Result};
use crate::water::WaterSurfaceQuery;

/// Clipping result for every source triangle, indexed by triangle number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub submerged: Vec<FragmentSet>,
    pub above_water: Vec<FragmentSet>,
}

impl Partition {
    /// Number of source triangles.
    pub fn len(&self) -> usize {
        self.submerged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submerged.is_empty()
    }

    pub fn submerged_fragments(&self) -> impl Iterator<Item = &TriangleGeometry> {
        self.submerged.iter().flatten()
    }

    pub fn above_water_fragments(&self) -> impl Iterator<Item = &TriangleGeometry> {
        self.above_water.iter().flatten()
    }

    /// Wetted surface area, in world units.
    pub fn submerged_area(&self) -> f32 {
        self.submerged_fragments().fold(0.0, |area, fragment| area + fragment.area())
    }

    pub fn above_water_area(&self) -> f32 {
        self.above_water_fragments().fold(0.0, |area, fragment| area + fragment.area())
    }

    /// Share of the surface area under water, in [0, 1].
    pub fn submerged_ratio(&self) -> f32 {
        let submerged = self.submerged_area();
        let total = submerged + self.above_water_area();
        if total > 0.0 {
            submerged / total
        } else {
            0.0
        }
    }
}

/// A body's surface mesh and its latest partition against the water.
///
/// The topology is fixed at construction. [`BuoyantMesh::update`] should run
/// once per simulation step; it overwrites the previous partition.
#[derive(Debug, Clone)]
pub struct BuoyantMesh {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    partition: Option<Partition>,
}

impl BuoyantMesh {
    /// Build from body-local vertex positions and a triangle list.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(BuoyancyError::InvalidArgument(format!(
                "{INVALID_INDEX_BUFFER_ERROR}, got {}",
                indices.len()
            )));
        }

        if let Some((slot, index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertices.len())
        {
            return Err(BuoyancyError::InvalidArgument(format!(
                "Index {index} at position {slot} is out of range for {} vertices",
                vertices.len()
            )));
        }

        Ok(Self {
            vertices,
            indices,
            partition: None,
        })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Local-space corners of source triangle `i`.
    ///
    /// Panics if `i >= triangle_count()`.
    pub fn triangle(&self, i: usize) -> [Vec3; 3] {
        let base = i * 3;
        [
            self.vertices[self.indices[base] as usize],
            self.vertices[self.indices[base + 1] as usize],
            self.vertices[self.indices[base + 2] as usize],
        ]
    }

    /// Re-partition every triangle against the current water surface.
    ///
    /// Triangles are clipped in parallel. On error the previous partition is
    /// kept untouched.
    pub fn update<W>(&mut self, transform: &Transform, water: &W) -> Result<()>
    where
        W: WaterSurfaceQuery + Sync + ?Sized,
    {
        let clipped: Vec<_> = (0..self.triangle_count())
            .into_par_iter()
            .map(|i| clip_triangle(self.triangle(i), transform, water))
            .collect::<Result<_>>()?;

        let (submerged, above_water): (Vec<_>, Vec<_>) = clipped
            .into_iter()
            .map(|triangle| (triangle.submerged, triangle.above_water))
            .unzip();

        let partition = Partition {
            submerged,
            above_water,
        };

        debug!(
            "Partitioned {} triangles into {} submerged and {} above-water fragments",
            partition.len(),
            partition.submerged_fragments().count(),
            partition.above_water_fragments().count()
        );

        self.partition = Some(partition);
        Ok(())
    }

    /// Whether `update` has completed at least once.
    pub fn is_ready(&self) -> bool {
        self.partition.is_some()
    }

    pub fn partition(&self) -> Result<&Partition> {
        self.partition.as_ref().ok_or(BuoyancyError::NotReady)
    }

    pub fn submerged(&self) -> Result<&[FragmentSet]> {
        self.partition().map(|p| p.submerged.as_slice())
    }

    pub fn above_water(&self) -> Result<&[FragmentSet]> {
        self.partition().map(|p| p.above_water.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::shapes;
    use crate::water::FlatWater;

    fn unit_quad() -> BuoyantMesh {
        // two triangles in the XY plane, y in [-1, 1]
        let vertices = vec![
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        BuoyantMesh::new(vertices, vec![0, 1, 2, 0, 2, 3]).unwrap()
    }

    #[test]
    fn test_rejects_partial_triangle() {
        let err = BuoyantMesh::new(vec![Vec3::ZERO; 3], vec![0, 1]).unwrap_err();
        assert!(matches!(err, BuoyancyError::InvalidArgument(_)));
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let err = BuoyantMesh::new(vec![Vec3::ZERO; 3], vec![0, 1, 3]).unwrap_err();
        assert!(matches!(err, BuoyancyError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_mesh_is_valid() {
        let mut mesh = BuoyantMesh::new(Vec::new(), Vec::new()).unwrap();
        mesh.update(&Transform::IDENTITY, &FlatWater::new(0.0)).unwrap();
        assert!(mesh.partition().unwrap().is_empty());
    }

    #[test]
    fn test_not_ready_before_update() {
        let mesh = unit_quad();
        assert!(!mesh.is_ready());
        assert_eq!(mesh.partition().unwrap_err(), BuoyancyError::NotReady);
        assert_eq!(mesh.submerged().unwrap_err(), BuoyancyError::NotReady);
        assert_eq!(mesh.above_water().unwrap_err(), BuoyancyError::NotReady);
    }

    #[test]
    fn test_partition_is_index_aligned() {
        let mut mesh = unit_quad();
        mesh.update(&Transform::IDENTITY, &FlatWater::new(0.0)).unwrap();

        let submerged = mesh.submerged().unwrap();
        let above = mesh.above_water().unwrap();
        assert_eq!(submerged.len(), 2);
        assert_eq!(above.len(), 2);

        // triangle 0 has two corners below, triangle 1 only one
        assert_eq!(submerged[0].len(), 2);
        assert_eq!(above[0].len(), 1);
        assert_eq!(submerged[1].len(), 1);
        assert_eq!(above[1].len(), 2);
    }

    #[test]
    fn test_half_submerged_quad_area() {
        let mut mesh = unit_quad();
        mesh.update(&Transform::IDENTITY, &FlatWater::new(0.0)).unwrap();

        let partition = mesh.partition().unwrap();
        assert!((partition.submerged_area() - 1.0).abs() < 1e-5);
        assert!((partition.above_water_area() - 1.0).abs() < 1e-5);
        assert!((partition.submerged_ratio() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_update_follows_moving_water() {
        let mut mesh = unit_quad();
        mesh.update(&Transform::IDENTITY, &FlatWater::new(-2.0)).unwrap();
        assert_eq!(mesh.partition().unwrap().submerged_ratio(), 0.0);

        mesh.update(&Transform::IDENTITY, &FlatWater::new(2.0)).unwrap();
        assert_eq!(mesh.partition().unwrap().submerged_ratio(), 1.0);
    }

    #[test]
    fn test_dry_mesh_reports_positive_zero() {
        let mut mesh = unit_quad();
        mesh.update(&Transform::IDENTITY, &FlatWater::new(-5.0)).unwrap();

        let partition = mesh.partition().unwrap();
        assert!(partition.submerged_area().is_sign_positive());
        assert!(partition.submerged_ratio().is_sign_positive());
        assert_eq!(format!("{:.1}", partition.submerged_ratio() * 100.0), "0.0");

        let empty = Partition::default();
        assert!(empty.submerged_area().is_sign_positive());
        assert!(empty.above_water_area().is_sign_positive());
        assert!(empty.submerged_ratio().is_sign_positive());
    }

    #[test]
    fn test_failed_update_keeps_previous_partition() {
        let mut mesh = unit_quad();
        mesh.update(&Transform::IDENTITY, &FlatWater::new(0.0)).unwrap();
        let before = mesh.partition().unwrap().clone();

        let broken = |_: Vec3| f32::INFINITY;
        assert!(mesh.update(&Transform::IDENTITY, &broken).is_err());
        assert_eq!(mesh.partition().unwrap(), &before);
    }

    #[test]
    fn test_box_hull_partition() {
        let (vertices, indices) = shapes::box_hull(Vec3::new(1.0, 0.5, 1.0));
        let mut mesh = BuoyantMesh::new(vertices, indices).unwrap();
        mesh.update(&Transform::IDENTITY, &FlatWater::new(0.0)).unwrap();

        let partition = mesh.partition().unwrap();
        assert_eq!(partition.len(), 12);
        // bottom (4) plus the lower half of the four sides (4 * 1)
        assert!((partition.submerged_area() - 8.0).abs() < 1e-4);
        assert!((partition.above_water_area() - 8.0).abs() < 1e-4);
    }
}
