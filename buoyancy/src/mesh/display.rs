//! Debug view of a partition as one flat triangle list.
//!
//! Pure data: the host decides whether and how to render it.

use super::partition::Partition;

/// Which half of a partition to turn into a display mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FragmentSide {
    #[default]
    Submerged,
    AboveWater,
}

/// Un-indexed-per-fragment mesh data, body-local.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DisplayMesh {
    pub positions: Vec<[f32; 3]>,
    /// Flat per-vertex normals, copied from each fragment
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl DisplayMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Concatenate every fragment on `side` into a single triangle list.
pub fn build_display_mesh(partition: &Partition, side: FragmentSide) -> DisplayMesh {
    let sets = match side {
        FragmentSide::Submerged => &partition.submerged,
        FragmentSide::AboveWater => &partition.above_water,
    };

    let mut data = DisplayMesh::new();
    for fragment in sets.iter().flatten() {
        let base = data.positions.len() as u32;
        let normal = fragment.normal().to_array();
        for vertex in fragment.vertices() {
            data.positions.push(vertex.to_array());
            data.normals.push(normal);
        }
        data.indices.extend([base, base + 1, base + 2]);
    }

    data
}
