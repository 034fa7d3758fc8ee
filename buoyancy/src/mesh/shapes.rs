//! Small procedural meshes for tests and demos.

use bevy::math::Vec3;

/// A single triangle lying in the XZ plane, wound so its normal points down.
pub fn single_triangle() -> (Vec<Vec3>, Vec<u32>) {
    let vertices = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.5, 0.0, -1.0),
        Vec3::new(1.0, 0.0, 1.0),
    ];
    (vertices, vec![0, 1, 2])
}

/// A closed box centred on the origin, 12 triangles with outward normals.
pub fn box_hull(half_extents: Vec3) -> (Vec<Vec3>, Vec<u32>) {
    // corner i has +x if bit 0 is set, +y for bit 1, +z for bit 2
    let vertices = (0..8)
        .map(|i| {
            Vec3::new(
                if i & 1 != 0 { half_extents.x } else { -half_extents.x },
                if i & 2 != 0 { half_extents.y } else { -half_extents.y },
                if i & 4 != 0 { half_extents.z } else { -half_extents.z },
            )
        })
        .collect();

    // counter-clockwise seen from outside
    const FACES: [[u32; 4]; 6] = [
        [0, 1, 5, 4], // -Y
        [2, 6, 7, 3], // +Y
        [0, 4, 6, 2], // -X
        [1, 3, 7, 5], // +X
        [0, 2, 3, 1], // -Z
        [4, 5, 7, 6], // +Z
    ];

    let indices = FACES
        .iter()
        .flat_map(|&[a, b, c, d]| [a, b, c, a, c, d])
        .collect();

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::TriangleGeometry;
    use bevy::transform::components::Transform;

    #[test]
    fn test_box_hull_normals_point_outward() {
        let (vertices, indices) = box_hull(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(indices.len(), 36);

        for tri in indices.chunks(3) {
            let corners = [
                vertices[tri[0] as usize],
                vertices[tri[1] as usize],
                vertices[tri[2] as usize],
            ];
            let geometry = TriangleGeometry::from_arrays(corners, [0.0; 3], &Transform::IDENTITY);
            assert!(geometry.normal().dot(geometry.center()) > 0.0);
        }
    }

    #[test]
    fn test_single_triangle_faces_down() {
        let (vertices, _) = single_triangle();
        let corners = [vertices[0], vertices[1], vertices[2]];
        let geometry = TriangleGeometry::from_arrays(corners, [0.0; 3], &Transform::IDENTITY);
        assert!((geometry.normal() - Vec3::NEG_Y).length() < 1e-6);
        assert!((geometry.area() - 0.75).abs() < 1e-6);
    }
}
