//! Clipping a single triangle against the water surface.
//!
//! Each vertex is classified [`Submersion::Above`] or [`Submersion::Below`].
//! A triangle straddling the surface is cut along the two crossing edges and
//! re-triangulated so that every fragment keeps the source winding:
//!
//! ```text
//!  one vertex below (L)            two vertices below (L, M)
//!
//!     M ________ H                        H
//!      \      /                          / \
//!    cM \----/ cH   <- surface     cL  /___\ cM   <- surface
//!        \  /                         /     \
//!         L                          L-------M
//! ```
//!
//! Cut points are found by linear interpolation of the signed distances, and
//! the water is queried again at each cut point since it is a new position.

use bevy::math::Vec3;
use bevy::transform::components::Transform;
use bevy_log::warn;
use serde::{Deserialize, Serialize};

use super::triangle::TriangleGeometry;
use crate::constants::NON_FINITE_DISTANCE_ERROR;
use crate::error::{BuoyancyError, Result};
use crate::water::WaterSurfaceQuery;

/// Fragments produced from one source triangle (zero, one or two).
pub type FragmentSet = Vec<TriangleGeometry>;

/// Which side of the surface a vertex is on. A vertex exactly on the surface
/// is above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Submersion {
    Above,
    Below,
}

impl Submersion {
    #[inline]
    pub fn of(distance: f32) -> Self {
        if distance < 0.0 {
            Submersion::Below
        } else {
            Submersion::Above
        }
    }
}

/// Signed water distances and sides for the three vertices of a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub distances: [f32; 3],
    pub sides: [Submersion; 3],
}

impl Classification {
    pub fn from_distances(distances: [f32; 3]) -> Self {
        Self {
            distances,
            sides: distances.map(Submersion::of),
        }
    }

    pub fn submerged_count(&self) -> usize {
        self.sides
            .iter()
            .filter(|&&side| side == Submersion::Below)
            .count()
    }

    /// Index of the first vertex on `side`.
    pub fn first_on(&self, side: Submersion) -> Option<usize> {
        self.sides.iter().position(|&s| s == side)
    }
}

/// A new vertex where an edge crosses the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutPoint {
    pub position: Vec3,
    /// Fraction of the way from the submerged endpoint to the dry one.
    pub fraction: f32,
}

/// Intersect the edge `below -> above` with the surface, assuming the signed
/// distance varies linearly along it.
#[inline]
pub fn cut_point(below: Vec3, below_distance: f32, above: Vec3, above_distance: f32) -> CutPoint {
    let fraction = -below_distance / (above_distance - below_distance);
    CutPoint {
        position: below + fraction * (above - below),
        fraction,
    }
}

/// Submerged and above-water fragments of one source triangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClippedTriangle {
    pub submerged: FragmentSet,
    pub above_water: FragmentSet,
}

/// Query the water at a body-local point.
fn sample<W>(water: &W, transform: &Transform, local: Vec3) -> Result<f32>
where
    W: WaterSurfaceQuery + ?Sized,
{
    let world = transform.transform_point(local);
    let distance = water.signed_distance(world);
    if distance.is_finite() {
        Ok(distance)
    } else {
        warn!("{} at {:?}: {}", NON_FINITE_DISTANCE_ERROR, world, distance);
        Err(BuoyancyError::InvalidArgument(format!(
            "{NON_FINITE_DISTANCE_ERROR} at {world:?}"
        )))
    }
}

/// Sample the three vertices of a triangle and classify them.
pub fn classify<W>(vertices: &[Vec3; 3], transform: &Transform, water: &W) -> Result<Classification>
where
    W: WaterSurfaceQuery + ?Sized,
{
    let distances = [
        sample(water, transform, vertices[0])?,
        sample(water, transform, vertices[1])?,
        sample(water, transform, vertices[2])?,
    ];
    Ok(Classification::from_distances(distances))
}

/// Split a body-local triangle into its submerged and above-water parts.
///
/// Queries the water once per vertex and once per cut point.
pub fn clip_triangle<W>(
    vertices: [Vec3; 3],
    transform: &Transform,
    water: &W,
) -> Result<ClippedTriangle>
where
    W: WaterSurfaceQuery + ?Sized,
{
    let classification = classify(&vertices, transform, water)?;
    let d = classification.distances;
    let fragment = |v: [Vec3; 3], dist: [f32; 3]| TriangleGeometry::from_arrays(v, dist, transform);

    match classification.submerged_count() {
        3 => Ok(ClippedTriangle {
            submerged: vec![fragment(vertices, d)],
            above_water: Vec::new(),
        }),
        0 => Ok(ClippedTriangle {
            submerged: Vec::new(),
            above_water: vec![fragment(vertices, d)],
        }),
        2 => {
            let h = classification
                .first_on(Submersion::Above)
                .ok_or(BuoyancyError::InternalInvariant(2))?;
            let l = (h + 1) % 3;
            let m = (h + 2) % 3;
            let (vh, vl, vm) = (vertices[h], vertices[l], vertices[m]);
            let (dh, dl, dm) = (d[h], d[l], d[m]);

            let cm = cut_point(vm, dm, vh, dh).position;
            let cl = cut_point(vl, dl, vh, dh).position;
            let dcm = sample(water, transform, cm)?;
            let dcl = sample(water, transform, cl)?;

            Ok(ClippedTriangle {
                submerged: vec![
                    fragment([vl, vm, cm], [dl, dm, dcm]),
                    fragment([vl, cm, cl], [dl, dcm, dcl]),
                ],
                above_water: vec![fragment([vh, cl, cm], [dh, dcl, dcm])],
            })
        }
        1 => {
            let l = classification
                .first_on(Submersion::Below)
                .ok_or(BuoyancyError::InternalInvariant(1))?;
            let m = (l + 1) % 3;
            let h = (l + 2) % 3;
            let (vl, vm, vh) = (vertices[l], vertices[m], vertices[h]);
            let (dl, dm, dh) = (d[l], d[m], d[h]);

            let cm = cut_point(vl, dl, vm, dm).position;
            let ch = cut_point(vl, dl, vh, dh).position;
            let dcm = sample(water, transform, cm)?;
            let dch = sample(water, transform, ch)?;

            Ok(ClippedTriangle {
                submerged: vec![fragment([ch, vl, cm], [dch, dl, dcm])],
                above_water: vec![
                    fragment([vm, vh, ch], [dm, dh, dch]),
                    fragment([vm, ch, cm], [dm, dch, dcm]),
                ],
            })
        }
        n => Err(BuoyancyError::InternalInvariant(n)),
    }
}
