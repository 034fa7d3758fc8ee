//! Clipping a body's surface mesh against the water.

pub mod clip;
pub mod display;
pub mod partition;
pub mod shapes;
pub mod triangle;

pub use clip::{clip_triangle, ClippedTriangle, FragmentSet, Submersion};
pub use display::{build_display_mesh, DisplayMesh, FragmentSide};
pub use partition::{BuoyantMesh, Partition};
pub use triangle::TriangleGeometry;
