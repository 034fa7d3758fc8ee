//! Hydrostatic buoyancy for triangle-mesh bodies.
//!
//! Once per simulation step a [`BuoyantMesh`] clips every triangle of a body's
//! surface against the water, splitting it into submerged and above-water
//! fragments. The [`BuoyancyForceModel`] then turns each submerged fragment
//! into a vertical force applied at the fragment's centroid.
//!
//! ```text
//!  WaterSurfaceQuery ──► classify ──► clip ──► TriangleGeometry ──► Partition
//!                                                                      │
//!                        host rigid body ◄── (force, point) ◄── BuoyancyForceModel
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod force;
pub mod mesh;
pub mod physics;
pub mod sets;
pub mod water;

pub use config::BuoyancyConfig;
pub use constants::*;
pub use error::{BuoyancyError, Result};
pub use force::{AppliedForce, BuoyancyForceModel, Wrench};
pub use mesh::{BuoyantMesh, FragmentSet, Partition, TriangleGeometry};
pub use water::{FlatWater, WaterSurfaceQuery};
