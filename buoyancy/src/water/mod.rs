//! Water surfaces a buoyant mesh can be clipped against.
//!
//! Everything the clipper knows about water goes through
//! [`WaterSurfaceQuery`]. This module ships two analytic implementations:
//! a flat plane and a Gerstner wave field. The ray-cast implementation lives
//! with the rapier integration in [`crate::physics`].

pub mod config;
pub mod physics;
pub mod query;

pub use config::{WaveConfig, WaveParams, WavePreset};
pub use physics::{WaterPhysicsWorld, WaveSurface};
pub use query::{FlatWater, WaterSurfaceQuery};
