//! Host-side integration with bevy and rapier.
//!
//! The clipping core is engine-agnostic; this module is one way to wire it
//! into an app: a component per buoyant body, a fixed-step system that writes
//! rapier external forces, and a ray-cast water query.

pub mod plugin;
pub mod raycast;

pub use plugin::{
    apply_buoyancy_forces, BuoyancyPlugin, BuoyantBody, HullPhysicsBundle, WaterSurface,
};
pub use raycast::{RaycastSettings, RaycastWater, WaterVolume};

/// Collision groups used by buoyant scenes.
pub mod collision_groups {
    use bevy_rapier3d::prelude::Group;

    /// Floating hulls
    pub const HULL: Group = Group::GROUP_1;
    /// Water volumes, found by [`super::RaycastWater`]
    pub const WATER: Group = Group::GROUP_5;
}
