//! Runtime buoyancy configuration.

use bevy::math::Vec3;
use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use crate::constants::{GRAVITY, SEA_WATER_DENSITY};

/// Runtime buoyancy configuration resource.
///
/// Shared by every buoyant body in the app. The host may swap density or
/// gravity between steps (e.g. a body drifting from sea water into a lake).
#[derive(Resource, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BuoyancyConfig {
    /// Whether buoyancy forces are computed at all.
    pub enabled: bool,

    /// Fluid density (kg/m³).
    pub fluid_density: f32,

    /// Gravity vector. Only its vertical component feeds the force model,
    /// so its sign is preserved.
    pub gravity: Vec3,
}

impl Default for BuoyancyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fluid_density: SEA_WATER_DENSITY,
            gravity: GRAVITY,
        }
    }
}

impl BuoyancyConfig {
    pub fn with_density(mut self, fluid_density: f32) -> Self {
        self.fluid_density = fluid_density;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuoyancyConfig::default();
        assert!(config.enabled);
        assert_eq!(config.fluid_density, 1027.0);
        assert!(config.gravity.y < 0.0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = BuoyancyConfig::default()
            .with_density(1000.0)
            .with_gravity(Vec3::new(0.0, -20.0, 0.0));
        assert_eq!(config.fluid_density, 1000.0);
        assert_eq!(config.gravity.y, -20.0);
    }
}
