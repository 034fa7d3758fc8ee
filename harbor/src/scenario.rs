use std::fs;
use std::path::Path;

use bevy::prelude::*;
use bevy_log::info;
use buoyancy::water::WavePreset;
use buoyancy::{DEFAULT_HULL_DENSITY, SEA_WATER_DENSITY};
use ron::de::from_str;
use serde::{Deserialize, Serialize};

/// What the demo drops into the water.
#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Scenario {
    /// Half size of the box hull
    pub half_extents: Vec3,
    /// Height of the hull centre above the water at spawn
    pub drop_height: f32,
    /// Rest level of the water surface
    pub water_level: f32,
    pub preset: WavePreset,
    /// Fluid density (kg/m³)
    pub fluid_density: f32,
    /// Hull density (kg/m³), below the fluid density for the hull to float
    pub hull_density: f32,
    /// Rapier linear and angular damping on the hull
    pub damping: f32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            half_extents: Vec3::new(1.0, 0.5, 2.0),
            drop_height: 3.0,
            water_level: 0.0,
            preset: WavePreset::Calm,
            fluid_density: SEA_WATER_DENSITY,
            hull_density: DEFAULT_HULL_DENSITY,
            damping: 0.8,
        }
    }
}

impl Scenario {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.fluid_density.is_finite() && self.fluid_density > 0.0) {
            return Err(format!(
                "fluid density must be a positive number, got {}",
                self.fluid_density
            ));
        }
        if !(self.hull_density.is_finite() && self.hull_density > 0.0) {
            return Err(format!(
                "hull density must be a positive number, got {}",
                self.hull_density
            ));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(format!("damping must not be negative, got {}", self.damping));
        }
        if !self.half_extents.is_finite() || self.half_extents.min_element() <= 0.0 {
            return Err(format!(
                "hull half extents must be positive, got {}",
                self.half_extents
            ));
        }
        Ok(())
    }
}

pub fn load_scenario(path: &Path) -> Result<Scenario, Box<dyn std::error::Error>> {
    let contents: String = fs::read_to_string(path)?;
    let scenario: Scenario = from_str(&contents)?;

    info!("Loaded scenario from {}", path.display());

    Ok(scenario)
}
