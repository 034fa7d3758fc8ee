use bevy::prelude::*;

/// Sea water density (kg/m³).
pub const SEA_WATER_DENSITY: f32 = 1027.0;
/// Fresh water density (kg/m³).
pub const FRESH_WATER_DENSITY: f32 = 1000.0;
/// Default density of a floating hull (kg/m³), about half that of sea water.
pub const DEFAULT_HULL_DENSITY: f32 = 500.0;
/// Standard gravity along the vertical axis, negative for downward.
pub const STANDARD_GRAVITY: f32 = -9.81;
pub const GRAVITY: Vec3 = Vec3 {
    x: 0.0,
    y: STANDARD_GRAVITY,
    z: 0.0,
};
pub const INVALID_INDEX_BUFFER_ERROR: &str = "Index list length must be divisible by 3";
pub const NON_FINITE_DISTANCE_ERROR: &str = "Water query returned a non-finite distance";
