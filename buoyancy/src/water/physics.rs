//! Gerstner wave height sampling.
//!
//! Only heights are needed for buoyancy, so the sampler precomputes the wave
//! constants once and evaluates `base + Σ a·cos(k·(d·p) - ω·t)` per query.

use super::config::WaveConfig;
use super::query::WaterSurfaceQuery;
use bevy::math::Vec3;

/// Precomputed constants for a single wave.
#[derive(Debug, Clone, Copy, Default)]
struct WaveConstants {
    /// Wave number k = 2π / wavelength
    k: f32,
    /// Angular frequency ω = k * speed
    omega: f32,
    /// Amplitude including the global scale
    amplitude: f32,
    dir_x: f32,
    dir_z: f32,
}

/// Height sampler for an analytic wave surface.
#[derive(Debug, Clone)]
pub struct WaterPhysicsWorld {
    config: WaveConfig,
    wave_constants: Vec<WaveConstants>,
}

impl WaterPhysicsWorld {
    pub fn new(config: WaveConfig) -> Self {
        let wave_constants = config
            .waves
            .iter()
            .map(|wave| WaveConstants {
                k: wave.wave_number(),
                omega: wave.frequency(),
                amplitude: wave.amplitude() * config.amplitude_scale,
                dir_x: wave.direction.x,
                dir_z: wave.direction.y,
            })
            .collect();

        Self {
            config,
            wave_constants,
        }
    }

    /// Replace the wave configuration (e.g. when the weather changes).
    pub fn set_config(&mut self, config: WaveConfig) {
        *self = Self::new(config);
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Surface height (Y) above the XZ position at `time`.
    #[inline]
    pub fn sample_height(&self, x: f32, z: f32, time: f32) -> f32 {
        let mut height = self.config.base_level;

        for wc in &self.wave_constants {
            let phase = wc.k * (wc.dir_x * x + wc.dir_z * z) - wc.omega * time;
            height += wc.amplitude * phase.cos();
        }

        height
    }

    /// How deep below the surface a point is. Negative above water.
    #[inline]
    pub fn depth_at(&self, position: Vec3, time: f32) -> f32 {
        self.sample_height(position.x, position.z, time) - position.y
    }

    #[inline]
    pub fn is_underwater(&self, position: Vec3, time: f32) -> bool {
        self.depth_at(position, time) > 0.0
    }

    /// Freeze the surface at `time` so it can be handed to the clipper.
    pub fn surface_at(&self, time: f32) -> WaveSurface<'_> {
        WaveSurface { world: self, time }
    }
}

impl Default for WaterPhysicsWorld {
    fn default() -> Self {
        Self::new(WaveConfig::new(0.0))
    }
}

/// A wave surface frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct WaveSurface<'a> {
    world: &'a WaterPhysicsWorld,
    time: f32,
}

impl WaterSurfaceQuery for WaveSurface<'_> {
    #[inline]
    fn signed_distance(&self, point: Vec3) -> f32 {
        -self.world.depth_at(point, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water::config::WavePreset;

    #[test]
    fn test_still_water_height() {
        let physics = WaterPhysicsWorld::new(WavePreset::Still.to_config(10.0));

        assert_eq!(physics.sample_height(0.0, 0.0, 0.0), 10.0);
        assert_eq!(physics.sample_height(100.0, 100.0, 5.0), 10.0);
    }

    #[test]
    fn test_ocean_wave_variation() {
        let physics = WaterPhysicsWorld::new(WavePreset::Ocean.to_config(10.0));

        let h1 = physics.sample_height(0.0, 0.0, 0.0);
        let h2 = physics.sample_height(0.0, 0.0, 1.0);
        let h3 = physics.sample_height(5.0, 5.0, 0.0);

        assert_ne!(h1, h2);
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_height_stays_within_amplitude() {
        let config = WavePreset::Storm.to_config(0.0);
        let bound = config.max_amplitude() + 1e-4;
        let physics = WaterPhysicsWorld::new(config);

        for i in 0..50 {
            let x = i as f32 * 0.73;
            let h = physics.sample_height(x, -x, i as f32 * 0.1);
            assert!(h.abs() <= bound);
        }
    }

    #[test]
    fn test_wave_surface_sign_matches_depth() {
        let physics = WaterPhysicsWorld::new(WavePreset::Still.to_config(10.0));
        let surface = physics.surface_at(0.0);

        assert_eq!(surface.signed_distance(Vec3::new(0.0, 5.0, 0.0)), -5.0);
        assert_eq!(surface.signed_distance(Vec3::new(0.0, 15.0, 0.0)), 5.0);
        assert!(physics.is_underwater(Vec3::new(0.0, 5.0, 0.0), 0.0));
        assert!(!physics.is_underwater(Vec3::new(0.0, 15.0, 0.0), 0.0));
    }
}
