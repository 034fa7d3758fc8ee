//! Analytic wave surface configuration.
//!
//! A buoyant body only needs the surface height under a point, so this keeps
//! the Gerstner parameters and nothing else.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Maximum number of superimposed waves.
pub const MAX_WAVES: usize = 4;

/// Parameters of a single Gerstner wave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Travel direction (normalized 2D vector in the XZ plane)
    pub direction: Vec2,
    /// Steepness (0.0 = sine wave, 1.0 = sharp crest)
    pub steepness: f32,
    /// Wavelength in world units
    pub wavelength: f32,
    /// Phase speed in world units per second
    pub speed: f32,
}

impl WaveParams {
    pub fn new(direction: Vec2, steepness: f32, wavelength: f32, speed: f32) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            steepness: steepness.clamp(0.0, 1.0),
            wavelength: wavelength.max(0.1),
            speed,
        }
    }

    /// k = 2π / wavelength
    #[inline]
    pub fn wave_number(&self) -> f32 {
        2.0 * PI / self.wavelength
    }

    /// ω = k * speed
    #[inline]
    pub fn frequency(&self) -> f32 {
        self.wave_number() * self.speed
    }

    /// Crest height above the mean level before global scaling.
    #[inline]
    pub fn amplitude(&self) -> f32 {
        self.steepness / self.wave_number()
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self::new(Vec2::X, 0.3, 4.0, 1.0)
    }
}

/// Full water surface description: a mean level plus up to [`MAX_WAVES`] waves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub waves: Vec<WaveParams>,
    /// Mean water level (Y coordinate)
    pub base_level: f32,
    /// Global amplitude multiplier
    pub amplitude_scale: f32,
}

impl WaveConfig {
    /// Flat water at `base_level`.
    pub fn new(base_level: f32) -> Self {
        Self {
            waves: Vec::new(),
            base_level,
            amplitude_scale: 1.0,
        }
    }

    /// Add a wave. Returns false if the configuration is already full.
    pub fn add_wave(&mut self, params: WaveParams) -> bool {
        if self.waves.len() < MAX_WAVES {
            self.waves.push(params);
            true
        } else {
            false
        }
    }

    /// Highest possible surface elevation above `base_level`.
    pub fn max_amplitude(&self) -> f32 {
        self.waves.iter().map(WaveParams::amplitude).sum::<f32>() * self.amplitude_scale
    }
}

/// Named water conditions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum WavePreset {
    /// Completely flat water
    #[default]
    Still,
    /// Barely rippling water
    Calm,
    /// Lake with gentle waves
    Lake,
    /// Open sea swell
    Ocean,
    /// Heavy storm swell
    Storm,
}

impl WavePreset {
    pub fn to_config(self, base_level: f32) -> WaveConfig {
        let mut config = WaveConfig::new(base_level);

        match self {
            WavePreset::Still => {}
            WavePreset::Calm => {
                config.amplitude_scale = 0.3;
                config.add_wave(WaveParams::new(Vec2::new(1.0, 0.2), 0.2, 6.0, 0.5));
            }
            WavePreset::Lake => {
                config.amplitude_scale = 0.5;
                config.add_wave(WaveParams::new(Vec2::new(1.0, 0.0), 0.3, 4.0, 0.8));
                config.add_wave(WaveParams::new(Vec2::new(0.3, 1.0), 0.2, 2.5, 1.0));
            }
            WavePreset::Ocean => {
                config.add_wave(WaveParams::new(Vec2::new(1.0, 0.3), 0.6, 8.0, 1.5));
                config.add_wave(WaveParams::new(Vec2::new(-0.7, 1.0), 0.5, 5.0, 1.8));
                config.add_wave(WaveParams::new(Vec2::new(0.5, -1.0), 0.4, 3.0, 2.2));
            }
            WavePreset::Storm => {
                config.amplitude_scale = 2.0;
                config.add_wave(WaveParams::new(Vec2::new(1.0, 0.2), 0.8, 12.0, 2.0));
                config.add_wave(WaveParams::new(Vec2::new(-0.5, 1.0), 0.7, 8.0, 2.5));
                config.add_wave(WaveParams::new(Vec2::new(0.7, -0.7), 0.6, 5.0, 3.0));
                config.add_wave(WaveParams::new(Vec2::new(-1.0, -0.3), 0.5, 3.0, 3.5));
            }
        }

        config
    }
}
