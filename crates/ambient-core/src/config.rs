//! Construction-time configuration for the ambient light.

use crate::constants::{
    DEFAULT_FOG_DENSITY, DEFAULT_LIGHT_INTENSITY, DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("light intensity must be a finite, non-negative number (got {0})")]
    LightIntensity(f32),
    #[error("fog density must be a finite, non-negative number (got {0})")]
    FogDensity(f32),
    #[error("particle count must be at most {max} (got {got})")]
    ParticleCount { got: usize, max: usize },
}

/// Visual knobs fixed when the scene is built.
///
/// `light_intensity` multiplies every alpha the renderer emits, `fog_density`
/// scales the fog radius and `particle_count` sizes the particle pool.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientConfig {
    pub light_intensity: f32,
    pub fog_density: f32,
    pub particle_count: usize,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            light_intensity: DEFAULT_LIGHT_INTENSITY,
            fog_density: DEFAULT_FOG_DENSITY,
            particle_count: DEFAULT_PARTICLE_COUNT,
        }
    }
}

impl AmbientConfig {
    pub fn with_light_intensity(mut self, light_intensity: f32) -> Self {
        self.light_intensity = light_intensity;
        self
    }

    pub fn with_fog_density(mut self, fog_density: f32) -> Self {
        self.fog_density = fog_density;
        self
    }

    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.light_intensity.is_finite() || self.light_intensity < 0.0 {
            return Err(ConfigError::LightIntensity(self.light_intensity));
        }
        if !self.fog_density.is_finite() || self.fog_density < 0.0 {
            return Err(ConfigError::FogDensity(self.fog_density));
        }
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::ParticleCount {
                got: self.particle_count,
                max: MAX_PARTICLE_COUNT,
            });
        }
        Ok(())
    }

    /// Consume the config, returning it only if it validates.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }
}
