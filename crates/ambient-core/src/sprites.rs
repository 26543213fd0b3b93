//! Platform-neutral draw list for one frame.
//!
//! Both frontends draw the same three layers in order: the fog around the
//! light, the particles, then the bright core. The web frontend maps each
//! sprite to Canvas 2D gradient calls; the native one uploads them as GPU
//! instances, hence the `Pod` layout.

use crate::config::AmbientConfig;
use crate::constants::*;
use crate::scene::AmbientScene;
use bytemuck::{Pod, Zeroable};

#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Fog = 0,
    Particle = 1,
    Core = 2,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct GlowSprite {
    pub center: [f32; 2],
    pub radius: f32,
    /// Peak alpha, already scaled by light intensity.
    pub alpha: f32,
    pub blur: f32,
    pub kind: u32,
}

impl GlowSprite {
    pub fn sprite_kind(&self) -> SpriteKind {
        match self.kind {
            0 => SpriteKind::Fog,
            1 => SpriteKind::Particle,
            _ => SpriteKind::Core,
        }
    }
}

/// Radius of the fog glow for a config.
#[inline]
pub fn fog_radius(config: &AmbientConfig) -> f32 {
    FOG_BASE_RADIUS * config.fog_density
}

/// Particle opacity: fades with age and with distance from the light.
#[inline]
pub fn particle_alpha(life_fraction: f32, distance: f32, intensity: f32) -> f32 {
    let proximity = (1.0 - distance / PARTICLE_FADE_DISTANCE).max(0.0);
    life_fraction * intensity * proximity * PARTICLE_ALPHA_SCALE
}

/// Fill `out` with the frame's sprites, reusing its allocation.
/// Invisible particles are skipped.
pub fn build_sprites(scene: &AmbientScene, out: &mut Vec<GlowSprite>) {
    out.clear();
    let config = scene.config();
    let light = scene.light().position;
    let intensity = config.light_intensity;

    out.push(GlowSprite {
        center: light.to_array(),
        radius: fog_radius(config),
        alpha: FOG_STOPS[0].1 * intensity,
        blur: 0.0,
        kind: SpriteKind::Fog as u32,
    });

    for p in scene.particles().particles() {
        let alpha = particle_alpha(p.life_fraction(), p.position.distance(light), intensity);
        if alpha <= 0.0 {
            continue;
        }
        out.push(GlowSprite {
            center: p.position.to_array(),
            radius: p.size,
            alpha,
            blur: PARTICLE_BLUR,
            kind: SpriteKind::Particle as u32,
        });
    }

    out.push(GlowSprite {
        center: light.to_array(),
        radius: CORE_RADIUS,
        alpha: CORE_STOPS[0].1 * intensity,
        blur: CORE_BLUR,
        kind: SpriteKind::Core as u32,
    });
}
