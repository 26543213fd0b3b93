//! The single owned state of the ambient light and its per-tick update.
//!
//! Frontends own one [`AmbientScene`], feed it pointer moves, surface
//! changes and the region layout, and call [`AmbientScene::tick`] once per
//! displayed frame. Nothing here touches a platform API.

use crate::commentary::{Commentary, MessageId};
use crate::config::{AmbientConfig, ConfigError};
use crate::light::Light;
use crate::particles::ParticleField;
use crate::region::{RegionId, RegionRegistry};
use crate::resolver::{resolve, Resolution};
use glam::Vec2;
use std::time::Duration;

/// Last raw pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Placement of the drawing surface inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surface {
    pub origin: Vec2,
    pub size: Vec2,
}

/// What happened during one tick, for frontends that react to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub resolution: Option<Resolution>,
    pub emitted: Vec<MessageId>,
}

pub struct AmbientScene {
    config: AmbientConfig,
    pointer: PointerState,
    surface: Option<Surface>,
    light: Light,
    field: ParticleField,
    commentary: Commentary,
    registry: RegionRegistry,
    hovered: Option<RegionId>,
    last_target: Option<Vec2>,
}

impl AmbientScene {
    /// Build a scene with a validated config. The particle pool is sized and
    /// seeded here; it is scattered over the surface once one is attached.
    pub fn new(config: AmbientConfig, seed: u64) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let field = ParticleField::new(config.particle_count, Vec2::ZERO, seed);
        Ok(Self {
            config,
            pointer: PointerState::default(),
            surface: None,
            light: Light::default(),
            field,
            commentary: Commentary::new(),
            registry: RegionRegistry::new(),
            hovered: None,
            last_target: None,
        })
    }

    /// Swap in a registry with different indexing (e.g. a spatial grid).
    pub fn with_registry(mut self, registry: RegionRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &AmbientConfig {
        &self.config
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn particles(&self) -> &ParticleField {
        &self.field
    }

    pub fn commentary(&self) -> &Commentary {
        &self.commentary
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut RegionRegistry {
        &mut self.registry
    }

    pub fn hovered(&self) -> Option<RegionId> {
        self.hovered
    }

    /// Target the light eased toward on the most recent tick.
    pub fn last_target(&self) -> Option<Vec2> {
        self.last_target
    }

    /// Record a raw pointer move (viewport coordinates).
    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = PointerState { x, y };
    }

    /// Attach or move/resize the surface. A size change reinitialises the
    /// particle pool across the new bounds.
    pub fn set_surface(&mut self, surface: Surface) {
        let resized = self.surface.map(|s| s.size) != Some(surface.size);
        self.surface = Some(surface);
        if resized {
            log::info!(
                "[resize] surface {:.0}x{:.0}; reseeding {} particles",
                surface.size.x,
                surface.size.y,
                self.field.len()
            );
            self.field.reinitialize(surface.size);
        }
    }

    /// Detach the surface; subsequent ticks are no-ops until one is set again.
    pub fn detach(&mut self) {
        self.surface = None;
        self.hovered = None;
        self.commentary.clear();
    }

    /// One animation tick. `now` is the time elapsed since mount.
    ///
    /// Order: resolve the target, ease the light, step the particles, then
    /// update commentary. Without a surface the tick does nothing.
    pub fn tick(&mut self, now: Duration) -> TickReport {
        let Some(surface) = self.surface else {
            return TickReport::default();
        };
        let mut report = TickReport::default();

        let resolution = resolve(self.pointer.as_vec2(), surface.origin, &self.registry);
        self.hovered = resolution.hovered.map(|h| h.id);
        self.last_target = Some(resolution.target);

        self.light.ease_toward(resolution.target);
        self.field.step(self.light.position);

        report.emitted.extend(self.commentary.maybe_welcome(now, surface.size));
        let hovered = resolution.hovered.and_then(|h| {
            self.registry
                .regions()
                .get(h.index)
                .map(|region| (h.id, h.rect, &region.traits))
        });
        report.emitted.extend(self.commentary.observe(hovered, now));
        self.commentary.tick();

        report.resolution = Some(resolution);
        report
    }
}
