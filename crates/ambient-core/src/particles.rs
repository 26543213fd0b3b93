//! Fixed-size particle pool orbiting the light.
//!
//! Particles are never created or destroyed after initialisation: a particle
//! that dies of age or drifts too far is respawned in place on a ring around
//! the light with its original `max_life`.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Ticks left before the next respawn; never exceeds `max_life`.
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
}

impl Particle {
    /// Remaining life as a fraction of `max_life`, used for fading.
    #[inline]
    pub fn life_fraction(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Build `count` particles scattered uniformly over a `bounds`-sized surface.
    pub fn new(count: usize, bounds: Vec2, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(count),
            rng: StdRng::seed_from_u64(seed),
        };
        for _ in 0..count {
            let p = field.spawn(bounds);
            field.particles.push(p);
        }
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Scatter every particle afresh over a new surface size. The pool keeps
    /// its length and its allocation.
    pub fn reinitialize(&mut self, bounds: Vec2) {
        for i in 0..self.particles.len() {
            self.particles[i] = self.spawn(bounds);
        }
    }

    /// Advance every particle one tick toward `light`.
    pub fn step(&mut self, light: Vec2) {
        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];
            let to_light = light - p.position;
            let distance = to_light.length();
            if distance > 0.0 {
                p.velocity += to_light / distance * PARTICLE_ATTRACTION;
            }
            p.velocity *= PARTICLE_DAMPING;
            p.position += p.velocity;
            p.life = p.life.saturating_sub(1);

            if p.life == 0 || distance > PARTICLE_ESCAPE_RADIUS {
                self.respawn(i, light);
            }
        }
    }

    fn respawn(&mut self, i: usize, light: Vec2) {
        let angle = self.rng.gen::<f32>() * TAU;
        let radius = RESPAWN_RING_MIN + self.rng.gen::<f32>() * RESPAWN_RING_SPAN;
        let velocity = Vec2::new(
            self.rng.gen_range(-RESPAWN_SPEED_MAX..=RESPAWN_SPEED_MAX),
            self.rng.gen_range(-RESPAWN_SPEED_MAX..=RESPAWN_SPEED_MAX),
        );
        let p = &mut self.particles[i];
        p.position = light + Vec2::from_angle(angle) * radius;
        p.life = p.max_life;
        p.velocity = velocity;
    }

    fn spawn(&mut self, bounds: Vec2) -> Particle {
        let rng = &mut self.rng;
        let position = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let angle = rng.gen::<f32>() * TAU;
        let speed = SPAWN_SPEED_MIN + rng.gen::<f32>() * SPAWN_SPEED_SPAN;
        let max_life = LIFE_MIN + rng.gen_range(0..LIFE_SPAN);
        let life = rng.gen_range(LIFE_MIN..=max_life);
        Particle {
            position,
            velocity: Vec2::from_angle(angle) * speed,
            life,
            max_life,
            size: SIZE_MIN + rng.gen::<f32>() * SIZE_SPAN,
        }
    }
}
