use crate::constants::{LIGHT_LERP, LIGHT_START};
use glam::Vec2;

/// The glowing point that trails the resolved target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec2,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec2::from(LIGHT_START),
        }
    }
}

impl Light {
    pub fn at(position: Vec2) -> Self {
        Self { position }
    }

    /// Exponential smoothing: close a fixed fraction of the gap each tick.
    /// Never overshoots and never lands exactly on a distinct target.
    #[inline]
    pub fn ease_toward(&mut self, target: Vec2) {
        self.position += (target - self.position) * LIGHT_LERP;
    }
}

/// Closed form of `n` easing steps from `start` toward a fixed `target`.
#[inline]
pub fn eased_after(start: Vec2, target: Vec2, n: u32) -> Vec2 {
    target - (target - start) * (1.0 - LIGHT_LERP).powi(n as i32)
}
