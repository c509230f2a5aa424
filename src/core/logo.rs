use super::constants::{LOGO_HEIGHT, LOGO_MAX_SPEED, LOGO_WIDTH};
use glam::Vec2;
use rand::Rng;

/// Axis-aligned box drifting around its container, DVD-screensaver style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BouncingBox {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl BouncingBox {
    pub fn new(size: Vec2, vel: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel,
            size,
        }
    }

    /// Logo-sized box starting at the container origin with a random heading.
    pub fn logo<R: Rng>(rng: &mut R) -> Self {
        let vel = Vec2::new(
            (rng.gen::<f32>() * 2.0 - 1.0) * LOGO_MAX_SPEED,
            (rng.gen::<f32>() * 2.0 - 1.0) * LOGO_MAX_SPEED,
        );
        Self::new(Vec2::new(LOGO_WIDTH, LOGO_HEIGHT), vel)
    }

    /// Move one tick inside a `container`-sized area, reflecting off its edges.
    pub fn step(&mut self, container: Vec2) {
        let mut next = self.pos + self.vel;
        let limit = (container - self.size).max(Vec2::ZERO);

        if next.x < 0.0 || next.x > limit.x {
            self.vel.x = -self.vel.x;
            next.x = if next.x < 0.0 { 0.0 } else { limit.x };
        }
        if next.y < 0.0 || next.y > limit.y {
            self.vel.y = -self.vel.y;
            next.y = if next.y < 0.0 { 0.0 } else { limit.y };
        }
        self.pos = next;
    }
}
