use super::constants::{DENSITY_AREA_UNIT, FLOATING_DOT_RADIUS, FLOATING_MAX_SPEED};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingDot {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Number of dots for a viewport at `density` dots per 10,000 px².
pub fn dot_count_for(viewport: Vec2, density: f32) -> usize {
    let area = viewport.x.max(0.0) * viewport.y.max(0.0);
    ((area / DENSITY_AREA_UNIT) * density).round().max(0.0) as usize
}

/// Reflect one axis off the [0, bound] walls. Returns true on a bounce.
#[inline]
pub fn bounce_axis(pos: &mut f32, vel: &mut f32, bound: f32) -> bool {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = -*vel;
        true
    } else if *pos > bound {
        *pos = bound;
        *vel = -*vel;
        true
    } else {
        false
    }
}

/// Free-floating dots bouncing off the viewport edges.
#[derive(Clone, Debug, Default)]
pub struct FloatingField {
    pub dots: Vec<FloatingDot>,
    viewport: Vec2,
    density: f32,
}

impl FloatingField {
    pub fn new<R: Rng>(viewport: Vec2, density: f32, rng: &mut R) -> Self {
        let mut field = Self {
            dots: Vec::new(),
            viewport,
            density,
        };
        field.initialize(viewport, rng);
        field
    }

    pub fn initialize<R: Rng>(&mut self, viewport: Vec2, rng: &mut R) {
        self.viewport = viewport;
        let n = dot_count_for(viewport, self.density);
        self.dots = (0..n)
            .map(|_| FloatingDot {
                pos: Vec2::new(
                    rng.gen::<f32>() * viewport.x,
                    rng.gen::<f32>() * viewport.y,
                ),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * FLOATING_MAX_SPEED,
                    (rng.gen::<f32>() - 0.5) * 2.0 * FLOATING_MAX_SPEED,
                ),
                radius: FLOATING_DOT_RADIUS,
            })
            .collect();
    }

    pub fn resize<R: Rng>(&mut self, viewport: Vec2, rng: &mut R) {
        self.initialize(viewport, rng);
    }

    pub fn step(&mut self) {
        let bounds = self.viewport;
        for dot in &mut self.dots {
            dot.pos += dot.vel;
            bounce_axis(&mut dot.pos.x, &mut dot.vel.x, bounds.x);
            bounce_axis(&mut dot.pos.y, &mut dot.vel.y, bounds.y);
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn positions(&self, out: &mut Vec<(Vec2, f32)>) {
        out.clear();
        out.extend(self.dots.iter().map(|d| (d.pos, d.radius)));
    }
}
