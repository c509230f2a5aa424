use super::constants::{RADIUS_PROPORTION, RING_COUNT, RING_DOT_SIZE};
use super::settings::Settings;
use glam::Vec2;
use std::f32::consts::TAU;

/// A dot fixed on its ring; the ring's rotation is applied at draw time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingDot {
    pub angle: f32,
    pub radius: f32,
    pub size: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Ring {
    pub dots: Vec<RingDot>,
    /// Accumulated rotation, kept within [-2π, 2π].
    pub angle: f32,
    /// Signed radians per tick.
    pub speed: f32,
}

impl Ring {
    /// Advance the rotation by one tick, wrapping at ±2π.
    pub fn step(&mut self) {
        self.angle = wrap_angle(self.angle + self.speed);
    }
}

#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    if angle.abs() >= TAU {
        angle % TAU
    } else {
        angle
    }
}

/// Rotation speed of each ring: ring 1 turns at `base * proportion`, every
/// following ring at the previous ring's speed times `proportion`.
pub fn ring_speeds(base: f64, proportion: f64) -> [f32; RING_COUNT] {
    let mut speeds = [0.0f32; RING_COUNT];
    let mut speed = base;
    for s in speeds.iter_mut() {
        speed *= proportion;
        *s = speed as f32;
    }
    speeds
}

/// Outer ring fills the shorter viewport side; inner rings shrink geometrically.
pub fn ring_radii(viewport: Vec2) -> [f32; RING_COUNT] {
    let mut radii = [0.0f32; RING_COUNT];
    let mut r = viewport.x.min(viewport.y).max(0.0) / 2.0;
    for slot in radii.iter_mut() {
        *slot = r;
        r *= RADIUS_PROPORTION;
    }
    radii
}

/// Evenly spaced dots around one ring.
pub fn seed_ring(count: usize, radius: f32) -> Vec<RingDot> {
    (0..count)
        .map(|i| RingDot {
            angle: (i as f32 / count as f32) * TAU,
            radius,
            size: RING_DOT_SIZE,
        })
        .collect()
}

/// Concentric rotating rings of dots.
#[derive(Clone, Debug)]
pub struct RingField {
    pub rings: [Ring; RING_COUNT],
    viewport: Vec2,
}

impl RingField {
    pub fn new(viewport: Vec2, settings: &Settings) -> Self {
        let mut field = Self {
            rings: Default::default(),
            viewport,
        };
        field.initialize(viewport, settings);
        field
    }

    /// Re-seed dots for the given viewport and settings. Ring rotation
    /// angles carry over so the animation does not jump.
    pub fn initialize(&mut self, viewport: Vec2, settings: &Settings) {
        self.viewport = viewport;
        let counts = if viewport.x * viewport.y > 0.0 {
            settings.ring_dot_counts()
        } else {
            [0; RING_COUNT]
        };
        let radii = ring_radii(viewport);
        let speeds = ring_speeds(settings.base_rotation_speed, settings.rotation_proportion);
        for (i, ring) in self.rings.iter_mut().enumerate() {
            ring.dots = seed_ring(counts[i], radii[i]);
            ring.speed = speeds[i];
        }
    }

    pub fn resize(&mut self, viewport: Vec2, settings: &Settings) {
        self.initialize(viewport, settings);
    }

    pub fn step(&mut self) {
        for ring in &mut self.rings {
            ring.step();
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn dot_count(&self) -> usize {
        self.rings.iter().map(|r| r.dots.len()).sum()
    }

    /// Screen positions and sizes of all dots, ring 1 first.
    pub fn positions(&self, out: &mut Vec<(Vec2, f32)>) {
        out.clear();
        let center = self.viewport * 0.5;
        for ring in &self.rings {
            for dot in &ring.dots {
                let a = dot.angle + ring.angle;
                out.push((center + Vec2::new(a.cos(), a.sin()) * dot.radius, dot.size));
            }
        }
    }
}
