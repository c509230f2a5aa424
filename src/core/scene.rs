use super::color::HueClock;
use super::constants::DOTS_DENSITY;
use super::floating::FloatingField;
use super::logo::BouncingBox;
use super::modulation::Modulator;
use super::rings::RingField;
use super::settings::{ModulationFlags, Param, Settings};
use glam::Vec2;
use rand::rngs::StdRng;

/// Which background animation is running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Rings,
    Floating,
}

impl FieldKind {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("floating") => FieldKind::Floating,
            _ => FieldKind::Rings,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Field {
    Rings(RingField),
    Floating(FloatingField),
}

/// All animation state, owned by the loop driver and passed to each tick.
pub struct Scene {
    pub field: Field,
    pub hue: HueClock,
    pub logo: BouncingBox,
    settings: Settings,
    flags: ModulationFlags,
    modulator: Modulator,
    viewport: Vec2,
    rng: StdRng,
    positions: Vec<(Vec2, f32)>,
}

impl Scene {
    pub fn new(
        kind: FieldKind,
        viewport: Vec2,
        settings: Settings,
        mut rng: StdRng,
        now_sec: f64,
    ) -> Self {
        let field = match kind {
            FieldKind::Rings => Field::Rings(RingField::new(viewport, &settings)),
            FieldKind::Floating => {
                Field::Floating(FloatingField::new(viewport, DOTS_DENSITY, &mut rng))
            }
        };
        let logo = BouncingBox::logo(&mut rng);
        Self {
            field,
            hue: HueClock::default(),
            logo,
            settings,
            flags: ModulationFlags::default(),
            modulator: Modulator::new(now_sec),
            viewport,
            rng,
            positions: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn flags(&self) -> &ModulationFlags {
        &self.flags
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn connection_distance(&self) -> f32 {
        self.settings.connection_distance as f32
    }

    pub fn dot_count(&self) -> usize {
        match &self.field {
            Field::Rings(r) => r.dot_count(),
            Field::Floating(f) => f.dots.len(),
        }
    }

    /// Re-seed the field for a new viewport.
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        match &mut self.field {
            Field::Rings(r) => r.resize(viewport, &self.settings),
            Field::Floating(f) => f.resize(viewport, &mut self.rng),
        }
    }

    fn reseed_for_settings(&mut self) {
        // Floating dots only read the connection distance, at draw time.
        if let Field::Rings(r) = &mut self.field {
            r.initialize(self.viewport, &self.settings);
        }
    }

    /// Manual slider edit. Ignored while `param` is modulated.
    pub fn set_manual(&mut self, param: Param, value: f64) -> bool {
        if self.flags.is_set(param) || self.settings.get(param) == value {
            return false;
        }
        self.settings.set(param, value);
        self.reseed_for_settings();
        true
    }

    /// Replace every parameter at once, e.g. from an imported URL fragment.
    pub fn replace_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.reseed_for_settings();
    }

    pub fn toggle_modulation(&mut self, param: Param, now_sec: f64) {
        self.flags.toggle(param);
        self.modulator.restart(now_sec);
    }

    pub fn set_all_modulated(&mut self, on: bool, now_sec: f64) {
        self.flags.set_all(on);
        self.modulator.restart(now_sec);
    }

    /// Recompute modulated parameters. Returns true if any value moved.
    pub fn modulate(&mut self, now_sec: f64) -> bool {
        if !self.flags.any() {
            return false;
        }
        let changed = self.modulator.apply(&mut self.settings, &self.flags, now_sec);
        if changed {
            self.reseed_for_settings();
        }
        changed
    }

    /// Advance one display refresh. `container` bounds the bouncing logo.
    pub fn tick(&mut self, container: Vec2) {
        match &mut self.field {
            Field::Rings(r) => r.step(),
            Field::Floating(f) => f.step(),
        }
        self.hue.tick();
        self.logo.step(container);
    }

    /// Current dot positions and sizes, refreshed into an internal buffer.
    pub fn positions(&mut self) -> &[(Vec2, f32)] {
        match &self.field {
            Field::Rings(r) => r.positions(&mut self.positions),
            Field::Floating(f) => f.positions(&mut self.positions),
        }
        &self.positions
    }
}
