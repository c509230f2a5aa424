use super::constants::{
    MODULATION_BASE_FREQUENCY, MODULATION_FREQUENCY_STEP, MODULATION_PHASE_STEP,
};
use super::settings::{ModulationFlags, Param, Settings};
use std::f64::consts::PI;

/// Sinusoidal value of `param` after `elapsed_sec` of modulation.
///
/// Each parameter gets its own frequency and phase so simultaneously
/// modulated parameters drift apart. The result never leaves the
/// parameter's modulation range.
pub fn modulated_value(param: Param, elapsed_sec: f64) -> f64 {
    let range = param.modulation_range();
    let i = param.index() as f64;
    let frequency = MODULATION_BASE_FREQUENCY + i * MODULATION_FREQUENCY_STEP;
    let phase = i * MODULATION_PHASE_STEP;
    let amplitude = (range.max - range.min) / 2.0;
    let value = range.center + amplitude * (elapsed_sec * frequency * PI + phase).sin();
    value.clamp(range.min, range.max)
}

/// Drives modulated parameters from a shared epoch.
///
/// The epoch restarts whenever the set of modulated parameters changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Modulator {
    epoch_sec: f64,
}

impl Modulator {
    pub fn new(now_sec: f64) -> Self {
        Self { epoch_sec: now_sec }
    }

    pub fn restart(&mut self, now_sec: f64) {
        self.epoch_sec = now_sec;
    }

    pub fn elapsed(&self, now_sec: f64) -> f64 {
        (now_sec - self.epoch_sec).max(0.0)
    }

    /// Overwrite every flagged parameter. Returns true if anything changed.
    pub fn apply(&self, settings: &mut Settings, flags: &ModulationFlags, now_sec: f64) -> bool {
        let elapsed = self.elapsed(now_sec);
        let mut changed = false;
        for param in Param::ALL {
            if !flags.is_set(param) {
                continue;
            }
            let v = modulated_value(param, elapsed);
            if settings.get(param) != v {
                settings.set(param, v);
                changed = true;
            }
        }
        changed
    }
}
