use super::constants::{
    COLOR_CHANGE_SPEED, COLOR_LIGHTNESS_PCT, COLOR_SATURATION_PCT, HUE_DEGREES_PER_UNIT,
};

/// Hue in degrees for a color-clock time.
#[inline]
pub fn hue_at(time: f64) -> f64 {
    (time * HUE_DEGREES_PER_UNIT).rem_euclid(360.0)
}

/// Slowly cycling hue shared by dots, lines and the loading spinner.
#[derive(Clone, Copy, Debug, Default)]
pub struct HueClock {
    pub time: f64,
}

impl HueClock {
    pub fn tick(&mut self) {
        self.time += COLOR_CHANGE_SPEED;
    }

    pub fn hue(&self) -> f64 {
        hue_at(self.time)
    }

    pub fn css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue(),
            COLOR_SATURATION_PCT,
            COLOR_LIGHTNESS_PCT
        )
    }

    pub fn css_with_alpha(&self, alpha: f32) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue(),
            COLOR_SATURATION_PCT,
            COLOR_LIGHTNESS_PCT,
            alpha
        )
    }
}
