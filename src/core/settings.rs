use serde::{Deserialize, Serialize};

/// Named animation parameters, in canonical order.
///
/// The order matters: it fixes the modulation frequency/phase offsets and the
/// order of sliders in the control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    Circle1Dots,
    Circle2Dots,
    Circle3Dots,
    Circle4Dots,
    Circle5Dots,
    ConnectionDistance,
    BaseRotationSpeed,
    RotationProportion,
}

pub const PARAM_COUNT: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModulationRange {
    pub min: f64,
    pub max: f64,
    pub center: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Param {
    pub const ALL: [Param; PARAM_COUNT] = [
        Param::Circle1Dots,
        Param::Circle2Dots,
        Param::Circle3Dots,
        Param::Circle4Dots,
        Param::Circle5Dots,
        Param::ConnectionDistance,
        Param::BaseRotationSpeed,
        Param::RotationProportion,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field name used in the exported JSON record and as DOM id suffix.
    pub fn key(self) -> &'static str {
        match self {
            Param::Circle1Dots => "circle1Dots",
            Param::Circle2Dots => "circle2Dots",
            Param::Circle3Dots => "circle3Dots",
            Param::Circle4Dots => "circle4Dots",
            Param::Circle5Dots => "circle5Dots",
            Param::ConnectionDistance => "connectionDistance",
            Param::BaseRotationSpeed => "baseRotationSpeed",
            Param::RotationProportion => "rotationProportion",
        }
    }

    pub fn from_key(key: &str) -> Option<Param> {
        Param::ALL.iter().copied().find(|p| p.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Param::Circle1Dots => "Circle 1 Dots",
            Param::Circle2Dots => "Circle 2 Dots",
            Param::Circle3Dots => "Circle 3 Dots",
            Param::Circle4Dots => "Circle 4 Dots",
            Param::Circle5Dots => "Circle 5 Dots",
            Param::ConnectionDistance => "Connection Distance",
            Param::BaseRotationSpeed => "Base Rotation Speed",
            Param::RotationProportion => "Rotation Proportion",
        }
    }

    /// Range the sinusoidal modulation sweeps.
    pub fn modulation_range(self) -> ModulationRange {
        let (min, max, center) = match self {
            Param::Circle1Dots => (50.0, 150.0, 100.0),
            Param::Circle2Dots => (30.0, 100.0, 70.0),
            Param::Circle3Dots => (20.0, 80.0, 50.0),
            Param::Circle4Dots => (15.0, 60.0, 36.0),
            Param::Circle5Dots => (10.0, 40.0, 26.0),
            Param::ConnectionDistance => (150.0, 350.0, 250.0),
            Param::BaseRotationSpeed => (0.0005, 0.0015, 0.001),
            Param::RotationProportion => (-3.5, -1.5, -2.5),
        };
        ModulationRange { min, max, center }
    }

    /// Bounds of the manual slider. The UI and fragment import enforce these;
    /// the store itself does not clamp.
    pub fn slider_bounds(self) -> SliderBounds {
        let (min, max, step) = match self {
            Param::Circle1Dots => (10.0, 200.0, 1.0),
            Param::Circle2Dots => (10.0, 150.0, 1.0),
            Param::Circle3Dots => (10.0, 100.0, 1.0),
            Param::Circle4Dots => (5.0, 80.0, 1.0),
            Param::Circle5Dots => (5.0, 60.0, 1.0),
            Param::ConnectionDistance => (50.0, 400.0, 1.0),
            Param::BaseRotationSpeed => (0.0001, 0.005, 0.0001),
            Param::RotationProportion => (-5.0, -1.0, 0.1),
        };
        SliderBounds { min, max, step }
    }

    /// Integer-valued sliders parse their input as whole numbers.
    pub fn is_integral(self) -> bool {
        !matches!(self, Param::BaseRotationSpeed | Param::RotationProportion)
    }

    /// Text shown next to the slider.
    pub fn format_value(self, value: f64) -> String {
        match self {
            Param::BaseRotationSpeed => format!("{:.4}", value),
            Param::RotationProportion => format!("{:.1}", value),
            _ => format!("{}", value.round()),
        }
    }
}

/// Current animation parameter values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub circle1_dots: f64,
    pub circle2_dots: f64,
    pub circle3_dots: f64,
    pub circle4_dots: f64,
    pub circle5_dots: f64,
    pub connection_distance: f64,
    pub base_rotation_speed: f64,
    pub rotation_proportion: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            circle1_dots: 100.0,
            circle2_dots: 70.0,
            circle3_dots: 50.0,
            circle4_dots: 36.0,
            circle5_dots: 26.0,
            connection_distance: 250.0,
            base_rotation_speed: 0.001,
            rotation_proportion: -2.5,
        }
    }
}

impl Settings {
    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::Circle1Dots => self.circle1_dots,
            Param::Circle2Dots => self.circle2_dots,
            Param::Circle3Dots => self.circle3_dots,
            Param::Circle4Dots => self.circle4_dots,
            Param::Circle5Dots => self.circle5_dots,
            Param::ConnectionDistance => self.connection_distance,
            Param::BaseRotationSpeed => self.base_rotation_speed,
            Param::RotationProportion => self.rotation_proportion,
        }
    }

    pub fn set(&mut self, param: Param, value: f64) {
        let slot = match param {
            Param::Circle1Dots => &mut self.circle1_dots,
            Param::Circle2Dots => &mut self.circle2_dots,
            Param::Circle3Dots => &mut self.circle3_dots,
            Param::Circle4Dots => &mut self.circle4_dots,
            Param::Circle5Dots => &mut self.circle5_dots,
            Param::ConnectionDistance => &mut self.connection_distance,
            Param::BaseRotationSpeed => &mut self.base_rotation_speed,
            Param::RotationProportion => &mut self.rotation_proportion,
        };
        *slot = value;
    }

    /// Per-ring dot counts. Fractional values (from modulation) truncate and
    /// negative values yield empty rings.
    pub fn ring_dot_counts(&self) -> [usize; 5] {
        [
            self.circle1_dots,
            self.circle2_dots,
            self.circle3_dots,
            self.circle4_dots,
            self.circle5_dots,
        ]
        .map(dot_count)
    }

    /// First parameter that is non-finite or outside its slider bounds.
    pub fn first_out_of_bounds(&self) -> Option<Param> {
        Param::ALL.into_iter().find(|&p| {
            let v = self.get(p);
            let b = p.slider_bounds();
            !v.is_finite() || v < b.min || v > b.max
        })
    }
}

#[inline]
fn dot_count(value: f64) -> usize {
    if value.is_finite() && value > 0.0 {
        value.trunc() as usize
    } else {
        0
    }
}

/// Which parameters are currently driven by modulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModulationFlags {
    flags: [bool; PARAM_COUNT],
}

impl ModulationFlags {
    #[inline]
    pub fn is_set(&self, param: Param) -> bool {
        self.flags[param.index()]
    }

    pub fn set(&mut self, param: Param, on: bool) {
        self.flags[param.index()] = on;
    }

    pub fn toggle(&mut self, param: Param) {
        let i = param.index();
        self.flags[i] = !self.flags[i];
    }

    pub fn set_all(&mut self, on: bool) {
        self.flags = [on; PARAM_COUNT];
    }

    pub fn all(&self) -> bool {
        self.flags.iter().all(|f| *f)
    }

    pub fn any(&self) -> bool {
        self.flags.iter().any(|f| *f)
    }
}
