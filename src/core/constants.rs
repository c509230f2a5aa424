// Shared simulation constants for the dot-field background.

// Ring layout
pub const RING_COUNT: usize = 5;
pub const RADIUS_PROPORTION: f32 = 0.778; // each ring is this fraction of the previous radius
pub const RING_DOT_SIZE: f32 = 5.0;

// Floating dots
pub const DOTS_DENSITY: f32 = 1.5; // dots per 10,000 px² of viewport
pub const DENSITY_AREA_UNIT: f32 = 10_000.0;
pub const FLOATING_DOT_RADIUS: f32 = 3.0;
pub const FLOATING_MAX_SPEED: f32 = 1.0; // per-axis |v| bound, px per tick

// Color cycling
pub const COLOR_CHANGE_SPEED: f64 = 0.005; // clock units per tick
pub const HUE_DEGREES_PER_UNIT: f64 = 30.0;
pub const COLOR_SATURATION_PCT: u32 = 80;
pub const COLOR_LIGHTNESS_PCT: u32 = 60;

// Connection lines
pub const CONNECTION_LINE_WIDTH: f64 = 1.0;

// Modulation
pub const MODULATION_BASE_FREQUENCY: f64 = 0.1;
pub const MODULATION_FREQUENCY_STEP: f64 = 0.02; // added per parameter index
pub const MODULATION_PHASE_STEP: f64 = 0.5; // radians per parameter index

// Bouncing logo
pub const LOGO_WIDTH: f32 = 180.0;
pub const LOGO_HEIGHT: f32 = 38.0;
pub const LOGO_MAX_SPEED: f32 = 3.0; // per-axis |v| bound, px per tick
