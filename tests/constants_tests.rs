// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_are_positive_and_ordered() {
    assert!(MODULATION_INTERVAL_MS > 0);
    assert!(NOTIFICATION_MS > 0);
    // A notification outlives many modulation ticks.
    assert!(NOTIFICATION_MS > MODULATION_INTERVAL_MS * 10);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_layout_shrinks_inward() {
    assert!(RING_COUNT > 0);
    assert!(RADIUS_PROPORTION > 0.0 && RADIUS_PROPORTION < 1.0);
    assert!(RING_DOT_SIZE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn color_constants_are_valid_css_ranges() {
    assert!(COLOR_CHANGE_SPEED > 0.0);
    assert!(HUE_DEGREES_PER_UNIT > 0.0 && HUE_DEGREES_PER_UNIT < 360.0);
    assert!(COLOR_SATURATION_PCT <= 100);
    assert!(COLOR_LIGHTNESS_PCT <= 100);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn modulation_offsets_keep_frequencies_distinct() {
    assert!(MODULATION_BASE_FREQUENCY > 0.0);
    assert!(MODULATION_FREQUENCY_STEP > 0.0);
    assert!(MODULATION_PHASE_STEP > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn floating_and_logo_speeds_are_positive() {
    assert!(DOTS_DENSITY > 0.0);
    assert!(DENSITY_AREA_UNIT > 0.0);
    assert!(FLOATING_DOT_RADIUS > 0.0);
    assert!(FLOATING_MAX_SPEED > 0.0);
    assert!(LOGO_MAX_SPEED > 0.0);
    assert!(LOGO_WIDTH > LOGO_HEIGHT);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        CONTROLS_PANEL_ID,
        CONTROLS_TOGGLE_ID,
        LOGO_ID,
        LOGO_BOUNDS_ID,
        NOTIFICATION_ID,
        MODULATION_BANNER_ID,
        LOADING_OVERLAY_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
