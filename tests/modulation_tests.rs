// Host-side tests for sinusoidal parameter modulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod settings {
    include!("../src/core/settings.rs");
}
mod modulation {
    include!("../src/core/modulation.rs");
}

use modulation::*;
use settings::*;

#[test]
fn modulated_values_stay_within_range_for_all_times() {
    for p in Param::ALL {
        let r = p.modulation_range();
        let mut t = 0.0;
        while t < 2_000.0 {
            let v = modulated_value(p, t);
            assert!(
                v >= r.min && v <= r.max,
                "{:?} at t={} gave {} outside [{}, {}]",
                p,
                t,
                v,
                r.min,
                r.max
            );
            t += 0.173;
        }
    }
}

#[test]
fn first_parameter_starts_at_center() {
    // index 0 has zero phase, so sin(0) leaves the center untouched
    assert_eq!(modulated_value(Param::Circle1Dots, 0.0), 100.0);
}

#[test]
fn first_parameter_reaches_peak_after_a_quarter_period() {
    // frequency 0.1 → sin(t * 0.1π) peaks at t = 5
    let v = modulated_value(Param::Circle1Dots, 5.0);
    assert!((v - 150.0).abs() < 1e-9, "got {v}");
}

#[test]
fn parameters_desynchronize() {
    let norm = |p: Param, t: f64| {
        let r = p.modulation_range();
        (modulated_value(p, t) - r.center) / ((r.max - r.min) / 2.0)
    };
    let a = norm(Param::Circle1Dots, 1.0);
    let b = norm(Param::Circle3Dots, 1.0);
    assert!((a - b).abs() > 0.1, "a={a} b={b}");
}

#[test]
fn modulator_only_touches_flagged_parameters() {
    let modulator = Modulator::new(1.0);
    let mut flags = ModulationFlags::default();
    flags.set(Param::ConnectionDistance, true);
    let mut s = Settings::default();

    let changed = modulator.apply(&mut s, &flags, 2.0);
    assert!(changed);
    assert_eq!(
        s.connection_distance,
        modulated_value(Param::ConnectionDistance, 1.0)
    );
    for p in Param::ALL {
        if p != Param::ConnectionDistance {
            assert_eq!(s.get(p), Settings::default().get(p), "{:?}", p);
        }
    }
}

#[test]
fn modulator_without_flags_changes_nothing() {
    let modulator = Modulator::new(0.0);
    let mut s = Settings::default();
    assert!(!modulator.apply(&mut s, &ModulationFlags::default(), 3.0));
    assert_eq!(s, Settings::default());
}

#[test]
fn modulation_overrides_manual_values() {
    let modulator = Modulator::new(0.0);
    let mut flags = ModulationFlags::default();
    flags.set(Param::Circle2Dots, true);
    let mut s = Settings::default();
    s.circle2_dots = 149.0;
    modulator.apply(&mut s, &flags, 4.0);
    assert_eq!(s.circle2_dots, modulated_value(Param::Circle2Dots, 4.0));
}

#[test]
fn restart_resets_elapsed_and_never_goes_negative() {
    let mut m = Modulator::new(10.0);
    assert_eq!(m.elapsed(12.5), 2.5);
    assert_eq!(m.elapsed(9.0), 0.0);
    m.restart(20.0);
    assert_eq!(m.elapsed(20.0), 0.0);
    assert_eq!(m.elapsed(21.0), 1.0);
}
