// Host-side tests for the URL-fragment settings codec.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod settings {
    include!("../src/core/settings.rs");
}
mod fragment {
    include!("../src/core/fragment.rs");
}

use fragment::*;
use settings::*;

fn odd_settings() -> Settings {
    Settings {
        circle1_dots: 137.52918374610293,
        circle2_dots: 10.0 + 0.1 + 0.2,
        circle3_dots: 20.0,
        circle4_dots: 58.49999999999999,
        circle5_dots: 10.000000000000002,
        connection_distance: 349.9876,
        base_rotation_speed: 0.0014999999999999998,
        rotation_proportion: -3.4999,
    }
}

#[test]
fn export_then_import_reproduces_settings_exactly() {
    for s in [Settings::default(), odd_settings()] {
        let encoded = encode(&s);
        let decoded = decode(&encoded).expect("round trip");
        assert_eq!(decoded, s);
        // Leading '#' as returned by location.hash is accepted too.
        let decoded = decode(&format!("#{}", encoded)).expect("round trip with #");
        assert_eq!(decoded, s);
    }
}

#[test]
fn encoded_fragment_is_url_safe() {
    let encoded = encode(&Settings::default());
    assert!(encoded.starts_with("%7B%22circle1Dots%22%3A"), "{encoded}");
    for c in ['{', '}', '"', ':', ',', ' ', '#'] {
        assert!(!encoded.contains(c), "found {c:?} in {encoded}");
    }
}

#[test]
fn percent_encoding_matches_encode_uri_component() {
    assert_eq!(percent_encode("a b&c/é"), "a%20b%26c%2F%C3%A9");
    assert_eq!(percent_encode("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(percent_decode("a%20b%26c%2f%C3%A9").unwrap(), "a b&c/é");
}

#[test]
fn accepts_fragment_written_by_a_browser() {
    // JSON.stringify prints whole numbers without a fraction.
    let json = r#"{"circle1Dots":120,"circle2Dots":70,"circle3Dots":50,"circle4Dots":36,"circle5Dots":26,"connectionDistance":300,"baseRotationSpeed":0.002,"rotationProportion":-1.5}"#;
    let s = decode(&percent_encode(json)).expect("browser fragment");
    assert_eq!(s.circle1_dots, 120.0);
    assert_eq!(s.connection_distance, 300.0);
    assert_eq!(s.base_rotation_speed, 0.002);
    assert_eq!(s.rotation_proportion, -1.5);
}

#[test]
fn non_json_fragment_is_rejected() {
    assert!(matches!(decode("hello%20world"), Err(FragmentError::Json(_))));
    assert!(matches!(decode("#not-json"), Err(FragmentError::Json(_))));
}

#[test]
fn incomplete_or_mistyped_record_is_rejected() {
    assert!(matches!(decode("%7B%7D"), Err(FragmentError::Json(_))));
    let mistyped = percent_encode(
        r#"{"circle1Dots":"many","circle2Dots":70,"circle3Dots":50,"circle4Dots":36,"circle5Dots":26,"connectionDistance":300,"baseRotationSpeed":0.002,"rotationProportion":-1.5}"#,
    );
    assert!(matches!(decode(&mistyped), Err(FragmentError::Json(_))));
}

#[test]
fn broken_escapes_are_rejected() {
    // Invalid escapes stay literal and then fail to parse as JSON.
    assert!(matches!(decode("%7B%2"), Err(FragmentError::Json(_))));
    assert!(matches!(decode("%ZZ"), Err(FragmentError::Json(_))));
    assert!(matches!(decode("%FF%FE"), Err(FragmentError::Utf8(_))));
}

fn record_with(overrides: &[(&str, &str)]) -> String {
    let mut fields = vec![
        ("circle1Dots", "100"),
        ("circle2Dots", "70"),
        ("circle3Dots", "50"),
        ("circle4Dots", "36"),
        ("circle5Dots", "26"),
        ("connectionDistance", "250"),
        ("baseRotationSpeed", "0.001"),
        ("rotationProportion", "-2.5"),
    ];
    for (key, value) in overrides {
        if let Some(f) = fields.iter_mut().find(|f| f.0 == *key) {
            f.1 = *value;
        }
    }
    let body: Vec<String> = fields
        .iter()
        .map(|(k, v)| format!("\"{}\":{}", k, v))
        .collect();
    percent_encode(&format!("{{{}}}", body.join(",")))
}

#[test]
fn huge_dot_count_is_rejected() {
    let hash = record_with(&[("circle1Dots", "1e12")]);
    assert!(matches!(
        decode(&hash),
        Err(FragmentError::OutOfRange("circle1Dots"))
    ));
}

#[test]
fn overflowing_rotation_speeds_are_rejected() {
    let hash = record_with(&[
        ("baseRotationSpeed", "1e300"),
        ("rotationProportion", "-1e300"),
    ]);
    assert!(matches!(
        decode(&hash),
        Err(FragmentError::OutOfRange("baseRotationSpeed"))
    ));
}

#[test]
fn values_outside_slider_bounds_are_rejected() {
    for (key, value) in [
        ("circle5Dots", "-1"),
        ("connectionDistance", "401"),
        ("rotationProportion", "-0.5"),
        ("baseRotationSpeed", "0"),
    ] {
        let hash = record_with(&[(key, value)]);
        match decode(&hash) {
            Err(FragmentError::OutOfRange(k)) => assert_eq!(k, key),
            other => panic!("{key}={value} gave {other:?}"),
        }
    }
    // The bounds themselves are accepted.
    let edges = record_with(&[("circle1Dots", "200"), ("rotationProportion", "-5")]);
    assert!(decode(&edges).is_ok());
}

#[test]
fn error_messages_are_readable() {
    let err = decode(&record_with(&[("circle1Dots", "1e12")])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "circle1Dots is not a finite value within its slider range"
    );
}

#[test]
fn import_without_fragment_does_nothing() {
    assert!(import("", Settings::default()).is_none());
    assert!(import("#", Settings::default()).is_none());
}

#[test]
fn malformed_import_keeps_current_settings_and_reports_failure() {
    let current = Settings {
        circle1_dots: 150.0,
        ..Settings::default()
    };
    let huge = format!("#{}", record_with(&[("circle1Dots", "1e12")]));
    for hash in ["#not-json", "#%FF", huge.as_str()] {
        let outcome = import(hash, current).expect("fragment present");
        assert_eq!(outcome.settings, current);
        assert_eq!(outcome.message, MSG_IMPORT_FAILED);
        assert!(outcome.error.is_some());
    }
}

#[test]
fn valid_import_applies_settings_and_reports_success() {
    let wanted = odd_settings();
    let outcome = import(&format!("#{}", encode(&wanted)), Settings::default()).expect("present");
    assert_eq!(outcome.settings, wanted);
    assert_eq!(outcome.message, MSG_IMPORT_OK);
    assert!(outcome.error.is_none());
}

#[test]
fn share_url_appends_fragment_to_page() {
    let s = Settings::default();
    let url = share_url("https://example.com", "/demo", &s);
    assert_eq!(url, format!("https://example.com/demo#{}", encode(&s)));
    let hash = &url[url.find('#').unwrap()..];
    assert_eq!(decode(hash).unwrap(), s);
}
