// Host-side tests for defaults and config validation.

use slide_core::*;
use std::time::Duration;

#[test]
fn defaults_match_constants() {
    let c = CarouselConfig::default();
    assert_eq!(c.drag_multiplier, 1.6);
    assert_eq!(c.advance_threshold, 120.0);
    assert_eq!(c.resize_quiescence, Duration::from_millis(200));
    assert_eq!(c.start_index, 0);
    assert!(c.validated().is_ok());
}

#[test]
fn validated_rejects_bad_tunables() {
    let bad_multiplier = CarouselConfig {
        drag_multiplier: 0.0,
        ..CarouselConfig::default()
    };
    assert!(matches!(
        bad_multiplier.validated(),
        Err(CarouselError::InvalidConfig(_))
    ));

    let bad_threshold = CarouselConfig {
        advance_threshold: f64::NAN,
        ..CarouselConfig::default()
    };
    assert!(bad_threshold.validated().is_err());
}
