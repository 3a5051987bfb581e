// Host-side tests for tuning constants and their relationships.
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
fn rate_limits_and_lifetimes_are_positive() {
    assert!(!SHAKE_INTERVAL.is_zero());
    assert!(!MIN_PLAY_INTERVAL.is_zero());
    assert!(!SWING_DURATION.is_zero());
    assert!(!RIPPLE_LIFETIME.is_zero());
    assert!(!VIBRATION_DURATION.is_zero());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shake_scaling_is_consistent() {
    assert!(SHAKE_THRESHOLD > 0.0);
    // A shake just over the threshold must not already be at full intensity
    assert!(SHAKE_FULL_SCALE_DELTA > SHAKE_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn volume_range_is_ordered_and_audible() {
    assert!(MIN_VOLUME > 0.0);
    assert!(MIN_VOLUME < MAX_VOLUME);
    assert!(MAX_VOLUME <= 1.0);
    assert!(MASTER_GAIN > 0.0 && MASTER_GAIN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn swing_buckets_are_increasing_within_unit_range() {
    assert!(SWING_MEDIUM_ABOVE > 0.0);
    assert!(SWING_MEDIUM_ABOVE < SWING_HEAVY_ABOVE);
    assert!(SWING_HEAVY_ABOVE < SWING_INTENSE_ABOVE);
    assert!(SWING_INTENSE_ABOVE < 1.0);
    assert!(CLICK_INTENSITY > 0.0 && CLICK_INTENSITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fallback_tone_parameters_are_sane() {
    assert!(TONE_BASE_HZ > 20.0);
    assert!((TONE_DURATION_SEC - 2.5).abs() < f32::EPSILON);
    assert!(TONE_PEAK > 0.0 && TONE_PEAK <= 1.0);
    // Shimmer dies away well before the body of the tone
    assert!(TONE_SHIMMER_DECAY_PER_SEC > TONE_DECAY_PER_SEC);
    assert_eq!(BELL_PARTIALS[0].0, 1.0);
    for w in BELL_PARTIALS.windows(2) {
        assert!(w[1].0 > w[0].0, "partials should ascend in frequency");
        assert!(w[1].2 >= w[0].2, "higher partials should not decay slower");
    }
}
