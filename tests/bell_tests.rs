// Host-side tests for bell trigger state: playback debounce, swing buckets,
// ripple lifetimes and the idle/animating phase.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod bell {
    include!("../src/core/bell.rs");
}

use bell::*;
use instant::Instant;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn make_bell() -> Bell {
    Bell::new(BellParams::default(), 42)
}

#[test]
fn swing_buckets_follow_intensity_thresholds() {
    assert_eq!(SwingStrength::from_intensity(0.2), SwingStrength::Light);
    assert_eq!(SwingStrength::from_intensity(0.4), SwingStrength::Medium);
    assert_eq!(SwingStrength::from_intensity(0.6), SwingStrength::Heavy);
    assert_eq!(SwingStrength::from_intensity(0.9), SwingStrength::Intense);
}

#[test]
fn swing_bucket_boundaries_are_exclusive() {
    assert_eq!(SwingStrength::from_intensity(0.0), SwingStrength::Light);
    assert_eq!(SwingStrength::from_intensity(0.3), SwingStrength::Light);
    assert_eq!(SwingStrength::from_intensity(0.5), SwingStrength::Medium);
    assert_eq!(SwingStrength::from_intensity(0.7), SwingStrength::Heavy);
    assert_eq!(SwingStrength::from_intensity(1.0), SwingStrength::Intense);
    assert_eq!(SwingStrength::from_intensity(7.0), SwingStrength::Intense);
    assert_eq!(SwingStrength::from_intensity(f32::NAN), SwingStrength::Light);
}

#[test]
fn swing_class_names_are_distinct() {
    let names: Vec<&str> = SwingStrength::ALL.iter().map(|s| s.class_name()).collect();
    assert_eq!(
        names,
        vec!["swing-light", "swing-medium", "swing-heavy", "swing-intense"]
    );
}

#[test]
fn volume_scales_linearly_within_range() {
    assert!((volume_for_intensity(0.0, 0.3, 1.0) - 0.3).abs() < 1e-6);
    assert!((volume_for_intensity(0.5, 0.3, 1.0) - 0.65).abs() < 1e-6);
    assert!((volume_for_intensity(1.0, 0.3, 1.0) - 1.0).abs() < 1e-6);
    // out-of-range input stays inside the window
    assert!((volume_for_intensity(3.0, 0.3, 1.0) - 1.0).abs() < 1e-6);
    assert!((volume_for_intensity(-1.0, 0.3, 1.0) - 0.3).abs() < 1e-6);
    assert!((volume_for_intensity(f32::NAN, 0.3, 1.0) - 0.3).abs() < 1e-6);
    // swapped bounds are tolerated
    assert!((volume_for_intensity(1.0, 1.0, 0.3) - 1.0).abs() < 1e-6);
}

#[test]
fn two_rings_within_min_interval_play_once() {
    let mut b = make_bell();
    let t0 = Instant::now();
    let first = b.ring(0.8, t0);
    let second = b.ring(0.8, t0 + ms(60));
    assert!(first.playback.is_some());
    assert!(second.playback.is_none());
    assert_eq!(b.play_count(), 1);
}

#[test]
fn ring_after_min_interval_plays_again() {
    let mut b = make_bell();
    let t0 = Instant::now();
    assert!(b.ring(0.5, t0).playback.is_some());
    assert!(b.ring(0.5, t0 + ms(99)).playback.is_none());
    assert!(b.ring(0.5, t0 + ms(100)).playback.is_some());
    assert_eq!(b.play_count(), 2);
}

#[test]
fn suppressed_ring_does_not_extend_the_window() {
    let mut b = make_bell();
    let t0 = Instant::now();
    b.ring(0.5, t0);
    b.ring(0.5, t0 + ms(80));
    // measured from the last play (t0), not the last call
    assert!(b.ring(0.5, t0 + ms(120)).playback.is_some());
}

#[test]
fn every_ring_animates_even_when_audio_is_debounced() {
    let mut b = make_bell();
    let t0 = Instant::now();
    let a = b.ring(0.2, t0);
    let c = b.ring(0.9, t0 + ms(10));
    assert_eq!(a.swing.strength, SwingStrength::Light);
    assert_eq!(c.swing.strength, SwingStrength::Intense);
    assert_ne!(a.ripple.id, c.ripple.id);
    assert_eq!(b.ripples().len(), 2);
    assert_eq!(c.vibration, constants::VIBRATION_DURATION);
}

#[test]
fn playback_volume_tracks_intensity() {
    let mut b = make_bell();
    let t0 = Instant::now();
    let soft = b.ring(0.0, t0).playback.unwrap();
    let loud = b.ring(1.0, t0 + ms(200)).playback.unwrap();
    assert!((soft.volume - b.params.min_volume).abs() < 1e-6);
    assert!((loud.volume - b.params.max_volume).abs() < 1e-6);
}

#[test]
fn ring_clamps_reported_intensity() {
    let mut b = make_bell();
    let ev = b.ring(4.2, Instant::now());
    assert_eq!(ev.intensity, 1.0);
    assert_eq!(ev.swing.strength, SwingStrength::Intense);
}

#[test]
fn ripple_lives_exactly_one_lifetime() {
    let mut b = make_bell();
    let t0 = Instant::now();
    let id = b.ring(0.5, t0).ripple.id;
    assert!(b.ripples().contains(id));

    assert!(b.expire(t0 + ms(999)).is_empty());
    assert!(b.ripples().contains(id));

    assert_eq!(b.expire(t0 + ms(1000)), vec![id]);
    assert!(!b.ripples().contains(id));
}

#[test]
fn overlapping_ripples_expire_independently() {
    let mut b = make_bell();
    let t0 = Instant::now();
    let r1 = b.ring(0.5, t0).ripple.id;
    let r2 = b.ring(0.5, t0 + ms(400)).ripple.id;
    assert_eq!(b.expire(t0 + ms(1000)), vec![r1]);
    assert!(b.ripples().contains(r2));
    assert_eq!(b.expire(t0 + ms(1400)), vec![r2]);
    assert!(b.ripples().is_empty());
}

#[test]
fn removing_a_ripple_is_idempotent() {
    let mut b = make_bell();
    let id = b.ring(0.5, Instant::now()).ripple.id;
    assert!(b.remove_ripple(id));
    assert!(!b.remove_ripple(id));
    assert!(!b.remove_ripple(RippleId(9999)));
    assert!(b.ripples().is_empty());
}

#[test]
fn ripple_scale_and_jitter_are_bounded() {
    let mut set = RippleSet::new(ms(1000), 12.0, 7);
    let t0 = Instant::now();
    for i in 0..200 {
        let r = set.spawn((i % 11) as f32 / 10.0, t0);
        assert!(r.scale >= constants::RIPPLE_BASE_SCALE);
        assert!(r.scale <= constants::RIPPLE_BASE_SCALE + constants::RIPPLE_SCALE_SPAN + 1e-6);
        assert!(r.offset_px[0].abs() <= 12.0 && r.offset_px[1].abs() <= 12.0);
    }
    assert_eq!(set.len(), 200);
}

#[test]
fn ripple_jitter_is_reproducible_for_a_seed() {
    let t0 = Instant::now();
    let mut a = RippleSet::new(ms(1000), 12.0, 99);
    let mut b = RippleSet::new(ms(1000), 12.0, 99);
    for _ in 0..10 {
        assert_eq!(a.spawn(0.5, t0).offset_px, b.spawn(0.5, t0).offset_px);
    }
    let mut still = RippleSet::new(ms(1000), 0.0, 99);
    assert_eq!(still.spawn(0.5, t0).offset_px, [0.0, 0.0]);
}

#[test]
fn stale_swing_timer_does_not_cancel_newer_swing() {
    let mut b = make_bell();
    let t0 = Instant::now();
    let first = b.ring(0.2, t0).swing;
    let second = b.ring(0.8, t0 + ms(500)).swing;
    assert!(second.generation > first.generation);

    // first timer fires at t0 + 1000ms
    assert!(!b.finish_swing(first.generation));
    assert_eq!(b.current_swing(), Some(second));

    assert!(b.finish_swing(second.generation));
    assert_eq!(b.current_swing(), None);
    assert!(!b.finish_swing(second.generation));
}

#[test]
fn phase_returns_to_idle_after_animations_expire() {
    let mut b = make_bell();
    let t0 = Instant::now();
    assert_eq!(b.phase(t0), BellPhase::Idle);

    b.ring(0.5, t0);
    assert_eq!(b.phase(t0), BellPhase::Animating);
    assert_eq!(b.phase(t0 + ms(999)), BellPhase::Animating);
    assert_eq!(b.phase(t0 + ms(1000)), BellPhase::Idle);

    b.expire(t0 + ms(1000));
    assert_eq!(b.current_swing(), None);
    assert!(b.ripples().is_empty());
}

#[test]
fn overlapping_rings_keep_the_bell_animating() {
    let mut b = make_bell();
    let t0 = Instant::now();
    b.ring(0.5, t0);
    b.ring(0.5, t0 + ms(700));
    assert_eq!(b.phase(t0 + ms(1200)), BellPhase::Animating);
    assert_eq!(b.phase(t0 + ms(1700)), BellPhase::Idle);
}

#[test]
fn huge_durations_do_not_overflow() {
    let mut b = Bell::new(
        BellParams {
            min_interval: Duration::MAX,
            swing_duration: Duration::MAX,
            ripple_lifetime: Duration::MAX,
            ..BellParams::default()
        },
        3,
    );
    let t0 = Instant::now();
    assert!(b.ring(0.5, t0).playback.is_some());
    let later = t0 + ms(3_600_000);
    assert!(b.ring(0.5, later).playback.is_none());
    assert_eq!(b.play_count(), 1);
    assert_eq!(b.phase(later), BellPhase::Animating);
    assert!(b.expire(later).is_empty());
    assert_eq!(b.ripples().len(), 2);
}

#[test]
fn ring_stamped_before_the_last_playback_is_debounced() {
    let mut b = make_bell();
    let t0 = Instant::now() + ms(5_000);
    assert!(b.ring(0.5, t0).playback.is_some());
    assert!(b.ring(0.5, t0 - ms(2_000)).playback.is_none());
    assert_eq!(b.play_count(), 1);
}
