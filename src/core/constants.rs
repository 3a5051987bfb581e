use std::time::Duration;

// Shared tuning constants for shake detection, bell timing and the fallback tone.

// Shake detection
pub const SHAKE_THRESHOLD: f64 = 10.0; // summed |Δaxis| (m/s²) needed to count as a shake
pub const SHAKE_FULL_SCALE_DELTA: f64 = 50.0; // delta mapped to intensity 1.0
pub const SHAKE_INTERVAL: Duration = Duration::from_millis(100);

// Playback
pub const MIN_PLAY_INTERVAL: Duration = Duration::from_millis(100);
pub const MIN_VOLUME: f32 = 0.3;
pub const MAX_VOLUME: f32 = 1.0;

// Animation lifetimes
pub const SWING_DURATION: Duration = Duration::from_millis(1000);
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(1000);
pub const RIPPLE_JITTER_PX: f32 = 12.0;
pub const RIPPLE_BASE_SCALE: f32 = 1.0;
pub const RIPPLE_SCALE_SPAN: f32 = 1.5; // extra scale at full intensity

// Swing bucket lower bounds (exclusive)
pub const SWING_MEDIUM_ABOVE: f32 = 0.3;
pub const SWING_HEAVY_ABOVE: f32 = 0.5;
pub const SWING_INTENSE_ABOVE: f32 = 0.7;

// Haptics
pub const VIBRATION_DURATION: Duration = Duration::from_millis(50);

// Fallback tone
pub const TONE_BASE_HZ: f32 = 830.0;
pub const TONE_DURATION_SEC: f32 = 2.5;
pub const TONE_DECAY_PER_SEC: f32 = 1.6;
pub const TONE_SHIMMER_RATIO: f32 = 6.8;
pub const TONE_SHIMMER_AMPLITUDE: f32 = 0.15;
pub const TONE_SHIMMER_DECAY_PER_SEC: f32 = 12.0;
pub const TONE_PEAK: f32 = 0.8;

// (frequency ratio, amplitude, decay multiplier) for the struck-bell partials
pub const BELL_PARTIALS: [(f32, f32, f32); 5] = [
    (1.0, 1.0, 1.0),
    (2.0, 0.6, 1.4),
    (3.0, 0.4, 1.9),
    (4.2, 0.25, 2.6),
    (5.4, 0.2, 3.3),
];
