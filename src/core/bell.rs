use super::constants::{
    MAX_VOLUME, MIN_PLAY_INTERVAL, MIN_VOLUME, RIPPLE_BASE_SCALE, RIPPLE_JITTER_PX,
    RIPPLE_LIFETIME, RIPPLE_SCALE_SPAN, SWING_DURATION, SWING_HEAVY_ABOVE, SWING_INTENSE_ABOVE,
    SWING_MEDIUM_ABOVE, VIBRATION_DURATION,
};
use fnv::FnvHashMap;
use instant::Instant;
use rand::prelude::*;
use std::time::Duration;

// Zero when `now` is not after `earlier`.
#[inline]
fn elapsed_since(now: Instant, earlier: Instant) -> Duration {
    if now > earlier {
        now.duration_since(earlier)
    } else {
        Duration::ZERO
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwingStrength {
    Light,
    Medium,
    Heavy,
    Intense,
}

impl SwingStrength {
    pub const ALL: [SwingStrength; 4] = [
        SwingStrength::Light,
        SwingStrength::Medium,
        SwingStrength::Heavy,
        SwingStrength::Intense,
    ];

    pub fn from_intensity(intensity: f32) -> Self {
        let i = clamp_unit(intensity);
        if i > SWING_INTENSE_ABOVE {
            SwingStrength::Intense
        } else if i > SWING_HEAVY_ABOVE {
            SwingStrength::Heavy
        } else if i > SWING_MEDIUM_ABOVE {
            SwingStrength::Medium
        } else {
            SwingStrength::Light
        }
    }

    /// CSS class that drives the swing keyframes.
    pub fn class_name(self) -> &'static str {
        match self {
            SwingStrength::Light => "swing-light",
            SwingStrength::Medium => "swing-medium",
            SwingStrength::Heavy => "swing-heavy",
            SwingStrength::Intense => "swing-intense",
        }
    }
}

/// Linear intensity → gain mapping, clamped to `[min_volume, max_volume]`.
#[inline]
pub fn volume_for_intensity(intensity: f32, min_volume: f32, max_volume: f32) -> f32 {
    let (lo, hi) = if min_volume <= max_volume {
        (min_volume, max_volume)
    } else {
        (max_volume, min_volume)
    };
    (lo + (hi - lo) * clamp_unit(intensity)).clamp(lo, hi)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    pub born: Instant,
    pub scale: f32,
    pub offset_px: [f32; 2],
}

/// Live ripple tokens keyed by id. Every token lives for exactly `lifetime`.
pub struct RippleSet {
    active: FnvHashMap<RippleId, Ripple>,
    next_id: u64,
    lifetime: Duration,
    jitter_px: f32,
    rng: StdRng,
}

impl RippleSet {
    pub fn new(lifetime: Duration, jitter_px: f32, seed: u64) -> Self {
        Self {
            active: FnvHashMap::default(),
            next_id: 0,
            lifetime,
            jitter_px: jitter_px.abs(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn spawn(&mut self, intensity: f32, now: Instant) -> Ripple {
        let id = RippleId(self.next_id);
        self.next_id += 1;
        let j = self.jitter_px;
        let offset_px = if j > 0.0 {
            [self.rng.gen_range(-j..=j), self.rng.gen_range(-j..=j)]
        } else {
            [0.0, 0.0]
        };
        let ripple = Ripple {
            id,
            born: now,
            scale: RIPPLE_BASE_SCALE + RIPPLE_SCALE_SPAN * clamp_unit(intensity),
            offset_px,
        };
        self.active.insert(id, ripple);
        ripple
    }

    /// Remove a token. Removing an id that is already gone is a no-op.
    pub fn remove(&mut self, id: RippleId) -> bool {
        self.active.remove(&id).is_some()
    }

    /// Drop every token whose age has reached the lifetime; returns the removed ids.
    pub fn expire(&mut self, now: Instant) -> Vec<RippleId> {
        let lifetime = self.lifetime;
        let mut gone: Vec<RippleId> = self
            .active
            .values()
            .filter(|r| elapsed_since(now, r.born) >= lifetime)
            .map(|r| r.id)
            .collect();
        gone.sort();
        for id in &gone {
            self.active.remove(id);
        }
        gone
    }

    pub fn contains(&self, id: RippleId) -> bool {
        self.active.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    fn any_alive(&self, now: Instant) -> bool {
        self.active.values().any(|r| elapsed_since(now, r.born) < self.lifetime)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playback {
    pub volume: f32,
}

/// A swing animation instance. `generation` increases with every ring so a
/// stale cleanup timer can tell it has been superseded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwingCue {
    pub strength: SwingStrength,
    pub generation: u64,
}

/// Everything one `ring` asks the platform layer to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingEvent {
    pub intensity: f32,
    pub playback: Option<Playback>,
    pub swing: SwingCue,
    pub ripple: Ripple,
    pub vibration: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BellPhase {
    Idle,
    Animating,
}

#[derive(Clone, Debug)]
pub struct BellParams {
    pub min_interval: Duration,
    pub min_volume: f32,
    pub max_volume: f32,
    pub swing_duration: Duration,
    pub ripple_lifetime: Duration,
    pub ripple_jitter_px: f32,
    pub vibration: Duration,
}

impl Default for BellParams {
    fn default() -> Self {
        Self {
            min_interval: MIN_PLAY_INTERVAL,
            min_volume: MIN_VOLUME,
            max_volume: MAX_VOLUME,
            swing_duration: SWING_DURATION,
            ripple_lifetime: RIPPLE_LIFETIME,
            ripple_jitter_px: RIPPLE_JITTER_PX,
            vibration: VIBRATION_DURATION,
        }
    }
}

pub struct Bell {
    pub params: BellParams,
    last_play: Option<Instant>,
    swing: Option<(SwingCue, Instant)>,
    swing_generation: u64,
    ripples: RippleSet,
    play_count: u64,
}

impl Bell {
    pub fn new(params: BellParams, seed: u64) -> Self {
        let ripples = RippleSet::new(params.ripple_lifetime, params.ripple_jitter_px, seed);
        Self {
            params,
            last_play: None,
            swing: None,
            swing_generation: 0,
            ripples,
            play_count: 0,
        }
    }

    /// Register a trigger. Playback is granted at most once per `min_interval`;
    /// swing, ripple and vibration are issued for every call.
    pub fn ring(&mut self, intensity: f32, now: Instant) -> RingEvent {
        let intensity = clamp_unit(intensity);

        let playback = match self.last_play {
            Some(t) if elapsed_since(now, t) < self.params.min_interval => None,
            _ => {
                self.last_play = Some(now);
                self.play_count += 1;
                Some(Playback {
                    volume: volume_for_intensity(
                        intensity,
                        self.params.min_volume,
                        self.params.max_volume,
                    ),
                })
            }
        };

        self.swing_generation += 1;
        let swing = SwingCue {
            strength: SwingStrength::from_intensity(intensity),
            generation: self.swing_generation,
        };
        self.swing = Some((swing, now));

        let ripple = self.ripples.spawn(intensity, now);

        RingEvent {
            intensity,
            playback,
            swing,
            ripple,
            vibration: self.params.vibration,
        }
    }

    /// Clear the swing if `generation` is still the current one.
    pub fn finish_swing(&mut self, generation: u64) -> bool {
        match self.swing {
            Some((cue, _)) if cue.generation == generation => {
                self.swing = None;
                true
            }
            _ => false,
        }
    }

    pub fn current_swing(&self) -> Option<SwingCue> {
        self.swing.map(|(cue, _)| cue)
    }

    pub fn remove_ripple(&mut self, id: RippleId) -> bool {
        self.ripples.remove(id)
    }

    /// Time-based cleanup for callers without per-item timers.
    pub fn expire(&mut self, now: Instant) -> Vec<RippleId> {
        if let Some((_, started)) = self.swing {
            if elapsed_since(now, started) >= self.params.swing_duration {
                self.swing = None;
            }
        }
        self.ripples.expire(now)
    }

    pub fn phase(&self, now: Instant) -> BellPhase {
        let swinging = self.swing.map_or(false, |(_, started)| {
            elapsed_since(now, started) < self.params.swing_duration
        });
        if swinging || self.ripples.any_alive(now) {
            BellPhase::Animating
        } else {
            BellPhase::Idle
        }
    }

    pub fn ripples(&self) -> &RippleSet {
        &self.ripples
    }

    /// Number of playbacks granted so far.
    pub fn play_count(&self) -> u64 {
        self.play_count
    }
}
