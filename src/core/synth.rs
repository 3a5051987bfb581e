use super::constants::{
    BELL_PARTIALS, TONE_BASE_HZ, TONE_DECAY_PER_SEC, TONE_DURATION_SEC, TONE_PEAK,
    TONE_SHIMMER_AMPLITUDE, TONE_SHIMMER_DECAY_PER_SEC, TONE_SHIMMER_RATIO,
};
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// One inharmonic component of the struck bell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partial {
    pub ratio: f32,
    pub amplitude: f32,
    pub decay_mul: f32,
}

#[derive(Clone, Debug)]
pub struct ToneParams {
    pub base_hz: f32,
    pub duration_sec: f32,
    pub decay_per_sec: f32,
    pub partials: SmallVec<[Partial; 8]>,
    pub shimmer_ratio: f32,
    pub shimmer_amplitude: f32,
    pub shimmer_decay_per_sec: f32,
    pub peak: f32,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            base_hz: TONE_BASE_HZ,
            duration_sec: TONE_DURATION_SEC,
            decay_per_sec: TONE_DECAY_PER_SEC,
            partials: BELL_PARTIALS
                .iter()
                .map(|&(ratio, amplitude, decay_mul)| Partial {
                    ratio,
                    amplitude,
                    decay_mul,
                })
                .collect(),
            shimmer_ratio: TONE_SHIMMER_RATIO,
            shimmer_amplitude: TONE_SHIMMER_AMPLITUDE,
            shimmer_decay_per_sec: TONE_SHIMMER_DECAY_PER_SEC,
            peak: TONE_PEAK,
        }
    }
}

#[inline]
pub fn tone_len(sample_rate: f32, duration_sec: f32) -> usize {
    if !sample_rate.is_finite() || sample_rate <= 0.0 || !duration_sec.is_finite() {
        return 0;
    }
    (duration_sec.max(0.0) * sample_rate).round() as usize
}

/// Render the fallback bell tone as mono samples.
///
/// Each partial is a sine at `base_hz * ratio` with its own exponential decay;
/// a short high shimmer sits on top of the attack. Components at or above
/// Nyquist are skipped. The result is normalized so its peak equals
/// `params.peak`.
pub fn synthesize_bell(sample_rate: f32, params: &ToneParams) -> Vec<f32> {
    let len = tone_len(sample_rate, params.duration_sec);
    let mut out = vec![0.0_f32; len];
    if len == 0 {
        return out;
    }
    let nyquist = sample_rate * 0.5;
    let audible: SmallVec<[Partial; 8]> = params
        .partials
        .iter()
        .copied()
        .filter(|p| params.base_hz * p.ratio < nyquist)
        .collect();
    let shimmer_hz = params.base_hz * params.shimmer_ratio;
    let shimmer_on = shimmer_hz < nyquist && params.shimmer_amplitude > 0.0;

    let dt = 1.0 / sample_rate;
    for (i, s) in out.iter_mut().enumerate() {
        let t = i as f32 * dt;
        let mut v = 0.0_f32;
        for p in &audible {
            let env = (-t * params.decay_per_sec * p.decay_mul).exp();
            v += p.amplitude * env * (TAU * params.base_hz * p.ratio * t).sin();
        }
        if shimmer_on {
            let env = (-t * params.shimmer_decay_per_sec).exp();
            v += params.shimmer_amplitude * env * (TAU * shimmer_hz * t).sin();
        }
        *s = v;
    }

    let peak = out.iter().fold(0.0_f32, |m, v| m.max(v.abs()));
    if peak > 0.0 {
        let gain = params.peak / peak;
        for s in out.iter_mut() {
            *s *= gain;
        }
    }
    out
}
