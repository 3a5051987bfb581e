use super::constants::{SHAKE_FULL_SCALE_DELTA, SHAKE_INTERVAL, SHAKE_THRESHOLD};
use instant::Instant;
use std::time::Duration;
use thiserror::Error;

/// One accelerometer reading (acceleration including gravity, m/s²).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MotionSample {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }.sanitized()
    }

    // Sensors occasionally report NaN right after wake-up; treat those axes as 0.
    fn sanitized(self) -> Self {
        let fix = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            x: fix(self.x),
            y: fix(self.y),
            z: fix(self.z),
        }
    }

    /// Summed absolute per-axis change relative to `previous`.
    pub fn delta(&self, previous: &MotionSample) -> f64 {
        (self.x - previous.x).abs() + (self.y - previous.y).abs() + (self.z - previous.z).abs()
    }
}

/// A detected shake. Ephemeral; handed to the subscriber and dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShakeEvent {
    pub intensity: f32,
    pub delta: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    Unknown,
    NotRequired,
    Granted,
    Denied,
}

impl Permission {
    pub fn allows_sensors(self) -> bool {
        matches!(self, Permission::Granted | Permission::NotRequired)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MotionError {
    #[error("motion sensor access has not been granted yet")]
    PermissionRequired,
    #[error("motion sensor access was denied")]
    PermissionDenied,
}

#[derive(Clone, Debug)]
pub struct DetectorParams {
    pub threshold: f64,
    pub shake_interval: Duration,
    pub full_scale_delta: f64,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            threshold: SHAKE_THRESHOLD,
            shake_interval: SHAKE_INTERVAL,
            full_scale_delta: SHAKE_FULL_SCALE_DELTA,
        }
    }
}

// Zero when `now` is not after `earlier`.
#[inline]
fn elapsed_since(now: Instant, earlier: Instant) -> Duration {
    if now > earlier {
        now.duration_since(earlier)
    } else {
        Duration::ZERO
    }
}

/// Map a summed delta onto the [0, 1] intensity range.
#[inline]
pub fn shake_intensity(delta: f64, full_scale_delta: f64) -> f32 {
    if !delta.is_finite() || delta <= 0.0 {
        return 0.0;
    }
    if full_scale_delta <= 0.0 {
        return 1.0;
    }
    (delta / full_scale_delta).min(1.0) as f32
}

pub struct MotionDetector {
    pub params: DetectorParams,
    last: MotionSample,
    last_fire: Option<Instant>,
    permission: Permission,
    listening: bool,
    callback: Option<Box<dyn FnMut(ShakeEvent)>>,
}

impl MotionDetector {
    pub fn new(params: DetectorParams) -> Self {
        Self {
            params,
            last: MotionSample::default(),
            last_fire: None,
            permission: Permission::Unknown,
            listening: false,
            callback: None,
        }
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    /// Record the outcome of the consent flow. Denial also stops a running detector.
    pub fn set_permission(&mut self, permission: Permission) {
        self.permission = permission;
        if !permission.allows_sensors() {
            self.listening = false;
        }
    }

    /// Begin accepting samples. Gated on permission; starting twice is a no-op.
    pub fn start(&mut self) -> Result<(), MotionError> {
        match self.permission {
            Permission::Granted | Permission::NotRequired => {
                self.listening = true;
                Ok(())
            }
            Permission::Denied => Err(MotionError::PermissionDenied),
            Permission::Unknown => Err(MotionError::PermissionRequired),
        }
    }

    pub fn stop(&mut self) {
        self.listening = false;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Register the shake observer, replacing any previous one.
    pub fn subscribe(&mut self, callback: impl FnMut(ShakeEvent) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn last_sample(&self) -> MotionSample {
        self.last
    }

    /// Feed one sensor reading. Returns the event that was fired, if any.
    pub fn process(&mut self, sample: MotionSample, now: Instant) -> Option<ShakeEvent> {
        if !self.listening {
            return None;
        }
        let sample = sample.sanitized();
        let delta = sample.delta(&self.last);
        self.last = sample;

        if delta <= self.params.threshold {
            return None;
        }
        let due = self
            .last_fire
            .map_or(true, |t| elapsed_since(now, t) >= self.params.shake_interval);
        if !due {
            return None;
        }
        self.last_fire = Some(now);

        let event = ShakeEvent {
            intensity: shake_intensity(delta, self.params.full_scale_delta),
            delta,
        };
        if let Some(cb) = self.callback.as_mut() {
            cb(event);
        }
        Some(event)
    }
}
