/// Page wiring and presentation constants used by the web frontend.
///
/// Element ids and class names must match the bundled `index.html` and
/// stylesheet; keeping them here keeps string literals out of the glue code.
// Elements
pub const BELL_ID: &str = "bell";
pub const RIPPLE_LAYER_ID: &str = "ripples";
pub const MOTION_OVERLAY_ID: &str = "motion-overlay";
pub const ENABLE_MOTION_ID: &str = "enable-motion";
pub const STATUS_ID: &str = "status";

// Classes
pub const RIPPLE_CLASS: &str = "ripple";
pub const HIDDEN_CLASS: &str = "hidden";
pub const RIPPLE_ID_PREFIX: &str = "ripple-";

// Assets
pub const SOUND_URL: &str = "sounds/bell.mp3";

// Audio graph
pub const MASTER_GAIN: f32 = 0.9;

// Alternate trigger paths ring with a fixed strength (maps to the heavy swing)
pub const CLICK_INTENSITY: f32 = 0.6;

// Status messages
pub const STATUS_READY: &str = "Shake your device or tap the bell";
pub const STATUS_ASK_MOTION: &str = "Allow motion access to ring the bell by shaking";
pub const STATUS_TAP_ONLY: &str = "Motion access is off. Tap the bell to ring it";
pub const STATUS_NO_SENSOR: &str = "No motion sensor found. Tap the bell to ring it";
