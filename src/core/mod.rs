pub mod bell;
pub mod constants;
pub mod keys;
pub mod motion;
pub mod synth;

pub use bell::*;
pub use keys::*;
pub use motion::*;
pub use synth::*;
