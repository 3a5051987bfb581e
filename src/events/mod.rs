pub mod keyboard;
pub mod motion;
pub mod pointer;

pub use keyboard::wire_ring_keys;
pub use motion::wire_motion;
pub use pointer::wire_bell_click;
