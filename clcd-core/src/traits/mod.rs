//! Driver traits
//!
//! These traits define the interface between application code and the
//! transport-specific drivers.

pub mod display;
pub mod input;
pub mod sink;

pub use display::{CharacterLcd, LcdExt};
pub use input::InputPanel;
pub use sink::CharSink;
