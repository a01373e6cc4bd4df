//! Push-button and rotary encoder input

use clcd_protocol::direction;

/// Button and encoder input common to both transports
///
/// Input state is only refreshed by [`InputPanel::update`], which must be
/// called once per application loop iteration.
pub trait InputPanel {
    /// Error reported by the transport
    type Error;

    /// Poll the peripheral and refresh the cached input state
    ///
    /// On failure the previous state is kept.
    fn update(&mut self) -> Result<(), Self::Error>;

    /// Check if the push-button is held down
    fn is_pressed(&self) -> bool;

    /// Encoder movement, clockwise positive
    ///
    /// The HID transport accumulates deltas between calls and this drains
    /// the total. The I2C transport returns the delta of the most recent
    /// poll and leaves it in place.
    fn rotation(&mut self) -> i8;

    /// Sign of [`InputPanel::rotation`]: 1, -1 or 0
    fn direction(&mut self) -> i8 {
        direction(self.rotation())
    }
}
