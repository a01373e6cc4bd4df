//! Input status reported by the peripheral
//!
//! Both transports report the push-button and encoder the same way:
//! byte 0 is the button state and byte 1 is the signed encoder delta
//! accumulated on the peripheral since the previous report.

use crate::report::ReportError;

/// Length of the I2C status block
pub const STATUS_LEN: usize = 8;

/// Minimum length of a HID input report
pub const INPUT_REPORT_MIN_LEN: usize = 2;

/// Decoded button and encoder state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputStatus {
    /// Push-button is held down
    pub pressed: bool,
    /// Encoder detents since the previous report, clockwise positive
    pub rotation: i8,
}

impl InputStatus {
    /// Decode a HID input report
    ///
    /// The HID firmware reports the button as exactly `0x01` when pressed.
    pub fn from_hid_report(report: &[u8]) -> Result<Self, ReportError> {
        if report.len() < INPUT_REPORT_MIN_LEN {
            return Err(ReportError::TooShort);
        }
        Ok(Self {
            pressed: report[0] == 0x01,
            rotation: report[1] as i8,
        })
    }

    /// Decode the status block read over I2C
    pub fn from_i2c_status(block: &[u8; STATUS_LEN]) -> Self {
        Self {
            pressed: block[0] != 0,
            rotation: block[1] as i8,
        }
    }

    /// Rotation direction, see [`direction`]
    pub fn direction(&self) -> i8 {
        direction(self.rotation)
    }
}

/// Sign of an encoder delta: 1 clockwise, -1 counter-clockwise, 0 at rest
pub fn direction(rotation: i8) -> i8 {
    rotation.signum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hid_report() {
        let status = InputStatus::from_hid_report(&[0x01, 0x03]).unwrap();
        assert!(status.pressed);
        assert_eq!(status.rotation, 3);

        let status = InputStatus::from_hid_report(&[0x00, 0xFE, 0, 0, 0, 0, 0, 0]).unwrap();
        assert!(!status.pressed);
        assert_eq!(status.rotation, -2);
    }

    #[test]
    fn test_hid_report_pressed_is_exact() {
        let status = InputStatus::from_hid_report(&[0x02, 0x00]).unwrap();
        assert!(!status.pressed);
    }

    #[test]
    fn test_hid_report_too_short() {
        assert_eq!(InputStatus::from_hid_report(&[0x01]), Err(ReportError::TooShort));
        assert_eq!(InputStatus::from_hid_report(&[]), Err(ReportError::TooShort));
    }

    #[test]
    fn test_i2c_status() {
        let status = InputStatus::from_i2c_status(&[0x01, 0xFB, 0, 0, 0, 0, 0, 0]);
        assert!(status.pressed);
        assert_eq!(status.rotation, -5);
        assert_eq!(status.direction(), -1);

        let status = InputStatus::from_i2c_status(&[0xFF, 0x00, 0, 0, 0, 0, 0, 0]);
        assert!(status.pressed);
        assert_eq!(status.direction(), 0);
    }

    #[test]
    fn test_direction() {
        assert_eq!(direction(-5), -1);
        assert_eq!(direction(0), 0);
        assert_eq!(direction(7), 1);
        assert_eq!(direction(i8::MIN), -1);
        assert_eq!(direction(i8::MAX), 1);
    }
}
