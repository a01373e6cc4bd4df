//! Configuration type definitions
//!
//! Defaults match the stock CLCD1602 firmware. All durations are in
//! milliseconds.

use clcd_protocol::{I2C_ADDRESS, USB_PID, USB_VID};

// Always derived under test for the postcard round-trip
#[cfg(any(feature = "serde", test))]
use serde::{Deserialize, Serialize};

/// USB HID driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(any(feature = "serde", test), derive(Serialize, Deserialize))]
pub struct HidConfig {
    /// Vendor ID a mounted device must report
    pub vid: u16,
    /// Product ID a mounted device must report
    pub pid: u16,
    /// HID interface used on the device
    pub instance: u8,
    /// Minimum time between input report requests
    pub poll_interval_ms: u32,
    /// How long `available()` waits for the device to become ready
    pub ready_timeout_ms: u32,
    /// How long a report send waits for its completion event
    pub send_timeout_ms: u32,
    /// Extra wait after clear/home, which outlast the USB round trip
    pub clear_delay_ms: u32,
}

impl HidConfig {
    /// Stock firmware settings
    pub const DEFAULT: Self = Self {
        vid: USB_VID,
        pid: USB_PID,
        instance: 0,
        poll_interval_ms: 20,
        ready_timeout_ms: 100,
        send_timeout_ms: 100,
        clear_delay_ms: 5,
    };

    /// Check whether a device's identifiers match this configuration
    pub fn matches(&self, vid: u16, pid: u16) -> bool {
        self.vid == vid && self.pid == pid
    }
}

impl Default for HidConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// I2C driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(any(feature = "serde", test), derive(Serialize, Deserialize))]
pub struct I2cConfig {
    /// 7-bit peripheral address
    pub address: u8,
    /// Wait after a reset request while the peripheral restarts its interface
    pub reset_delay_ms: u32,
    /// Wait after clear/home
    pub clear_delay_ms: u32,
    /// Wait after any other command
    pub command_delay_ms: u32,
}

impl I2cConfig {
    /// Stock firmware settings
    pub const DEFAULT: Self = Self {
        address: I2C_ADDRESS,
        reset_delay_ms: 200,
        clear_delay_ms: 4,
        command_delay_ms: 2,
    };
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
