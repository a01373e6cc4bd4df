//! CLCD1602 driver implementations
//!
//! This crate provides the two transports for the CLCD1602 character LCD
//! with integrated rotary encoder and push-button:
//!
//! - [`hid::UsbClcd`] - USB HID, driven from a USB host stack through
//!   [`clcd_hal::HidHost`]
//! - [`i2c::I2cClcd`] - I2C, driven through any `embedded-hal` I2C bus
//!
//! Both implement [`CharSink`], [`CharacterLcd`] and [`InputPanel`], plus
//! `core::fmt::Write` and `embedded_io::Write` for text formatting.
//!
//! # Usage
//!
//! ```ignore
//! use clcd_drivers::{i2c::I2cClcd, LcdExt};
//!
//! let mut lcd = I2cClcd::new(i2c, delay);
//! lcd.clear()?;
//! lcd.print_line(0, "Volume")?;
//! loop {
//!     lcd.update()?;
//!     volume += lcd.direction() as i32;
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod error;
pub mod hid;
pub mod i2c;

pub use clcd_core::{CharSink, CharacterLcd, HidConfig, I2cConfig, InputPanel, LcdExt};
pub use error::SinkError;
pub use hid::{Session, UsbClcd};
pub use i2c::I2cClcd;
