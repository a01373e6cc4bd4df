//! Transport-agnostic core of the CLCD1602 drivers
//!
//! This crate contains everything the HID and I2C drivers share that is not
//! wire format:
//!
//! - Output and input traits ([`traits::CharSink`], [`traits::CharacterLcd`],
//!   [`traits::InputPanel`])
//! - Text helpers built on top of them ([`traits::LcdExt`])
//! - Driver configuration types ([`config::HidConfig`], [`config::I2cConfig`])

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod traits;

pub use config::{HidConfig, I2cConfig};
pub use traits::{CharSink, CharacterLcd, InputPanel, LcdExt};
