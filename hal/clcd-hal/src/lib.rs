//! CLCD Hardware Abstraction Layer
//!
//! This crate defines the traits the CLCD1602 drivers use to reach the
//! collaborators they do not own: the USB host stack and the uptime clock.
//! The I2C bus and blocking delays come straight from `embedded-hal`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (menu, clock, volume knob) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  clcd-drivers (UsbClcd, I2cClcd)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ clcd-hal      │       │ embedded-hal  │
//! │ HidHost,Clock │       │ I2c, DelayNs  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`usb::HidHost`] - USB host stack with a HID class driver
//! - [`time::Clock`] - Millisecond uptime source
//!
//! The [`trace!`], [`debug!`], [`info!`] and [`warn!`] macros forward to
//! `defmt` when the `defmt` feature is enabled and compile to nothing
//! otherwise.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod log;
pub mod time;
pub mod usb;

#[cfg(feature = "defmt")]
#[doc(hidden)]
pub use defmt as __defmt;

// Re-export key traits at crate root for convenience
pub use time::Clock;
#[cfg(feature = "embassy-time")]
pub use time::EmbassyClock;
pub use usb::{HidHost, HostEvent, MAX_INPUT_REPORT};
