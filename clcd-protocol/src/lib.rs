//! CLCD1602 Wire Protocol
//!
//! This crate defines the command packets understood by the CLCD1602
//! peripheral, a 16x2 HD44780-style character LCD with an integrated rotary
//! encoder and push-button. The peripheral's microcontroller accepts the same
//! logical commands over two transports:
//!
//! - **USB HID**: fixed 64-byte output reports, input reports carry status
//! - **I2C**: short write transactions at address `0x2F`, status is read back
//!   with a write-then-read transaction
//!
//! # Packet Format
//!
//! Every logical unit is a two byte pair:
//! ```text
//! ┌──────┬──────┐
//! │ MODE │ DATA │
//! │ 1B   │ 1B   │
//! └──────┴──────┘
//! ```
//!
//! `MODE` selects what the peripheral does with `DATA`: write it as a
//! character, forward it to the LCD controller as an instruction, or switch
//! the backlight. Several pairs may be concatenated into one report or
//! transaction, bounded by the transport's frame size.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod commands;
pub mod report;
pub mod status;
pub mod transmission;

pub use commands::{ddram_address, LcdCommand, Mode, Packet, LCD_COLS, LCD_ROWS};
pub use report::{text_reports, OutputReport, ReportError, REPORT_SIZE, USB_PID, USB_VID};
pub use status::{direction, InputStatus, STATUS_LEN};
pub use transmission::{text_transmissions, Transmission, I2C_ADDRESS, MAX_TRANSMISSION};
