//! I2C transmission buffer
//!
//! The peripheral's I2C receive buffer holds [`MAX_TRANSMISSION`] bytes, so a
//! single write transaction carries at most 15 packets. Bytes pushed past the
//! capacity are dropped without error, the same way a fixed-size TWI buffer
//! behaves.

use heapless::Vec;

use crate::commands::Packet;

/// 7-bit I2C address of the peripheral
pub const I2C_ADDRESS: u8 = 0x2F;

/// Maximum bytes in a single write transaction
pub const MAX_TRANSMISSION: usize = 30;

/// Maximum characters in a single write transaction
pub const MAX_CHARS_PER_TRANSMISSION: usize = MAX_TRANSMISSION / 2;

/// Opcode requesting the status block
pub const STATUS_REQUEST: u8 = 0x04;

/// Opcode resetting the peripheral's I2C interface
pub const RESET_REQUEST: u8 = 0xFF;

/// Bytes queued for one write transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transmission {
    buffer: Vec<u8, MAX_TRANSMISSION>,
}

impl Transmission {
    /// Create an empty transmission
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Transmission holding a single packet
    pub fn from_packet(packet: Packet) -> Self {
        let mut tx = Self::new();
        tx.push_packet(packet);
        tx
    }

    /// Transmission writing `text` at the cursor
    ///
    /// Only the first [`MAX_CHARS_PER_TRANSMISSION`] characters fit.
    pub fn from_text(text: &[u8]) -> Self {
        let mut tx = Self::new();
        for &byte in text {
            tx.push_packet(Packet::data(byte));
        }
        tx
    }

    /// Queue a byte
    ///
    /// Returns `false` if the buffer is full and the byte was dropped.
    pub fn push(&mut self, byte: u8) -> bool {
        self.buffer.push(byte).is_ok()
    }

    /// Queue both bytes of a packet
    pub fn push_packet(&mut self, packet: Packet) {
        for byte in packet.to_bytes() {
            self.push(byte);
        }
    }

    /// Discard all queued bytes
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Queued bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of queued bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Check if further bytes would be dropped
    pub fn is_full(&self) -> bool {
        self.buffer.is_full()
    }
}

/// Split `text` into data transmissions of at most
/// [`MAX_CHARS_PER_TRANSMISSION`] characters
pub fn text_transmissions(text: &[u8]) -> impl Iterator<Item = Transmission> + '_ {
    text.chunks(MAX_CHARS_PER_TRANSMISSION)
        .map(Transmission::from_text)
}
