//! I2C transport
//!
//! Every command is one write transaction of MODE|DATA pairs to the
//! peripheral, followed by a fixed settle delay. Input state is read back
//! with a write-then-read transaction:
//!
//! ```text
//! W: [0x04]            status request
//! R: [P][R][.. 6 ..]   P = pressed, R = signed rotation
//! ```

use core::fmt;

use clcd_core::{CharSink, CharacterLcd, I2cConfig, InputPanel};
use clcd_hal::{trace, warn};
use clcd_protocol::transmission::{RESET_REQUEST, STATUS_REQUEST};
use clcd_protocol::{
    direction, text_transmissions, InputStatus, LcdCommand, Packet, Transmission, STATUS_LEN,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c};

use crate::error::SinkError;

/// CLCD1602 attached over I2C
pub struct I2cClcd<I2C, D> {
    i2c: I2C,
    delay: D,
    config: I2cConfig,
    pressed: bool,
    /// Encoder delta from the most recent successful poll
    rotation: i8,
}

impl<I2C, D> I2cClcd<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver at the default address
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, I2cConfig::default())
    }

    pub fn with_config(i2c: I2C, delay: D, config: I2cConfig) -> Self {
        Self {
            i2c,
            delay,
            config,
            pressed: false,
            rotation: 0,
        }
    }

    /// Release the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    pub fn config(&self) -> &I2cConfig {
        &self.config
    }

    /// Initialize the driver; nothing to do on this transport
    pub fn begin(&mut self) -> bool {
        true
    }

    /// Restart the peripheral's I2C interface
    ///
    /// Waits `reset_delay_ms` afterwards whether or not the write succeeded.
    pub fn reset_device(&mut self) -> Result<(), I2C::Error> {
        let result = self.i2c.write(self.config.address, &[RESET_REQUEST]);
        self.delay.delay_ms(self.config.reset_delay_ms);
        result
    }

    fn end_transmission(&mut self, transmission: &Transmission) -> Result<(), I2C::Error> {
        self.i2c.write(self.config.address, transmission.as_bytes())
    }

    /// Send one packet, then give the panel `settle_ms` to execute it
    fn command(&mut self, packet: Packet, settle_ms: u32) -> Result<(), I2C::Error> {
        let result = self.end_transmission(&Transmission::from_packet(packet));
        self.delay.delay_ms(settle_ms);
        result
    }

    /// Clear the screen and return the cursor to (0, 0)
    pub fn clear(&mut self) -> Result<(), I2C::Error> {
        self.command(Packet::command(LcdCommand::Clear), self.config.clear_delay_ms)
    }

    /// Return the cursor to (0, 0) without clearing
    pub fn home(&mut self) -> Result<(), I2C::Error> {
        self.command(Packet::command(LcdCommand::Home), self.config.clear_delay_ms)
    }

    pub fn display(&mut self) -> Result<(), I2C::Error> {
        self.send_command(LcdCommand::Display(true))
    }

    /// Turn the display output off; DDRAM contents are kept
    pub fn no_display(&mut self) -> Result<(), I2C::Error> {
        self.send_command(LcdCommand::Display(false))
    }

    pub fn backlight(&mut self) -> Result<(), I2C::Error> {
        self.command(Packet::backlight(true), self.config.command_delay_ms)
    }

    pub fn no_backlight(&mut self) -> Result<(), I2C::Error> {
        self.command(Packet::backlight(false), self.config.command_delay_ms)
    }

    /// Move the cursor; row wraps at 2, column at 16
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), I2C::Error> {
        self.send_command(LcdCommand::SetCursor { row, col })
    }

    /// Forward an instruction to the LCD controller
    pub fn send_command(&mut self, command: LcdCommand) -> Result<(), I2C::Error> {
        self.command(Packet::command(command), self.config.command_delay_ms)
    }

    /// Poll button and encoder state
    ///
    /// On a bus error the previous state is kept.
    pub fn update(&mut self) -> Result<(), I2C::Error> {
        let mut block = [0u8; STATUS_LEN];
        if let Err(e) = self
            .i2c
            .write_read(self.config.address, &[STATUS_REQUEST], &mut block)
        {
            warn!("status poll failed: {}", e.kind());
            return Err(e);
        }

        let status = InputStatus::from_i2c_status(&block);
        trace!("status pressed={} rotation={}", status.pressed, status.rotation);
        self.pressed = status.pressed;
        self.rotation = status.rotation;
        Ok(())
    }

    /// Check if the push-button was down at the last poll
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Sign of the last polled rotation: 1, -1 or 0
    pub fn direction(&self) -> i8 {
        direction(self.rotation)
    }

    /// Raw encoder delta from the last poll
    pub fn rotation(&self) -> i8 {
        self.rotation
    }
}

impl<I2C, D> CharSink for I2cClcd<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn write_byte(&mut self, byte: u8) -> usize {
        if let Err(e) = self.end_transmission(&Transmission::from_packet(Packet::data(byte))) {
            warn!("character write failed: {}", e.kind());
        }
        1
    }

    /// Sends at most 15 characters per transaction
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        for transmission in text_transmissions(bytes) {
            if let Err(e) = self.end_transmission(&transmission) {
                warn!("text write failed: {}", e.kind());
            }
        }
        bytes.len()
    }
}

impl<I2C, D> CharacterLcd for I2cClcd<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = I2C::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        I2cClcd::clear(self)
    }

    fn home(&mut self) -> Result<(), Self::Error> {
        I2cClcd::home(self)
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error> {
        I2cClcd::set_cursor(self, row, col)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        if on {
            self.backlight()
        } else {
            self.no_backlight()
        }
    }

    fn set_display(&mut self, on: bool) -> Result<(), Self::Error> {
        if on {
            self.display()
        } else {
            self.no_display()
        }
    }
}

impl<I2C, D> InputPanel for I2cClcd<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = I2C::Error;

    fn update(&mut self) -> Result<(), Self::Error> {
        I2cClcd::update(self)
    }

    fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn rotation(&mut self) -> i8 {
        self.rotation
    }
}

impl<I2C, D> fmt::Write for I2cClcd<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}

impl<I2C, D> embedded_io::ErrorType for I2cClcd<I2C, D> {
    type Error = SinkError;
}

impl<I2C, D> embedded_io::Write for I2cClcd<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Stops at the first failed transaction and reports what got through
    fn write(&mut self, buf: &[u8]) -> Result<usize, SinkError> {
        let mut written = 0;
        for transmission in text_transmissions(buf) {
            if self.end_transmission(&transmission).is_err() {
                return if written == 0 {
                    Err(SinkError::Bus)
                } else {
                    Ok(written)
                };
            }
            written += transmission.len() / 2;
        }
        Ok(written)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}
