//! Character LCD trait for the CLCD1602

use clcd_protocol::LCD_COLS;

use super::sink::CharSink;

/// Display operations common to both transports
///
/// Rows and columns wrap around the 2x16 panel rather than being rejected.
pub trait CharacterLcd: CharSink {
    /// Error reported by the transport
    type Error;

    /// Clear the screen and return the cursor to (0, 0)
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Return the cursor to (0, 0) without clearing
    fn home(&mut self) -> Result<(), Self::Error>;

    /// Move the cursor
    ///
    /// - `row`: Row number (0-1)
    /// - `col`: Column number (0-15)
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error>;

    /// Switch the backlight on or off
    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Switch the display output on or off; DDRAM contents are kept
    fn set_display(&mut self, on: bool) -> Result<(), Self::Error>;
}

/// Helper trait for common text layouts
pub trait LcdExt: CharacterLcd {
    /// Write text starting at a position
    ///
    /// Returns the number of bytes the driver accepted.
    fn print_at(&mut self, row: u8, col: u8, text: &str) -> Result<usize, Self::Error> {
        self.set_cursor(row, col)?;
        Ok(self.print(text))
    }

    /// Replace a whole row
    ///
    /// Text longer than the row is cut off, shorter text is padded with
    /// spaces so nothing from the previous contents remains.
    fn print_line(&mut self, row: u8, text: &str) -> Result<usize, Self::Error> {
        let mut line = [b' '; LCD_COLS as usize];
        let bytes = text.as_bytes();
        let len = bytes.len().min(line.len());
        line[..len].copy_from_slice(&bytes[..len]);

        self.set_cursor(row, 0)?;
        Ok(self.write_bytes(&line))
    }
}

// Blanket implementation for all CharacterLcd types
impl<T: CharacterLcd> LcdExt for T {}
