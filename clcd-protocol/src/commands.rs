//! Command packets shared by both transports
//!
//! The first byte of every pair selects the transfer mode, the second byte is
//! either a character, an HD44780 instruction, or a backlight flag.

/// Number of character rows on the panel
pub const LCD_ROWS: u8 = 2;

/// Number of character columns on the panel
pub const LCD_COLS: u8 = 16;

/// DDRAM offset between the start of row 0 and row 1
pub const ROW_STRIDE: u8 = 0x40;

// HD44780 instructions
pub const LCD_CLEAR_DISPLAY: u8 = 0x01;
pub const LCD_RETURN_HOME: u8 = 0x02;
pub const LCD_DISPLAY_CONTROL: u8 = 0x08;
pub const LCD_DISPLAY_ON: u8 = 0x04;
pub const LCD_SET_DDRAM_ADDR: u8 = 0x80;

// Backlight payloads
pub const BACKLIGHT_OFF: u8 = 0x00;
pub const BACKLIGHT_ON: u8 = 0x01;

/// Transfer mode selector, the first byte of every packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Write the payload to DDRAM as a character
    Data = 0x01,
    /// Forward the payload to the LCD controller as an instruction
    Command = 0x02,
    /// Switch the backlight (payload 0 = off, 1 = on)
    Backlight = 0x03,
}

impl Mode {
    /// Parse a mode from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Mode::Data),
            0x02 => Some(Mode::Command),
            0x03 => Some(Mode::Backlight),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub const fn to_byte(self) -> u8 {
        self as u8
    }
}

/// Fold a cursor position into a DDRAM address
///
/// Row and column wrap around the panel size (Euclidean remainder, so
/// negative positions wrap too). The result is always in `0x00..=0x4F`.
pub fn ddram_address(row: i32, col: i32) -> u8 {
    let row = row.rem_euclid(LCD_ROWS as i32) as u8;
    let col = col.rem_euclid(LCD_COLS as i32) as u8;
    ROW_STRIDE * row + col
}

/// LCD controller instructions used by the drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdCommand {
    /// Clear DDRAM and return the cursor to (0, 0)
    Clear,
    /// Return the cursor to (0, 0) without clearing
    Home,
    /// Turn the display output on or off; DDRAM contents are kept
    Display(bool),
    /// Move the cursor; row and column wrap around the panel size
    SetCursor { row: u8, col: u8 },
    /// Any other HD44780 instruction byte
    Raw(u8),
}

impl LcdCommand {
    /// Instruction byte sent to the controller
    pub fn to_byte(self) -> u8 {
        match self {
            LcdCommand::Clear => LCD_CLEAR_DISPLAY,
            LcdCommand::Home => LCD_RETURN_HOME,
            LcdCommand::Display(true) => LCD_DISPLAY_CONTROL | LCD_DISPLAY_ON,
            LcdCommand::Display(false) => LCD_DISPLAY_CONTROL,
            LcdCommand::SetCursor { row, col } => {
                LCD_SET_DDRAM_ADDR | ddram_address(i32::from(row), i32::from(col))
            }
            LcdCommand::Raw(byte) => byte,
        }
    }
}

/// A single mode + data pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    pub mode: Mode,
    pub data: u8,
}

impl Packet {
    /// Character written at the cursor
    pub const fn data(byte: u8) -> Self {
        Self {
            mode: Mode::Data,
            data: byte,
        }
    }

    /// Controller instruction
    pub fn command(command: LcdCommand) -> Self {
        Self {
            mode: Mode::Command,
            data: command.to_byte(),
        }
    }

    /// Backlight switch
    pub const fn backlight(on: bool) -> Self {
        Self {
            mode: Mode::Backlight,
            data: if on { BACKLIGHT_ON } else { BACKLIGHT_OFF },
        }
    }

    /// Wire representation
    pub const fn to_bytes(self) -> [u8; 2] {
        [self.mode.to_byte(), self.data]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_address_rows() {
        assert_eq!(ddram_address(0, 0), 0x00);
        assert_eq!(ddram_address(0, 15), 0x0F);
        assert_eq!(ddram_address(1, 0), 0x40);
        assert_eq!(ddram_address(1, 15), 0x4F);
    }

    #[test]
    fn test_address_wraps() {
        assert_eq!(ddram_address(2, 16), 0x00);
        assert_eq!(ddram_address(3, 17), 0x41);
        assert_eq!(ddram_address(-1, -1), 0x4F);
    }

    #[test]
    fn test_set_cursor_byte() {
        assert_eq!(LcdCommand::SetCursor { row: 1, col: 5 }.to_byte(), 0xC5);
        assert_eq!(LcdCommand::SetCursor { row: 0, col: 0 }.to_byte(), 0x80);
        assert_eq!(LcdCommand::SetCursor { row: 255, col: 255 }.to_byte(), 0xCF);
    }

    #[test]
    fn test_command_bytes() {
        assert_eq!(LcdCommand::Clear.to_byte(), 0x01);
        assert_eq!(LcdCommand::Home.to_byte(), 0x02);
        assert_eq!(LcdCommand::Display(true).to_byte(), 0x0C);
        assert_eq!(LcdCommand::Display(false).to_byte(), 0x08);
        assert_eq!(LcdCommand::Raw(0x10).to_byte(), 0x10);
    }

    #[test]
    fn test_packet_bytes() {
        assert_eq!(Packet::data(b'A').to_bytes(), [0x01, b'A']);
        assert_eq!(Packet::command(LcdCommand::Clear).to_bytes(), [0x02, 0x01]);
        assert_eq!(Packet::backlight(true).to_bytes(), [0x03, 0x01]);
        assert_eq!(Packet::backlight(false).to_bytes(), [0x03, 0x00]);
    }

    #[test]
    fn test_mode_from_byte() {
        assert_eq!(Mode::from_byte(0x01), Some(Mode::Data));
        assert_eq!(Mode::from_byte(0x02), Some(Mode::Command));
        assert_eq!(Mode::from_byte(0x03), Some(Mode::Backlight));
        assert_eq!(Mode::from_byte(0x04), None);
    }

    proptest! {
        #[test]
        fn prop_address_in_range(row in any::<i32>(), col in any::<i32>()) {
            let address = ddram_address(row, col);
            prop_assert!(address <= 0x4F);
            let expected = 0x40 * row.rem_euclid(2) as u8 + col.rem_euclid(16) as u8;
            prop_assert_eq!(address, expected);
        }

        #[test]
        fn prop_cursor_command_sets_high_bit(row in any::<u8>(), col in any::<u8>()) {
            let byte = LcdCommand::SetCursor { row, col }.to_byte();
            prop_assert_eq!(byte & 0x80, 0x80);
            prop_assert_eq!(byte & 0x7F, 0x40 * (row % 2) + (col % 16));
        }
    }
}
