//! USB HID report framing
//!
//! Output reports are always [`REPORT_SIZE`] bytes. A report carries up to
//! [`MAX_CHARS_PER_REPORT`] packets back to back; unused bytes are zero,
//! which the peripheral treats as the end of the report.

use crate::commands::Packet;

/// USB vendor ID of the CLCD1602
pub const USB_VID: u16 = 0xF055;

/// USB product ID of the CLCD1602
pub const USB_PID: u16 = 0x6584;

/// Output report size in bytes
pub const REPORT_SIZE: usize = 64;

/// Report ID used for every output report
pub const REPORT_ID: u8 = 0;

/// Maximum number of characters packed into one report
pub const MAX_CHARS_PER_REPORT: usize = REPORT_SIZE / 2;

/// Magic report that reboots the peripheral into its bootloader
pub const BOOTLOADER_REQUEST: [u8; 2] = [0xAA, 0xFF];

/// Errors that can occur while framing or decoding reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportError {
    /// Content does not fit in a single report
    TooLarge,
    /// Input report shorter than the status fields
    TooShort,
}

/// A fixed-size output report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputReport {
    bytes: [u8; REPORT_SIZE],
}

impl Default for OutputReport {
    fn default() -> Self {
        Self {
            bytes: [0; REPORT_SIZE],
        }
    }
}

impl OutputReport {
    /// Report carrying a single packet
    pub fn from_packet(packet: Packet) -> Self {
        let mut report = Self::default();
        report.bytes[..2].copy_from_slice(&packet.to_bytes());
        report
    }

    /// Report built from raw bytes, zero-padded to [`REPORT_SIZE`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        if bytes.len() > REPORT_SIZE {
            return Err(ReportError::TooLarge);
        }
        let mut report = Self::default();
        report.bytes[..bytes.len()].copy_from_slice(bytes);
        Ok(report)
    }

    /// Report writing `text` at the cursor, one data packet per byte
    pub fn from_text(text: &[u8]) -> Result<Self, ReportError> {
        if text.len() > MAX_CHARS_PER_REPORT {
            return Err(ReportError::TooLarge);
        }
        Ok(Self::pack_text(text))
    }

    fn pack_text(text: &[u8]) -> Self {
        let mut report = Self::default();
        for (pair, &byte) in report.bytes.chunks_exact_mut(2).zip(text) {
            pair.copy_from_slice(&Packet::data(byte).to_bytes());
        }
        report
    }

    /// Number of packets in the report, counting up to the first empty pair
    pub fn packet_count(&self) -> usize {
        self.bytes
            .chunks_exact(2)
            .take_while(|pair| pair[0] != 0)
            .count()
    }

    /// Raw report bytes
    pub fn as_bytes(&self) -> &[u8; REPORT_SIZE] {
        &self.bytes
    }
}

/// Split `text` into data reports of at most [`MAX_CHARS_PER_REPORT`] characters
pub fn text_reports(text: &[u8]) -> impl Iterator<Item = OutputReport> + '_ {
    text.chunks(MAX_CHARS_PER_REPORT).map(OutputReport::pack_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::LcdCommand;

    #[test]
    fn test_single_packet_is_padded() {
        let report = OutputReport::from_packet(Packet::command(LcdCommand::Clear));
        let bytes = report.as_bytes();
        assert_eq!(bytes.len(), REPORT_SIZE);
        assert_eq!(&bytes[..2], &[0x02, 0x01]);
        assert!(bytes[2..].iter().all(|&b| b == 0));
        assert_eq!(report.packet_count(), 1);
    }

    #[test]
    fn test_text_report_layout() {
        let report = OutputReport::from_text(b"Hi!").unwrap();
        let bytes = report.as_bytes();
        assert_eq!(&bytes[..6], &[0x01, b'H', 0x01, b'i', 0x01, b'!']);
        assert!(bytes[6..].iter().all(|&b| b == 0));
        assert_eq!(report.packet_count(), 3);
    }

    #[test]
    fn test_text_too_long() {
        let text = [b'x'; MAX_CHARS_PER_REPORT + 1];
        assert_eq!(OutputReport::from_text(&text), Err(ReportError::TooLarge));
    }

    #[test]
    fn test_full_text_report() {
        let text = [b'x'; MAX_CHARS_PER_REPORT];
        let report = OutputReport::from_text(&text).unwrap();
        assert_eq!(report.packet_count(), MAX_CHARS_PER_REPORT);
        assert_eq!(report.as_bytes()[REPORT_SIZE - 1], b'x');
    }

    #[test]
    fn test_raw_bytes() {
        let report = OutputReport::from_bytes(&BOOTLOADER_REQUEST).unwrap();
        assert_eq!(&report.as_bytes()[..2], &[0xAA, 0xFF]);

        let too_big = [0u8; REPORT_SIZE + 1];
        assert_eq!(OutputReport::from_bytes(&too_big), Err(ReportError::TooLarge));
    }

    #[test]
    fn test_text_reports_chunking() {
        let text = [b'a'; 40];
        let reports: Vec<_> = text_reports(&text).collect();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].packet_count(), 32);
        assert_eq!(reports[1].packet_count(), 8);
        assert!(reports[1].as_bytes()[16..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_text_reports_empty() {
        assert_eq!(text_reports(&[]).count(), 0);
    }
}
