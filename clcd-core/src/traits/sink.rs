//! Character output sink
//!
//! The narrow byte-oriented interface text formatting layers write through.

/// Byte sink writing characters at the display cursor
///
/// Both methods report how many bytes were consumed. A driver may return
/// fewer bytes than requested when its device is unreachable; it never
/// fails outright.
pub trait CharSink {
    /// Write a single character
    fn write_byte(&mut self, byte: u8) -> usize;

    /// Write a run of characters
    ///
    /// The default writes byte by byte; drivers override it to batch bytes
    /// into as few transfers as the transport allows.
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        bytes.iter().map(|&byte| self.write_byte(byte)).sum()
    }

    /// Write a string's bytes
    ///
    /// The panel's character ROM covers ASCII and half-width katakana, so
    /// other code points show up as whatever glyph their bytes select.
    fn print(&mut self, text: &str) -> usize {
        self.write_bytes(text.as_bytes())
    }
}

impl<T: CharSink + ?Sized> CharSink for &mut T {
    fn write_byte(&mut self, byte: u8) -> usize {
        T::write_byte(self, byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        T::write_bytes(self, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that accepts a fixed number of bytes
    struct LimitedSink {
        written: Vec<u8>,
        limit: usize,
    }

    impl CharSink for LimitedSink {
        fn write_byte(&mut self, byte: u8) -> usize {
            if self.written.len() < self.limit {
                self.written.push(byte);
                1
            } else {
                0
            }
        }
    }

    #[test]
    fn test_default_write_bytes() {
        let mut sink = LimitedSink {
            written: Vec::new(),
            limit: 16,
        };
        assert_eq!(sink.write_bytes(b"abc"), 3);
        assert_eq!(sink.written, b"abc");
    }

    #[test]
    fn test_short_write_is_reported() {
        let mut sink = LimitedSink {
            written: Vec::new(),
            limit: 2,
        };
        assert_eq!(sink.print("hello"), 2);
        assert_eq!(sink.written, b"he");
    }

    #[test]
    fn test_sink_through_reference() {
        let mut sink = LimitedSink {
            written: Vec::new(),
            limit: 8,
        };
        fn fill<S: CharSink>(mut s: S) -> usize {
            s.print("ok")
        }
        assert_eq!(fill(&mut sink), 2);
        assert_eq!(sink.written, b"ok");
    }
}
