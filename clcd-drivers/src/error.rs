//! Error types shared by the drivers

/// Error returned through `embedded_io::Write`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// No device bound, or it did not become ready in time
    NotReady,
    /// The bus rejected the transaction
    Bus,
}

impl embedded_io::Error for SinkError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            SinkError::NotReady => embedded_io::ErrorKind::NotConnected,
            SinkError::Bus => embedded_io::ErrorKind::Other,
        }
    }
}

impl core::fmt::Display for SinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SinkError::NotReady => f.write_str("device not ready"),
            SinkError::Bus => f.write_str("bus error"),
        }
    }
}
