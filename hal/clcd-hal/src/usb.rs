//! USB host abstractions
//!
//! Provides the trait a USB host stack with a HID class driver implements so
//! the HID driver can talk to the CLCD1602 without depending on a specific
//! runtime's callback registration.
//!
//! Host stacks usually report mounts, unmounts and report completions
//! through global callbacks. Implementations of [`HidHost`] queue those as
//! [`HostEvent`]s instead; the driver drains them while it waits.

use heapless::Vec;

/// Largest input report a [`HostEvent::ReportReceived`] can carry
pub const MAX_INPUT_REPORT: usize = 64;

/// Something the host stack observed while running its task
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostEvent {
    /// A device finished enumeration
    Mounted { dev_addr: u8 },
    /// A device was detached
    Unmounted { dev_addr: u8 },
    /// An input report requested with [`HidHost::receive_report`] arrived
    ReportReceived {
        dev_addr: u8,
        instance: u8,
        report: Vec<u8, MAX_INPUT_REPORT>,
    },
    /// An output report submitted with [`HidHost::send_report`] completed
    ReportSent { dev_addr: u8, instance: u8 },
}

impl HostEvent {
    /// Create a report-received event, truncating oversized reports
    pub fn report_received(dev_addr: u8, instance: u8, report: &[u8]) -> Self {
        let len = report.len().min(MAX_INPUT_REPORT);
        let mut bytes = Vec::new();
        // Cannot fail: len is clamped to capacity
        let _ = bytes.extend_from_slice(&report[..len]);
        HostEvent::ReportReceived {
            dev_addr,
            instance,
            report: bytes,
        }
    }

    /// Device address the event refers to
    pub fn dev_addr(&self) -> u8 {
        match self {
            HostEvent::Mounted { dev_addr }
            | HostEvent::Unmounted { dev_addr }
            | HostEvent::ReportReceived { dev_addr, .. }
            | HostEvent::ReportSent { dev_addr, .. } => *dev_addr,
        }
    }
}

/// USB host stack with HID support
///
/// Device addresses are the host's bus addresses (non-zero once mounted),
/// `instance` is the HID interface index on that device.
pub trait HidHost {
    /// Vendor and product ID of a mounted device
    fn vid_pid(&self, dev_addr: u8) -> Option<(u16, u16)>;

    /// Check if the device can accept a new transfer
    fn is_ready(&self, dev_addr: u8) -> bool;

    /// Run one iteration of the host stack's processing loop
    ///
    /// This is where completions are detected and events get queued.
    fn task(&mut self);

    /// Take the next queued event, if any
    fn poll_event(&mut self) -> Option<HostEvent>;

    /// Request the next input report from a HID interface
    ///
    /// Returns `false` if the request could not be queued.
    fn receive_report(&mut self, dev_addr: u8, instance: u8) -> bool;

    /// Submit an output report to a HID interface
    ///
    /// Returns `false` if the report could not be queued. Completion is
    /// signalled later with [`HostEvent::ReportSent`].
    fn send_report(&mut self, dev_addr: u8, instance: u8, report_id: u8, report: &[u8]) -> bool;
}

impl<T: HidHost + ?Sized> HidHost for &mut T {
    fn vid_pid(&self, dev_addr: u8) -> Option<(u16, u16)> {
        T::vid_pid(self, dev_addr)
    }

    fn is_ready(&self, dev_addr: u8) -> bool {
        T::is_ready(self, dev_addr)
    }

    fn task(&mut self) {
        T::task(self)
    }

    fn poll_event(&mut self) -> Option<HostEvent> {
        T::poll_event(self)
    }

    fn receive_report(&mut self, dev_addr: u8, instance: u8) -> bool {
        T::receive_report(self, dev_addr, instance)
    }

    fn send_report(&mut self, dev_addr: u8, instance: u8, report_id: u8, report: &[u8]) -> bool {
        T::send_report(self, dev_addr, instance, report_id, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_received_copies_bytes() {
        let event = HostEvent::report_received(3, 0, &[0x01, 0xFF]);
        match event {
            HostEvent::ReportReceived {
                dev_addr,
                instance,
                report,
            } => {
                assert_eq!(dev_addr, 3);
                assert_eq!(instance, 0);
                assert_eq!(report.as_slice(), &[0x01, 0xFF]);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_report_received_truncates() {
        let big = [0xAB; MAX_INPUT_REPORT + 8];
        if let HostEvent::ReportReceived { report, .. } = HostEvent::report_received(1, 0, &big) {
            assert_eq!(report.len(), MAX_INPUT_REPORT);
        } else {
            panic!("expected ReportReceived");
        }
    }

    #[test]
    fn test_dev_addr() {
        assert_eq!(HostEvent::Mounted { dev_addr: 5 }.dev_addr(), 5);
        assert_eq!(HostEvent::Unmounted { dev_addr: 6 }.dev_addr(), 6);
        assert_eq!(
            HostEvent::ReportSent {
                dev_addr: 7,
                instance: 0
            }
            .dev_addr(),
            7
        );
    }
}
