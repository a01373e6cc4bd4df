//! USB HID transport
//!
//! The CLCD1602 enumerates as a vendor HID device. Commands go out as fixed
//! 64-byte output reports; button and encoder state come back as input
//! reports that the driver requests at most every `poll_interval_ms`.
//!
//! # Event flow
//!
//! The host stack signals mounts, unmounts and transfer completions
//! asynchronously. The driver learns about them in two ways:
//!
//! - The host queues [`HostEvent`]s which the driver drains whenever it runs
//!   the host task (in [`UsbClcd::update`] and inside its busy-waits)
//! - The integration layer calls the `on_*` handlers directly from the host
//!   stack's callbacks
//!
//! Either way, all state lives in the driver and every wait is bounded by a
//! timeout from [`HidConfig`].

use core::convert::Infallible;
use core::fmt;

use clcd_core::{CharSink, CharacterLcd, HidConfig, InputPanel};
use clcd_hal::{debug, info, trace, warn, Clock, HidHost, HostEvent};
use clcd_protocol::report::{BOOTLOADER_REQUEST, REPORT_ID};
use clcd_protocol::{text_reports, InputStatus, LcdCommand, OutputReport, Packet};
use embedded_hal::delay::DelayNs;

use crate::error::SinkError;

/// A bound CLCD1602 interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    /// USB device address
    pub dev_addr: u8,
    /// HID interface instance
    pub instance: u8,
}

/// CLCD1602 attached over USB HID
pub struct UsbClcd<H, C, D> {
    host: H,
    clock: C,
    delay: D,
    config: HidConfig,
    session: Option<Session>,
    /// Set while an output report waits for its completion event
    is_sending: bool,
    last_poll_ms: u64,
    pressed: bool,
    /// Encoder detents since the last `read_rotation`
    rotation: i8,
}

impl<H, C, D> UsbClcd<H, C, D>
where
    H: HidHost,
    C: Clock,
    D: DelayNs,
{
    /// Create a driver with the stock configuration
    pub fn new(host: H, clock: C, delay: D) -> Self {
        Self::with_config(host, clock, delay, HidConfig::default())
    }

    /// Create a driver with a custom configuration
    pub fn with_config(host: H, clock: C, delay: D, config: HidConfig) -> Self {
        Self {
            host,
            clock,
            delay,
            config,
            session: None,
            is_sending: false,
            last_poll_ms: 0,
            pressed: false,
            rotation: 0,
        }
    }

    /// Release the host, clock and delay
    pub fn release(self) -> (H, C, D) {
        (self.host, self.clock, self.delay)
    }

    /// Active configuration
    pub fn config(&self) -> &HidConfig {
        &self.config
    }

    /// Access the host stack, e.g. to drive enumeration
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Currently bound interface
    pub fn session(&self) -> Option<Session> {
        self.session
    }

    /// Check if a device is bound
    pub fn is_bound(&self) -> bool {
        self.session.is_some()
    }

    /// Initialize the driver
    ///
    /// Nothing to do on this transport; binding happens on mount.
    pub fn begin(&mut self) -> bool {
        true
    }

    /// Keep input state fresh; call once per application loop iteration
    ///
    /// Dispatches pending host events, then requests a new input report if a
    /// device is bound, the poll interval has elapsed and the device is
    /// ready.
    pub fn update(&mut self) {
        self.process_events();

        if self.session.is_none()
            || self.clock.elapsed_ms(self.last_poll_ms) < u64::from(self.config.poll_interval_ms)
        {
            return;
        }
        if !self.available() {
            return;
        }
        let Some(session) = self.session else {
            return;
        };

        self.last_poll_ms = self.clock.now_ms();
        if !self.host.receive_report(session.dev_addr, session.instance) {
            trace!("input report request not queued");
        }
    }

    /// Check if a device is bound and ready for a transfer
    ///
    /// Waits up to `ready_timeout_ms`, running the host task meanwhile.
    pub fn available(&mut self) -> bool {
        let start = self.clock.now_ms();
        while self.clock.elapsed_ms(start) < u64::from(self.config.ready_timeout_ms) {
            let Some(session) = self.session else {
                return false;
            };
            if self.host.is_ready(session.dev_addr) {
                return true;
            }
            self.process_events();
        }
        false
    }

    /// Run the host task once and dispatch everything it queued
    pub fn process_events(&mut self) {
        self.host.task();
        while let Some(event) = self.host.poll_event() {
            self.handle_event(event);
        }
    }

    /// Clear the screen and return the cursor to (0, 0)
    pub fn clear(&mut self) {
        if self.send_command(LcdCommand::Clear) {
            // The panel is still busy after the report completes
            self.delay.delay_ms(self.config.clear_delay_ms);
        }
    }

    /// Return the cursor to (0, 0) without clearing
    pub fn home(&mut self) {
        if self.send_command(LcdCommand::Home) {
            self.delay.delay_ms(self.config.clear_delay_ms);
        }
    }

    /// Move the cursor; row wraps at 2, column at 16
    pub fn set_cursor(&mut self, row: u8, col: u8) {
        self.send_command(LcdCommand::SetCursor { row, col });
    }

    /// Switch the backlight on or off
    pub fn backlight(&mut self, on: bool) {
        self.send_packet(Packet::backlight(on));
    }

    /// Turn the display output on
    pub fn display(&mut self) {
        self.send_command(LcdCommand::Display(true));
    }

    /// Turn the display output off; DDRAM contents are kept
    pub fn no_display(&mut self) {
        self.send_command(LcdCommand::Display(false));
    }

    /// Forward an instruction to the LCD controller
    ///
    /// Returns `true` if the report was submitted.
    pub fn send_command(&mut self, command: LcdCommand) -> bool {
        self.send_packet(Packet::command(command))
    }

    /// Reboot the peripheral into its bootloader for a firmware update
    ///
    /// The device drops off the bus, so the completion wait runs into its
    /// timeout and an unmount follows.
    pub fn reset_bootloader(&mut self) {
        if let Ok(report) = OutputReport::from_bytes(&BOOTLOADER_REQUEST) {
            info!("requesting bootloader");
            self.send_report(&report);
        }
    }

    /// Check if the push-button was down in the latest input report
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Take the encoder detents accumulated since the previous call
    ///
    /// Each detent is reported exactly once.
    pub fn read_rotation(&mut self) -> i8 {
        core::mem::take(&mut self.rotation)
    }

    fn send_packet(&mut self, packet: Packet) -> bool {
        self.send_report(&OutputReport::from_packet(packet))
    }

    /// Submit one output report and wait for its completion
    ///
    /// A completion timeout is not reported to the caller.
    fn send_report(&mut self, report: &OutputReport) -> bool {
        if !self.available() {
            return false;
        }
        let Some(session) = self.session else {
            return false;
        };

        self.is_sending = true;
        if !self
            .host
            .send_report(session.dev_addr, session.instance, REPORT_ID, report.as_bytes())
        {
            warn!("output report not queued");
            self.is_sending = false;
            return false;
        }

        let start = self.clock.now_ms();
        while self.is_sending
            && self.clock.elapsed_ms(start) < u64::from(self.config.send_timeout_ms)
        {
            self.process_events();
        }
        if self.is_sending {
            debug!("output report completion timed out");
            self.is_sending = false;
        }
        true
    }

    fn is_session(&self, dev_addr: u8, instance: u8) -> bool {
        self.session == Some(Session { dev_addr, instance })
    }

    /// Dispatch a host event to its handler
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Mounted { dev_addr } => {
                self.on_mount(dev_addr);
            }
            HostEvent::Unmounted { dev_addr } => self.on_unmount(dev_addr),
            HostEvent::ReportReceived {
                dev_addr,
                instance,
                report,
            } => self.on_report_received(dev_addr, instance, &report),
            HostEvent::ReportSent { dev_addr, instance } => self.on_report_sent(dev_addr, instance),
        }
    }

    /// A device finished enumeration
    ///
    /// Binds the device if its VID/PID match the configuration. Returns
    /// `false` and leaves the current session untouched otherwise.
    pub fn on_mount(&mut self, dev_addr: u8) -> bool {
        match self.host.vid_pid(dev_addr) {
            Some((vid, pid)) if self.config.matches(vid, pid) => {
                info!("CLCD1602 mounted at address {}", dev_addr);
                self.session = Some(Session {
                    dev_addr,
                    instance: self.config.instance,
                });
                true
            }
            _ => {
                debug!("ignoring device at address {}", dev_addr);
                false
            }
        }
    }

    /// A device was detached
    ///
    /// Only the bound device's detach resets the session and input state.
    pub fn on_unmount(&mut self, dev_addr: u8) {
        if self.session.is_some_and(|s| s.dev_addr == dev_addr) {
            info!("CLCD1602 at address {} unmounted", dev_addr);
            self.session = None;
            // No completion will arrive for an in-flight report
            self.is_sending = false;
            self.pressed = false;
            self.rotation = 0;
        }
    }

    /// An input report arrived
    pub fn on_report_received(&mut self, dev_addr: u8, instance: u8, report: &[u8]) {
        if !self.is_session(dev_addr, instance) {
            return;
        }
        match InputStatus::from_hid_report(report) {
            Ok(status) => {
                self.pressed = status.pressed;
                self.rotation = self.rotation.saturating_add(status.rotation);
            }
            Err(_) => trace!("short input report ({} bytes)", report.len()),
        }
    }

    /// An output report completed
    pub fn on_report_sent(&mut self, dev_addr: u8, instance: u8) {
        if self.is_session(dev_addr, instance) {
            self.is_sending = false;
        }
    }
}

impl<H, C, D> CharSink for UsbClcd<H, C, D>
where
    H: HidHost,
    C: Clock,
    D: DelayNs,
{
    fn write_byte(&mut self, byte: u8) -> usize {
        if !self.available() {
            warn!("write while CLCD1602 unavailable");
            return 0;
        }
        self.send_packet(Packet::data(byte));
        1
    }

    /// Packs up to 32 characters per report
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        for report in text_reports(bytes) {
            self.send_report(&report);
        }
        bytes.len()
    }
}

impl<H, C, D> CharacterLcd for UsbClcd<H, C, D>
where
    H: HidHost,
    C: Clock,
    D: DelayNs,
{
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        UsbClcd::clear(self);
        Ok(())
    }

    fn home(&mut self) -> Result<(), Infallible> {
        UsbClcd::home(self);
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Infallible> {
        UsbClcd::set_cursor(self, row, col);
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Infallible> {
        self.backlight(on);
        Ok(())
    }

    fn set_display(&mut self, on: bool) -> Result<(), Infallible> {
        if on {
            self.display();
        } else {
            self.no_display();
        }
        Ok(())
    }
}

impl<H, C, D> InputPanel for UsbClcd<H, C, D>
where
    H: HidHost,
    C: Clock,
    D: DelayNs,
{
    type Error = Infallible;

    fn update(&mut self) -> Result<(), Infallible> {
        UsbClcd::update(self);
        Ok(())
    }

    fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn rotation(&mut self) -> i8 {
        self.read_rotation()
    }
}

impl<H, C, D> fmt::Write for UsbClcd<H, C, D>
where
    H: HidHost,
    C: Clock,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}

impl<H, C, D> embedded_io::ErrorType for UsbClcd<H, C, D> {
    type Error = SinkError;
}

impl<H, C, D> embedded_io::Write for UsbClcd<H, C, D>
where
    H: HidHost,
    C: Clock,
    D: DelayNs,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize, SinkError> {
        if buf.is_empty() {
            return Ok(0);
        }
        if !self.available() {
            return Err(SinkError::NotReady);
        }
        Ok(self.write_bytes(buf))
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}
