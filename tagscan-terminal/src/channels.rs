//! Inter-task communication
//!
//! The USB host driver pushes `HostEvent`s from its callback; the scanner
//! task is the only receiver. Completed scans cross to the presenter through
//! the single-slot mailbox.

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::channel::Channel;

use tagscan_hid::{KeyboardReport, ReportError, ScanMailbox, SCAN_CAPACITY};

/// Pending host events before the driver starts dropping
pub const REPORT_QUEUE_DEPTH: usize = 10;

/// Event delivered by the USB host driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostEvent {
    /// A keyboard-class device was attached
    Connected,
    /// Input report from the attached device
    Report(KeyboardReport),
    /// The device went away
    Disconnected,
}

/// Errors from the driver side of the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubmitError {
    /// Report bytes could not be parsed
    Report(ReportError),
    /// Queue full, event dropped
    QueueFull,
}

impl From<ReportError> for SubmitError {
    fn from(e: ReportError) -> Self {
        SubmitError::Report(e)
    }
}

/// Host event queue
pub type ReportChannel<M> = Channel<M, HostEvent, REPORT_QUEUE_DEPTH>;

/// Mailbox shape shared between tasks on the target
pub type SharedMailbox = ScanMailbox<CriticalSectionRawMutex, SCAN_CAPACITY>;

/// Host event queue shape shared between tasks on the target
pub type SharedReportChannel = ReportChannel<CriticalSectionRawMutex>;

/// Parse raw report bytes and enqueue them without waiting
///
/// Safe to call from the driver callback: a full queue drops the report.
pub fn submit_report<M: RawMutex>(
    channel: &ReportChannel<M>,
    data: &[u8],
) -> Result<(), SubmitError> {
    let report = KeyboardReport::from_bytes(data)?;
    channel
        .try_send(HostEvent::Report(report))
        .map_err(|_| SubmitError::QueueFull)
}

/// Enqueue a device event without waiting
pub fn submit_event<M: RawMutex>(
    channel: &ReportChannel<M>,
    event: HostEvent,
) -> Result<(), SubmitError> {
    channel.try_send(event).map_err(|_| SubmitError::QueueFull)
}
