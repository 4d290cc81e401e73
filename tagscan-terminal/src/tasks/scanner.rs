//! Scanner task
//!
//! Drains host events in arrival order and drives the decoder. Only this task
//! touches the decoder.

use embassy_sync::blocking_mutex::raw::RawMutex;

use tagscan_hid::{CompletedScan, KeyboardReport, ScanDecoder, ScanMailbox};

use crate::channels::{HostEvent, ReportChannel};

/// Decoder task state
pub struct Scanner<'a, M: RawMutex, const N: usize> {
    decoder: ScanDecoder<'a, M, N>,
}

impl<'a, M: RawMutex, const N: usize> Scanner<'a, M, N> {
    pub fn new(mailbox: &'a ScanMailbox<M, N>) -> Self {
        Self {
            decoder: ScanDecoder::new(mailbox),
        }
    }

    pub fn decoder(&self) -> &ScanDecoder<'a, M, N> {
        &self.decoder
    }

    /// Apply one host event
    ///
    /// Returns the scan committed by it, if any.
    pub fn handle(&mut self, event: HostEvent) -> Option<CompletedScan<N>> {
        match event {
            HostEvent::Connected => {
                info!("Scanner connected");
                None
            }
            HostEvent::Disconnected => {
                info!(
                    "Scanner disconnected, {} keys held",
                    self.decoder.held().len()
                );
                // Keys held at unplug never see a release
                self.decoder.reset_keys();
                None
            }
            HostEvent::Report(report) => self.handle_report(&report),
        }
    }

    fn handle_report(&mut self, report: &KeyboardReport) -> Option<CompletedScan<N>> {
        let dropped_before = self.decoder.dropped();
        let shift = report.shift();

        let scan = self.decoder.decode_with(report, |event| {
            trace!(
                "Key {:?}: {=u8:#x} shift={=bool}",
                event.state,
                event.key_code,
                shift
            );
        });

        let dropped = self.decoder.dropped().wrapping_sub(dropped_before);
        if dropped > 0 {
            debug!("Scan unclaimed, dropped {=u32} key releases", dropped);
        }

        if report.is_empty() {
            trace!("All keys up");
        }

        if let Some(scan) = &scan {
            info!("Scan: {}", scan.as_str());
        }

        scan
    }

    /// Wait for the next host event and apply it
    pub async fn step<MC: RawMutex>(
        &mut self,
        channel: &ReportChannel<MC>,
    ) -> Option<CompletedScan<N>> {
        let event = channel.receive().await;
        self.handle(event)
    }

    /// Scanner task body
    pub async fn run<MC: RawMutex>(&mut self, channel: &ReportChannel<MC>) -> ! {
        info!("Scanner task started");

        loop {
            self.step(channel).await;
        }
    }
}
