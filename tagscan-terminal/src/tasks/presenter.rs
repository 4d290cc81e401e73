//! Presenter task
//!
//! Claims completed scans and paints them. The mailbox is cleared by the
//! claim itself, before any drawing, so the scanner resumes while the panel
//! is still being written.

use embassy_sync::blocking_mutex::raw::RawMutex;

use tagscan_display::{DisplaySink, Font};
use tagscan_hid::{CompletedScan, ScanMailbox};

use crate::config::TerminalConfig;
use crate::tag::{present_tag, PresentError};

/// Presentation task state
pub struct Presenter<'a, M: RawMutex, const N: usize, S> {
    mailbox: &'a ScanMailbox<M, N>,
    sink: S,
    font: &'a Font<'a>,
    config: TerminalConfig,
}

impl<'a, M: RawMutex, const N: usize, S: DisplaySink> Presenter<'a, M, N, S> {
    pub fn new(
        mailbox: &'a ScanMailbox<M, N>,
        sink: S,
        font: &'a Font<'a>,
        config: TerminalConfig,
    ) -> Self {
        Self {
            mailbox,
            sink,
            font,
            config,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Paint one scan
    pub fn show(&mut self, scan: &CompletedScan<N>) -> Result<u32, PresentError> {
        debug!("Presenting tag ({} chars)", scan.len());
        present_tag(&mut self.sink, self.font, scan.as_str(), &self.config)
    }

    /// Present the pending scan, if there is one, without waiting
    pub fn poll(&mut self) -> Option<Result<u32, PresentError>> {
        let scan = self.mailbox.try_claim()?;
        Some(self.show(&scan))
    }

    /// Wait for a scan and present it
    pub async fn step(&mut self) -> Result<u32, PresentError> {
        let scan = self.mailbox.claim().await;
        self.show(&scan)
    }

    /// Presenter task body
    ///
    /// Sink errors are logged; the next scan is tried regardless.
    pub async fn run(&mut self) -> ! {
        info!("Presenter task started");

        if let Err(e) = self.config.validate(self.font.height()) {
            warn!("Tag layout does not fit the panel: {:?}", e);
        }

        loop {
            match self.step().await {
                Ok(height) => trace!("Tag presented, {=u32} px", height),
                Err(e) => error!("Tag present failed: {:?}", e),
            }
        }
    }
}
