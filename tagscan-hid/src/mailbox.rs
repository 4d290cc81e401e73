//! Single-slot hand-off of completed scans
//!
//! The decoder task posts, one consumer claims. Claiming reads and clears the
//! slot in one step under the mutex, so the consumer never observes a ready
//! flag without its string. While a scan is unclaimed the decoder drops
//! further input instead of overwriting it.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

use crate::scan::CompletedScan;

/// Mailbox holding at most one unclaimed scan
pub struct ScanMailbox<M: RawMutex, const N: usize> {
    slot: Signal<M, CompletedScan<N>>,
}

impl<M: RawMutex, const N: usize> Default for ScanMailbox<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> ScanMailbox<M, N> {
    /// Create an empty mailbox
    pub const fn new() -> Self {
        Self {
            slot: Signal::new(),
        }
    }

    /// Returns true while a posted scan has not been claimed
    pub fn is_pending(&self) -> bool {
        self.slot.signaled()
    }

    /// Post a scan, waking a waiting consumer
    ///
    /// Callers check `is_pending` first; posting over an unclaimed scan
    /// replaces it.
    pub fn post(&self, scan: CompletedScan<N>) {
        self.slot.signal(scan);
    }

    /// Take the pending scan, if any, and clear the slot
    pub fn try_claim(&self) -> Option<CompletedScan<N>> {
        self.slot.try_take()
    }

    /// Wait for a scan and claim it
    pub async fn claim(&self) -> CompletedScan<N> {
        self.slot.wait().await
    }

    /// Discard any pending scan
    pub fn clear(&self) {
        self.slot.reset();
    }
}
