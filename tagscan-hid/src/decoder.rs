//! Report stream to scan decoder
//!
//! Characters are committed on key release, so a scan finishes only after the
//! terminator key comes back up. Edges are derived per slot:
//!
//! - slot `i` of the previous report, if no longer held anywhere: release
//! - slot `i` of the current report, if not held anywhere before: press
//!
//! Release of slot `i` is handled before press of slot `i`.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::buffer::ScanBuffer;
use crate::event::{KeyEvent, KeyState};
use crate::keymap::{classify, KeyAction};
use crate::keyset::KeySet;
use crate::mailbox::ScanMailbox;
use crate::report::{is_key, KeyboardReport, ReportError, KEY_SLOTS};
use crate::scan::CompletedScan;

/// Stateful decoder driven by a single consumer task
pub struct ScanDecoder<'a, M: RawMutex, const N: usize> {
    /// Keys held in the previous report
    held: KeySet,
    /// Slot layout of the previous report
    previous_slots: [u8; KEY_SLOTS],
    buffer: ScanBuffer<N>,
    mailbox: &'a ScanMailbox<M, N>,
    /// Mapped releases discarded while a scan was unclaimed
    dropped: u32,
}

impl<'a, M: RawMutex, const N: usize> ScanDecoder<'a, M, N> {
    /// Create a decoder that posts completed scans to `mailbox`
    pub fn new(mailbox: &'a ScanMailbox<M, N>) -> Self {
        Self {
            held: KeySet::new(),
            previous_slots: [0; KEY_SLOTS],
            buffer: ScanBuffer::new(),
            mailbox,
            dropped: 0,
        }
    }

    /// Decode raw report bytes
    ///
    /// A short report is rejected before any state is touched.
    pub fn decode_bytes(
        &mut self,
        data: &[u8],
    ) -> Result<Option<CompletedScan<N>>, ReportError> {
        let report = KeyboardReport::from_bytes(data)?;
        Ok(self.decode(&report))
    }

    /// Process one report
    ///
    /// Returns the scan committed by this report, if any. The same scan is
    /// posted to the mailbox.
    pub fn decode(&mut self, report: &KeyboardReport) -> Option<CompletedScan<N>> {
        self.decode_with(report, |_| {})
    }

    /// Process one report, observing every derived edge
    pub fn decode_with(
        &mut self,
        report: &KeyboardReport,
        mut on_event: impl FnMut(&KeyEvent),
    ) -> Option<CompletedScan<N>> {
        let current = KeySet::from_codes(report.pressed());
        let mut committed = None;

        for slot in 0..KEY_SLOTS {
            let old = self.previous_slots[slot];
            if is_key(old) && !current.contains(old) {
                let event = KeyEvent::released(old);
                on_event(&event);
                if let Some(scan) = self.handle_event(&event) {
                    committed = Some(scan);
                }
            }

            let new = report.keys[slot];
            if is_key(new) && !self.held.contains(new) {
                let event = KeyEvent::pressed(new, report.modifier);
                on_event(&event);
                // Presses never commit
                self.handle_event(&event);
            }
        }

        self.held = current;
        self.previous_slots = report.keys;

        committed
    }

    /// Apply a single key edge
    ///
    /// Returns the committed scan when a terminator is released.
    pub fn handle_event(&mut self, event: &KeyEvent) -> Option<CompletedScan<N>> {
        if event.state == KeyState::Pressed {
            return None;
        }

        let action = classify(event.key_code);

        // Back-pressure: nothing moves until the consumer claims
        if self.mailbox.is_pending() {
            if action != KeyAction::Ignore {
                self.dropped = self.dropped.wrapping_add(1);
            }
            return None;
        }

        match action {
            KeyAction::Terminate => {
                let scan = CompletedScan::from_ascii(self.buffer.pending());
                self.buffer.rewind();
                self.mailbox.post(scan.clone());
                Some(scan)
            }
            KeyAction::Char(ch) => {
                self.buffer.push_wrapping(ch as u8);
                None
            }
            KeyAction::Ignore => None,
        }
    }

    /// Keys held as of the last report
    pub fn held(&self) -> &KeySet {
        &self.held
    }

    /// Scan buffer contents
    pub fn buffer(&self) -> &ScanBuffer<N> {
        &self.buffer
    }

    /// Characters and terminators discarded so far because a scan was
    /// still unclaimed
    ///
    /// Wraps on overflow; compare snapshots with `wrapping_sub`.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Forget held keys, e.g. after the device disconnects
    ///
    /// Buffered characters are kept.
    pub fn reset_keys(&mut self) {
        self.held = KeySet::new();
        self.previous_slots = [0; KEY_SLOTS];
    }
}
