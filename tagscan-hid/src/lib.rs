//! Keyboard-wedge scan decoding
//!
//! A barcode or badge reader that enumerates as a USB keyboard "types" its
//! payload one key at a time. This crate turns the resulting stream of HID
//! boot keyboard reports into discrete scan strings:
//!
//! ```text
//! report ──► edge detection ──► KeyEvent ──► keymap ──► ScanBuffer
//!                                                 │
//!                              terminator release ▼
//!                                            ScanMailbox ──► consumer
//! ```
//!
//! - `KeyboardReport` parses the 8-byte boot report
//! - `ScanDecoder` diffs consecutive reports into press/release edges and
//!   commits a `CompletedScan` when Enter, Tab or Space is released
//! - `ScanMailbox` hands completed scans to a single consumer, dropping new
//!   scans while one is still unclaimed
//!
//! The decoder is single-threaded by construction: one task owns it and feeds
//! reports in arrival order.

#![no_std]
#![deny(unsafe_code)]

pub mod buffer;
pub mod decoder;
pub mod event;
pub mod keymap;
pub mod keyset;
pub mod mailbox;
pub mod report;
pub mod scan;

pub use buffer::ScanBuffer;
pub use decoder::ScanDecoder;
pub use event::{KeyEvent, KeyState};
pub use keymap::{classify, KeyAction};
pub use keyset::KeySet;
pub use mailbox::ScanMailbox;
pub use report::{KeyboardReport, ReportError, REPORT_LEN};
pub use scan::CompletedScan;

/// Scan buffer capacity in characters
///
/// A committed scan holds at most `SCAN_CAPACITY - 1` characters; writing the
/// `SCAN_CAPACITY`-th character wraps the cursor back to zero.
pub const SCAN_CAPACITY: usize = 10;

/// Completed scan at the reference capacity
pub type Scan = CompletedScan<SCAN_CAPACITY>;
