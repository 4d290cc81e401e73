//! TagScan terminal task layer
//!
//! Wires the scan decoder to the display:
//!
//! ```text
//! driver callback ──► ReportChannel ──► Scanner ──► ScanMailbox ──► Presenter ──► DisplaySink
//! ```
//!
//! The driver side only enqueues (`submit_report`), never blocks. The scanner
//! task owns the decoder; the presenter claims completed scans and paints them
//! as a tag across the top of the panel.
//!
//! Hardware bring-up lives in the board firmware: it creates the static
//! channel and mailbox from `channels`, spawns `Scanner::run` and
//! `Presenter::run`, and hands the presenter its panel.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate alloc;

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub mod channels;
pub mod config;
pub mod tag;
pub mod tasks;

pub use channels::{
    submit_event, submit_report, HostEvent, ReportChannel, SharedMailbox, SharedReportChannel,
    SubmitError, REPORT_QUEUE_DEPTH,
};
pub use config::{ConfigError, TerminalConfig};
pub use tag::{present_tag, PresentError};
pub use tasks::{Presenter, Scanner};
