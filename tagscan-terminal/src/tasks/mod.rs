//! Async task bodies
//!
//! Each task owns its state and talks to the others only through the report
//! channel and the scan mailbox. The board firmware wraps `run` in its
//! executor's task attribute.

pub mod presenter;
pub mod scanner;

pub use presenter::Presenter;
pub use scanner::Scanner;
