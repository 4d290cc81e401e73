//! Text rendering for TagScan displays
//!
//! This crate provides:
//! - `Rgb565` packed 16-bit colour
//! - `Font` and `Glyph`, a compact run-length encoded bitmap font model,
//!   with the built-in 40 px `MONO_40` face
//! - `render`, greedy per-character text layout into any `Canvas`
//! - `Frame`, an owned pixel buffer handed to a `DisplaySink` for presentation
//!
//! # Architecture
//!
//! Rendering never talks to hardware. A frame is allocated for the region to
//! update, text is drawn into it, and the finished frame is moved into
//! `Frame::present`, which blits it through the sink and frees the buffer.
//!
//! With the `embedded-graphics` feature any `DrawTarget<Color = Rgb565>` can
//! serve as the sink.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod color;
pub mod font;
pub mod frame;
#[cfg(any(feature = "embedded-graphics", test))]
pub mod graphics;
pub mod render;
pub mod sink;

// Re-export key types
pub use color::Rgb565;
pub use font::{Font, FontError, Glyph, Ink, MONO_40};
pub use frame::{Canvas, Frame, FrameError};
pub use render::{measure, render, TextStyle};
pub use sink::{DisplayError, DisplaySink, Region};

#[cfg(feature = "embedded-graphics")]
pub use graphics::DrawTargetSink;
