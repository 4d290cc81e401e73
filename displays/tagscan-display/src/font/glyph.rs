//! Run-length encoded glyph bitmaps
//!
//! A glyph is a `width × height` monochrome bitmap stored as a list of run
//! lengths. Decoding starts with the glyph's starting ink, paints `runs[0]`
//! pixels row-major, toggles the ink, paints `runs[1]` pixels, and so on.
//! A zero-length run toggles without painting.

use super::rle::Pixels;

/// Pixel ink of a monochrome bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ink {
    /// Background colour
    Background,
    /// Foreground colour
    Foreground,
}

impl Ink {
    /// The other ink
    pub const fn toggled(self) -> Self {
        match self {
            Ink::Background => Ink::Foreground,
            Ink::Foreground => Ink::Background,
        }
    }

    /// Ink for a bitmap bit
    pub const fn from_bit(set: bool) -> Self {
        if set {
            Ink::Foreground
        } else {
            Ink::Background
        }
    }

    /// Returns true for foreground
    pub const fn is_foreground(self) -> bool {
        matches!(self, Ink::Foreground)
    }
}

/// One character of a run-length encoded font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph<'a> {
    character: char,
    width: u8,
    start: Ink,
    runs: &'a [u16],
}

impl<'a> Glyph<'a> {
    /// Glyph whose first run is background
    pub const fn new(character: char, width: u8, runs: &'a [u16]) -> Self {
        Self::with_start(character, width, Ink::Background, runs)
    }

    /// Glyph with an explicit starting ink
    pub const fn with_start(character: char, width: u8, start: Ink, runs: &'a [u16]) -> Self {
        Self {
            character,
            width,
            start,
            runs,
        }
    }

    /// Character this glyph draws
    pub const fn character(&self) -> char {
        self.character
    }

    /// Advance width in pixels
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Ink of the first run
    pub const fn start(&self) -> Ink {
        self.start
    }

    /// Raw run lengths
    pub const fn runs(&self) -> &'a [u16] {
        self.runs
    }

    /// Sum of all run lengths
    pub const fn pixel_count(&self) -> u32 {
        let mut total = 0u32;
        let mut i = 0;
        while i < self.runs.len() {
            total += self.runs[i] as u32;
            i += 1;
        }
        total
    }

    /// Decoded pixels in row-major order
    pub fn pixels(&self) -> Pixels<'a> {
        Pixels::new(self.start, self.runs)
    }
}
