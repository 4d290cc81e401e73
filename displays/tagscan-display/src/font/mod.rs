//! Run-length encoded bitmap fonts
//!
//! A font is a fixed line height plus a small table of glyphs. Tables are
//! validated when the font is built: a `const`/`static` font with a glyph
//! whose runs do not cover exactly `width × height` pixels fails to compile.

pub mod glyph;
mod mono40;
pub mod rle;

pub use glyph::{Glyph, Ink};
pub use mono40::MONO_40;

/// Font table validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Line height of zero
    ZeroHeight,
    /// Glyph with zero width
    ZeroWidth {
        /// Offending character
        character: char,
    },
    /// Runs do not add up to `width × height`
    RunMismatch {
        /// Offending character
        character: char,
        /// `width × height`
        expected: u32,
        /// Sum of the runs
        actual: u32,
    },
}

/// Bitmap font with a fixed line height
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Font<'a> {
    height: u8,
    glyphs: &'a [Glyph<'a>],
}

impl<'a> Font<'a> {
    /// Validate and build a font
    pub const fn try_new(height: u8, glyphs: &'a [Glyph<'a>]) -> Result<Self, FontError> {
        if height == 0 {
            return Err(FontError::ZeroHeight);
        }

        let mut i = 0;
        while i < glyphs.len() {
            let glyph = &glyphs[i];
            if glyph.width() == 0 {
                return Err(FontError::ZeroWidth {
                    character: glyph.character(),
                });
            }

            let expected = glyph.width() as u32 * height as u32;
            let actual = glyph.pixel_count();
            if actual != expected {
                return Err(FontError::RunMismatch {
                    character: glyph.character(),
                    expected,
                    actual,
                });
            }
            i += 1;
        }

        Ok(Self { height, glyphs })
    }

    /// Build a font, panicking on a malformed table
    ///
    /// Use in `const`/`static` items so the check runs at compile time.
    pub const fn new(height: u8, glyphs: &'a [Glyph<'a>]) -> Self {
        match Self::try_new(height, glyphs) {
            Ok(font) => font,
            Err(FontError::ZeroHeight) => panic!("font height is zero"),
            Err(FontError::ZeroWidth { .. }) => panic!("glyph width is zero"),
            Err(FontError::RunMismatch { .. }) => panic!("glyph runs do not cover width x height"),
        }
    }

    /// Line height in pixels
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// All glyphs in table order
    pub const fn glyphs(&self) -> &'a [Glyph<'a>] {
        self.glyphs
    }

    /// Find the glyph for a character
    ///
    /// The first matching entry wins.
    pub fn lookup(&self, character: char) -> Option<&'a Glyph<'a>> {
        self.glyphs.iter().find(|glyph| glyph.character() == character)
    }

    /// Horizontal advance of a character
    ///
    /// Characters without a glyph advance by the line height.
    pub fn advance(&self, character: char) -> u16 {
        match self.lookup(character) {
            Some(glyph) => glyph.width() as u16,
            None => self.height as u16,
        }
    }
}
