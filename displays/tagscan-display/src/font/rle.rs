//! Run-length coding of monochrome bitmaps

use alloc::vec::Vec;

use super::glyph::Ink;

/// Iterator over the pixels described by a run list
#[derive(Debug, Clone)]
pub struct Pixels<'a> {
    runs: &'a [u16],
    ink: Ink,
    remaining: u16,
}

impl<'a> Pixels<'a> {
    pub(crate) fn new(start: Ink, runs: &'a [u16]) -> Self {
        match runs.split_first() {
            Some((&first, rest)) => Self {
                runs: rest,
                ink: start,
                remaining: first,
            },
            None => Self {
                runs,
                ink: start,
                remaining: 0,
            },
        }
    }
}

impl Iterator for Pixels<'_> {
    type Item = Ink;

    fn next(&mut self) -> Option<Ink> {
        while self.remaining == 0 {
            let (&next, rest) = self.runs.split_first()?;
            self.runs = rest;
            self.remaining = next;
            self.ink = self.ink.toggled();
        }
        self.remaining -= 1;
        Some(self.ink)
    }
}

/// Encode a row-major bitmap into runs
///
/// The starting ink is taken from the first pixel so no leading zero run is
/// emitted. Runs longer than `u16::MAX` are split with a zero-length run of
/// the opposite ink.
pub fn encode(bitmap: impl IntoIterator<Item = bool>) -> (Ink, Vec<u16>) {
    let mut pixels = bitmap.into_iter();
    let mut runs = Vec::new();

    let Some(first) = pixels.next() else {
        return (Ink::Background, runs);
    };

    let start = Ink::from_bit(first);
    let mut ink = start;
    let mut length: u16 = 1;

    for bit in pixels {
        let pixel = Ink::from_bit(bit);
        if pixel == ink {
            if length == u16::MAX {
                runs.push(length);
                runs.push(0);
                length = 0;
            }
            length += 1;
        } else {
            runs.push(length);
            ink = pixel;
            length = 1;
        }
    }
    runs.push(length);

    (start, runs)
}

/// Decode runs into a row-major bitmap
pub fn decode(start: Ink, runs: &[u16]) -> Vec<bool> {
    Pixels::new(start, runs).map(Ink::is_foreground).collect()
}
