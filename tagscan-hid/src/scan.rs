//! Completed scan value

use heapless::String;

/// A committed scan string
///
/// Holds fewer than `N` characters, since the buffer it was copied from
/// wraps before reaching `N`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedScan<const N: usize> {
    text: String<N>,
}

impl<const N: usize> CompletedScan<N> {
    /// Copy the pending characters of a buffer
    ///
    /// Characters that do not fit are dropped.
    pub fn from_ascii(chars: &[u8]) -> Self {
        let mut text = String::new();
        for &byte in chars {
            if text.push(byte as char).is_err() {
                break;
            }
        }
        Self { text }
    }

    /// Scan text
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true for a scan terminated with nothing buffered
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<const N: usize> core::ops::Deref for CompletedScan<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for CompletedScan<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "<{}>", self.text.as_str());
    }
}
