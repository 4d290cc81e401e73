//! Wrapping scan buffer
//!
//! Scanners never legitimately exceed the configured length, so overflow is
//! treated as noise: the cursor wraps to zero and the characters typed so far
//! are overwritten by whatever follows.

/// Fixed-capacity character buffer with a wrapping write cursor
///
/// Invariant: `cursor < N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanBuffer<const N: usize> {
    chars: [u8; N],
    cursor: usize,
}

impl<const N: usize> Default for ScanBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ScanBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            chars: [0; N],
            cursor: 0,
        }
    }

    /// Write an ASCII character at the cursor and advance
    ///
    /// Returns true if the cursor wrapped back to zero.
    pub fn push_wrapping(&mut self, ch: u8) -> bool {
        self.chars[self.cursor] = ch;
        self.cursor += 1;

        if self.cursor == N {
            self.cursor = 0;
            return true;
        }
        false
    }

    /// Move the cursor back to zero without clearing the contents
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Current write position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Characters written since the last wrap or rewind
    pub fn pending(&self) -> &[u8] {
        &self.chars[..self.cursor]
    }

    /// Pending characters as a string slice
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever written
        core::str::from_utf8(self.pending()).unwrap_or("")
    }

    /// Full backing storage, including stale bytes past the cursor
    pub fn raw(&self) -> &[u8; N] {
        &self.chars
    }

    /// Buffer capacity
    pub const fn capacity(&self) -> usize {
        N
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for ScanBuffer<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ScanBuffer[{}/{}: {}]", self.cursor, N, self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_advances_cursor() {
        let mut buffer = ScanBuffer::<4>::new();
        assert!(!buffer.push_wrapping(b'a'));
        assert!(!buffer.push_wrapping(b'b'));

        assert_eq!(buffer.cursor(), 2);
        assert_eq!(buffer.as_str(), "ab");
    }

    #[test]
    fn test_wrap_at_capacity() {
        let mut buffer = ScanBuffer::<3>::new();
        buffer.push_wrapping(b'a');
        buffer.push_wrapping(b'b');
        assert!(buffer.push_wrapping(b'c'));

        assert_eq!(buffer.cursor(), 0);
        assert_eq!(buffer.as_str(), "");
        // Contents survive the wrap until overwritten
        assert_eq!(buffer.raw(), b"abc");

        buffer.push_wrapping(b'x');
        assert_eq!(buffer.as_str(), "x");
        assert_eq!(buffer.raw(), b"xbc");
    }

    #[test]
    fn test_rewind_keeps_contents() {
        let mut buffer = ScanBuffer::<4>::new();
        buffer.push_wrapping(b'1');
        buffer.push_wrapping(b'2');
        buffer.rewind();

        assert_eq!(buffer.cursor(), 0);
        assert_eq!(&buffer.raw()[..2], b"12");
    }
}
